use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::{errors::AppResult, models::domain::AssessmentSession};

/// A session handle. Holding its lock makes the caller the session's only writer.
pub type SharedSession = Arc<Mutex<AssessmentSession>>;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self) -> AppResult<SharedSession>;
    async fn get(&self, id: Uuid) -> AppResult<Option<SharedSession>>;
    async fn remove(&self, id: Uuid) -> AppResult<bool>;
    /// Drops sessions not seen for longer than `max_idle`; returns how many went.
    async fn evict_idle(&self, max_idle: Duration) -> AppResult<usize>;
    async fn len(&self) -> usize;
}

#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, SharedSession>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self) -> AppResult<SharedSession> {
        let session = AssessmentSession::new();
        let id = session.id;
        let shared = Arc::new(Mutex::new(session));

        self.sessions.write().await.insert(id, Arc::clone(&shared));
        log::info!("Created assessment session {}", id);

        Ok(shared)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<SharedSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&id).cloned())
    }

    async fn remove(&self, id: Uuid) -> AppResult<bool> {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            log::info!("Removed assessment session {}", id);
        }
        Ok(removed)
    }

    async fn evict_idle(&self, max_idle: Duration) -> AppResult<usize> {
        let cutoff = Utc::now() - max_idle;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        // A locked session is mid-request and therefore not idle.
        sessions.retain(|_, session| match session.try_lock() {
            Ok(guard) => guard.last_seen >= cutoff,
            Err(_) => true,
        });

        let evicted = before - sessions.len();
        if evicted > 0 {
            log::info!("Evicted {} idle assessment sessions", evicted);
        }
        Ok(evicted)
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
