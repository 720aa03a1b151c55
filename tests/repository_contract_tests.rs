use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use dsa_pathfinder::{
    models::domain::DifficultyTier,
    repositories::{InMemorySessionRepository, SessionRepository},
    services::topic_bank::TopicBank,
};

fn repository() -> Arc<dyn SessionRepository> {
    Arc::new(InMemorySessionRepository::new())
}

#[tokio::test]
async fn session_repository_create_get_remove_contract() {
    let repo = repository();

    let session = repo.create().await.expect("create");
    let id = session.lock().await.id;
    assert_eq!(repo.len().await, 1);

    let found = repo.get(id).await.expect("get").expect("present");
    assert!(Arc::ptr_eq(&session, &found));

    assert!(repo.remove(id).await.expect("remove"));
    assert!(repo.get(id).await.expect("get").is_none());
    assert!(!repo.remove(Uuid::new_v4()).await.expect("remove unknown"));
}

#[tokio::test]
async fn session_repository_eviction_contract() {
    let repo = repository();
    let idle = repo.create().await.expect("create");
    let active = repo.create().await.expect("create");
    idle.lock().await.last_seen = Utc::now() - Duration::hours(3);

    let evicted = repo.evict_idle(Duration::hours(1)).await.expect("evict");

    assert_eq!(evicted, 1);
    assert_eq!(repo.len().await, 1);
    let active_id = active.lock().await.id;
    assert!(repo.get(active_id).await.expect("get").is_some());
}

#[tokio::test]
async fn concurrent_writers_on_one_session_are_serialized() {
    let repo = repository();
    let session = repo.create().await.expect("create");
    let topics = TopicBank::topics_for(DifficultyTier::Advanced);

    let handles: Vec<_> = topics
        .iter()
        .map(|topic| {
            let session = Arc::clone(&session);
            tokio::spawn(async move {
                let mut guard = session.lock().await;
                guard.record_topic(*topic);
                tokio::task::yield_now().await;
                guard.touch();
            })
        })
        .collect();
    for handle in handles {
        handle.await.expect("task");
    }

    assert_eq!(session.lock().await.asked_topics.len(), topics.len());
}
