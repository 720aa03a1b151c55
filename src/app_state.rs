use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{InMemorySessionRepository, SessionRepository},
    services::{
        chat_service::ChatService, completion_service::CompletionService,
        question_service::QuestionService, roadmap_service::RoadmapService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub completion: Arc<CompletionService>,
    pub question_service: Arc<QuestionService>,
    pub roadmap_service: Arc<RoadmapService>,
    pub chat_service: Arc<ChatService>,
    pub sessions: Arc<dyn SessionRepository>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let completion = CompletionService::from_config(&config);
        Self::with_parts(config, completion, Arc::new(InMemorySessionRepository::new()))
    }

    /// Wires the services around an explicit generator and session store.
    pub fn with_parts(
        config: Config,
        completion: CompletionService,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        let completion = Arc::new(completion);

        let question_service = Arc::new(QuestionService::new(Arc::clone(&completion)));
        let roadmap_service = Arc::new(RoadmapService::new(Arc::clone(&completion)));
        let chat_service = Arc::new(ChatService::new(
            Arc::clone(&completion),
            config.chat_subject.clone(),
        ));

        Self {
            config: Arc::new(config),
            completion,
            question_service,
            roadmap_service,
            chat_service,
            sessions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_app_state_without_key_has_no_generator() {
        let state = AppState::new(Config::test_config());

        assert!(!state.completion.is_configured());
        assert_eq!(state.chat_service.subject().await, "Data Structures");
        assert_eq!(state.sessions.len().await, 0);
    }
}
