pub mod chat_service;
pub mod completion_service;
pub mod difficulty_estimator;
pub mod fallback_roadmap;
pub mod question_service;
pub mod retry;
pub mod roadmap_service;
pub mod topic_bank;
