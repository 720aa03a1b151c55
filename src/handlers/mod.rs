pub mod assessment_handler;
pub mod chat_handler;
pub mod health_handler;
pub mod roadmap_handler;

use actix_web::web;

pub use assessment_handler::{complete_assessment, delete_session, next_question, start_assessment};
pub use chat_handler::{chat, configure_chat};
pub use health_handler::{health_check, health_check_live, index};
pub use roadmap_handler::generate_roadmap;

/// Registers every route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(start_assessment)
        .service(next_question)
        .service(complete_assessment)
        .service(delete_session)
        .service(generate_roadmap)
        .service(chat)
        .service(configure_chat)
        .service(health_check)
        .service(health_check_live)
        .service(index);
}
