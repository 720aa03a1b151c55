use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, models::dto::response::HealthResponse};

const SERVICE_NAME: &str = "Integrated Assessment & Roadmap Generator";

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        ai: format!("groq-{}", state.config.groq_model),
        api_configured: state.completion.is_configured(),
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        active_sessions: state.sessions.len().await,
    })
}

#[get("/health/live")]
pub async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/")]
pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    let chat_subject = state.chat_service.subject().await;
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Integrated Data Structures Assessment & Roadmap Generator API",
        "version": env!("CARGO_PKG_VERSION"),
        "flow": "Assessment (5 questions) -> Score Analysis -> Personalized Roadmap",
        "chat_subject": chat_subject,
        "endpoints": {
            "/api/start": {
                "method": "POST",
                "description": "Start a new assessment session and return the first question"
            },
            "/api/next-question": {
                "method": "POST",
                "description": "Get the next adaptive question",
                "required": "session_id and previous_answers array"
            },
            "/api/complete-assessment": {
                "method": "POST",
                "description": "Score a finished assessment",
                "required": "answers array"
            },
            "/api/generate-roadmap": {
                "method": "POST",
                "description": "Generate a personalized learning roadmap",
                "required": "answers array"
            },
            "/api/sessions/{id}": {
                "method": "DELETE",
                "description": "Discard an assessment session"
            },
            "/chat": {
                "method": "POST",
                "description": "Ask the subject tutor a question",
                "required": "message"
            },
            "/configure": {
                "method": "POST",
                "description": "Change the tutor subject and its keyword topics",
                "optional": "subject, topics"
            },
            "/health": {
                "method": "GET",
                "description": "Service health and generator configuration"
            }
        },
        "answer_format": {
            "question": "The generated question text",
            "answer": "0 (don't know) | 1 (somewhat know) | 2 (know well)",
            "example": { "question": "How well do you know arrays?", "answer": 2 }
        }
    }))
}
