use std::sync::Arc;

use actix_web::{delete, post, web, HttpResponse};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    models::{
        domain::{AssessmentSession, ScoreSummary},
        dto::{
            request::{CompleteAssessmentRequest, NextQuestionRequest},
            response::{CompletedResponse, QuestionResponse, ScoreResponse, SessionDeletedResponse},
        },
    },
    repositories::SharedSession,
    services::question_service::QuestionOutcome,
};

fn question_response(outcome: QuestionOutcome, session_id: Option<Uuid>) -> HttpResponse {
    match outcome {
        QuestionOutcome::Question(question) => {
            HttpResponse::Ok().json(QuestionResponse::new(question, session_id))
        }
        QuestionOutcome::Completed => HttpResponse::Ok().json(CompletedResponse::new(session_id)),
    }
}

#[post("/api/start")]
pub async fn start_assessment(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let shared = state.sessions.create().await?;
    let mut session = shared.lock().await;
    let session_id = session.id;

    let outcome = state
        .question_service
        .next_question(1, &[], &mut session)
        .await;

    match outcome {
        QuestionOutcome::Completed => Err(AppError::InternalError(
            "assessment completed before the first question".to_string(),
        )),
        outcome => Ok(question_response(outcome, Some(session_id))),
    }
}

#[post("/api/next-question")]
pub async fn next_question(
    state: web::Data<AppState>,
    request: web::Json<NextQuestionRequest>,
) -> AppResult<HttpResponse> {
    let request = request.into_inner();

    let shared: SharedSession = match request.session_id {
        Some(id) => state
            .sessions
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Assessment session {} not found", id)))?,
        None => {
            log::debug!("next-question without session_id; using a transient session");
            Arc::new(Mutex::new(AssessmentSession::new()))
        }
    };

    // Held until the question is chosen so one session never has two writers.
    let mut session = shared.lock().await;
    let question_number = request.question_number();
    if request.session_id.is_some() && !session.accepts(question_number) {
        return Err(AppError::BadRequest(format!(
            "Session {} expects {} previous answers, got {}",
            session.id,
            session.question_index - 1,
            request.previous_answers.len()
        )));
    }

    let outcome = state
        .question_service
        .next_question(question_number, &request.previous_answers, &mut session)
        .await;

    Ok(question_response(outcome, request.session_id))
}

#[post("/api/complete-assessment")]
pub async fn complete_assessment(
    request: web::Json<CompleteAssessmentRequest>,
) -> AppResult<HttpResponse> {
    let summary = ScoreSummary::from_raw(&request.answers);

    log::info!(
        "Assessment complete - score: {}/{} ({:.1}%) - level: {}",
        summary.score,
        summary.max_score,
        summary.percentage,
        summary.level
    );

    Ok(HttpResponse::Ok().json(ScoreResponse::from(summary)))
}

#[delete("/api/sessions/{id}")]
pub async fn delete_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    if !state.sessions.remove(id).await? {
        return Err(AppError::NotFound(format!("Assessment session {} not found", id)));
    }

    Ok(HttpResponse::Ok().json(SessionDeletedResponse {
        success: true,
        session_id: id,
        message: "Assessment session discarded".to_string(),
    }))
}
