use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppResult,
    models::dto::{request::RoadmapRequest, response::RoadmapResponse},
};

#[post("/api/generate-roadmap")]
pub async fn generate_roadmap(
    state: web::Data<AppState>,
    request: web::Json<RoadmapRequest>,
) -> AppResult<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;

    let generated = state.roadmap_service.generate(&request.answers).await;
    Ok(HttpResponse::Ok().json(RoadmapResponse::from(generated)))
}
