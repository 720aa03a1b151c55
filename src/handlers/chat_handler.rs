use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppResult,
    models::dto::{
        request::{ChatRequest, ConfigureChatRequest},
        response::ChatConfigResponse,
    },
};

#[post("/chat")]
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> AppResult<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;

    let reply = state.chat_service.reply(&request.message).await;
    Ok(HttpResponse::Ok().json(reply))
}

#[post("/configure")]
pub async fn configure_chat(
    state: web::Data<AppState>,
    request: web::Json<ConfigureChatRequest>,
) -> AppResult<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;

    let profile = state
        .chat_service
        .configure(request.subject, request.topics)
        .await;
    Ok(HttpResponse::Ok().json(ChatConfigResponse::from(profile)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, test_utils::test_helpers::assert_error_status};
    use actix_web::{test, App};
    use serde_json::{json, Value};

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::new(Config::test_config()))
    }

    #[actix_web::test]
    async fn test_chat_rejects_blank_message() {
        let app = test::init_service(App::new().app_data(state()).service(chat)).await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({ "message": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_status(resp.status());
    }

    #[actix_web::test]
    async fn test_chat_rejects_missing_message() {
        let app = test::init_service(App::new().app_data(state()).service(chat)).await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({ "text": "hello" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_status(resp.status());
    }

    #[actix_web::test]
    async fn test_chat_off_topic_without_generator() {
        let app = test::init_service(App::new().app_data(state()).service(chat)).await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({ "message": "What is the capital of France?" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["relevant"], false);
        assert_eq!(body["classification"], "FALLBACK_CHECK");
        assert_eq!(body["subject"], "Data Structures");
    }

    #[actix_web::test]
    async fn test_configure_changes_subject_and_keyword_guard() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .service(chat)
                .service(configure_chat),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/configure")
            .set_json(json!({ "subject": "Geography", "topics": ["capital", "river", "mountain"] }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Configuration updated successfully");
        assert_eq!(body["subject"], "Geography");
        assert_eq!(body["topics_count"], 3);

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({ "message": "What is the capital of France?" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["relevant"], true);
        assert_eq!(body["classification"], "FALLBACK_CHECK");
        assert_eq!(body["subject"], "Geography");
    }

    #[actix_web::test]
    async fn test_configure_rejects_empty_topic_list() {
        let app = test::init_service(App::new().app_data(state()).service(configure_chat)).await;

        let req = test::TestRequest::post()
            .uri("/configure")
            .set_json(json!({ "topics": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_status(resp.status());
    }
}
