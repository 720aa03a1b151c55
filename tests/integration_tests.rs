use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
    time::Duration,
};

use actix_web::{test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};

use dsa_pathfinder::{
    app_state::AppState,
    config::{Config, DEFAULT_API_BASE, DEFAULT_CHAT_MODEL, DEFAULT_MODEL},
    errors::GeneratorError,
    handlers,
    repositories::InMemorySessionRepository,
    services::{
        completion_service::{CompletionClient, CompletionRequest, CompletionService},
        fallback_roadmap::build_fallback_roadmap,
        retry::RetryPolicy,
    },
};

fn config() -> Config {
    Config {
        groq_api_key: None,
        groq_api_base: DEFAULT_API_BASE.to_string(),
        groq_model: DEFAULT_MODEL.to_string(),
        groq_chat_model: DEFAULT_CHAT_MODEL.to_string(),
        generator_timeout_secs: 1,
        generator_max_attempts: 3,
        generator_backoff_ms: 0,
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 5000,
        session_idle_minutes: 60,
        chat_subject: "Data Structures".to_string(),
    }
}

/// Answers question prompts with the suggested topic and fails everything else.
#[derive(Default)]
struct TopicEchoClient {
    prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl CompletionClient for TopicEchoClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GeneratorError> {
        self.prompts.lock().unwrap().push(request.user.clone());

        let topic = request
            .user
            .lines()
            .find_map(|line| line.strip_prefix("Suggested topic: "))
            .ok_or_else(|| GeneratorError::Transport("unexpected prompt".to_string()))?;

        Ok(json!({
            "question": format!("How well do you know {}?", topic),
            "topic": topic,
        })
        .to_string())
    }
}

/// Always returns the same body.
struct FixedClient(String);

#[async_trait]
impl CompletionClient for FixedClient {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, GeneratorError> {
        Ok(self.0.clone())
    }
}

fn state_with(client: Option<Arc<dyn CompletionClient>>) -> web::Data<AppState> {
    let completion = CompletionService::new(
        client,
        RetryPolicy::new(3, Duration::ZERO),
        DEFAULT_MODEL,
        DEFAULT_CHAT_MODEL,
    );
    web::Data::new(AppState::with_parts(
        config(),
        completion,
        Arc::new(InMemorySessionRepository::new()),
    ))
}

fn answer(question: &Value, level: u8) -> Value {
    json!({ "question": question, "answer": level })
}

#[actix_web::test]
async fn test_full_assessment_on_fallbacks() {
    let state = state_with(None);
    let app = test::init_service(App::new().app_data(state.clone()).configure(handlers::configure)).await;

    let req = test::TestRequest::post().uri("/api/start").to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;
    let session_id = first["session_id"].clone();
    assert_eq!(first["question_number"], 1);

    let levels = [2u8, 2, 1, 0, 2];
    let mut answers = vec![answer(&first["question"], levels[0])];
    for (i, level) in levels.iter().enumerate().skip(1) {
        let req = test::TestRequest::post()
            .uri("/api/next-question")
            .set_json(json!({ "session_id": session_id, "previous_answers": answers }))
            .to_request();
        let next: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(next["question_number"], i + 1);
        assert_eq!(next["completed"], false);
        assert!(!next["question"].as_str().unwrap_or_default().is_empty());
        answers.push(answer(&next["question"], *level));
    }

    let req = test::TestRequest::post()
        .uri("/api/next-question")
        .set_json(json!({ "session_id": session_id, "previous_answers": answers }))
        .to_request();
    let done: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(done["completed"], true);

    let req = test::TestRequest::post()
        .uri("/api/complete-assessment")
        .set_json(json!({ "answers": answers }))
        .to_request();
    let score: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(score["score"], 7);
    assert_eq!(score["max_score"], 10);
    assert_eq!(score["percentage"], 70.0);
    assert_eq!(score["level"], "Intermediate");

    let req = test::TestRequest::post()
        .uri("/api/generate-roadmap")
        .set_json(json!({ "answers": answers }))
        .to_request();
    let roadmap: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(roadmap["generated_by"], "fallback");
    assert!(roadmap["roadmap"]["currentLevel"]
        .as_str()
        .unwrap_or_default()
        .starts_with("Intermediate - "));
    assert_eq!(roadmap["roadmap"]["weeklyPlan"].as_array().map(Vec::len), Some(4));
}

#[actix_web::test]
async fn test_generated_topics_never_repeat_within_a_session() {
    let client = Arc::new(TopicEchoClient::default());
    let state = state_with(Some(client.clone() as Arc<dyn CompletionClient>));
    let app = test::init_service(App::new().app_data(state.clone()).configure(handlers::configure)).await;

    let req = test::TestRequest::post().uri("/api/start").to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(first["source"], "generator");
    let session_id = first["session_id"].clone();

    let mut topics = vec![first["topic"].as_str().unwrap_or_default().to_string()];
    let mut answers = vec![answer(&first["question"], 1)];
    for _ in 2..=5 {
        let req = test::TestRequest::post()
            .uri("/api/next-question")
            .set_json(json!({ "session_id": session_id, "previous_answers": answers }))
            .to_request();
        let next: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(next["source"], "generator");
        topics.push(next["topic"].as_str().unwrap_or_default().to_string());
        answers.push(answer(&next["question"], 1));
    }

    let unique: HashSet<&String> = topics.iter().collect();
    assert_eq!(unique.len(), topics.len(), "repeated topic in {:?}", topics);

    let prompts = client.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 5);
    assert!(prompts[4].contains("Topics already asked:"));
}

#[actix_web::test]
async fn test_sessions_keep_separate_topic_history() {
    let state = state_with(Some(Arc::new(TopicEchoClient::default())));
    let app = test::init_service(App::new().app_data(state.clone()).configure(handlers::configure)).await;

    let req = test::TestRequest::post().uri("/api/start").to_request();
    let a: Value = test::call_and_read_body_json(&app, req).await;
    let req = test::TestRequest::post().uri("/api/start").to_request();
    let b: Value = test::call_and_read_body_json(&app, req).await;

    // Without per-session state the second start would have skipped the first topic.
    assert_eq!(a["topic"], b["topic"]);
    assert_ne!(a["session_id"], b["session_id"]);
    assert_eq!(state.sessions.len().await, 2);
}

#[actix_web::test]
async fn test_roadmap_from_generator_is_tagged() {
    let roadmap = build_fallback_roadmap(&[]);
    let body = serde_json::to_string(&roadmap).expect("roadmap serializes");
    let state = state_with(Some(Arc::new(FixedClient(body))));
    let app = test::init_service(App::new().app_data(state).configure(handlers::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/generate-roadmap")
        .set_json(json!({ "answers": [{ "question": "How well do you know tries?", "answer": 1 }] }))
        .to_request();
    let response: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response["generated_by"], "groq_api");
    assert!(response.get("note").is_none());
    assert_eq!(response["roadmap"]["overview"], roadmap.overview);
}

#[actix_web::test]
async fn test_malformed_generator_roadmap_falls_back() {
    let state = state_with(Some(Arc::new(FixedClient(
        r#"{"overview": "Looks great", "currentLevel": "Advanced"}"#.to_string(),
    ))));
    let app = test::init_service(App::new().app_data(state).configure(handlers::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/generate-roadmap")
        .set_json(json!({ "answers": [{ "question": "How well do you know graphs?", "answer": 0 }] }))
        .to_request();
    let response: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response["generated_by"], "fallback");
    assert_eq!(response["roadmap"]["improvements"][0], "How well do you know graphs?");
}

#[actix_web::test]
async fn test_chat_answers_relevant_question() {
    let state = state_with(Some(Arc::new(FixedClient("RELEVANT".to_string()))));
    let app = test::init_service(App::new().app_data(state).configure(handlers::configure)).await;

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({ "message": "What is a binary search tree?" }))
        .to_request();
    let response: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response["relevant"], true);
    assert_eq!(response["response"], "RELEVANT");
}

#[cfg(test)]
mod sync_tests {
    use dsa_pathfinder::services::fallback_roadmap::build_fallback_roadmap;

    #[test]
    fn test_fallback_roadmap_is_repeatable() {
        assert_eq!(build_fallback_roadmap(&[]), build_fallback_roadmap(&[]));
    }
}
