use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::domain::Answer;

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Message cannot be empty".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
pub struct NextQuestionRequest {
    /// Absent ids get a throwaway session.
    #[serde(default)]
    pub session_id: Option<Uuid>,

    #[serde(default)]
    pub previous_answers: Vec<Answer>,
}

impl NextQuestionRequest {
    /// The question to ask next, one past the answers already given.
    pub fn question_number(&self) -> u8 {
        u8::try_from(self.previous_answers.len().saturating_add(1)).unwrap_or(u8::MAX)
    }
}

/// Scored leniently, so `answers` stays untyped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompleteAssessmentRequest {
    #[serde(default)]
    pub answers: Value,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RoadmapRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "No assessment answers provided"))]
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(max = 4000), custom(function = "validate_not_blank"))]
    pub message: String,
}

/// Either field may be omitted; omitted fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_chat_config"))]
pub struct ConfigureChatRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub subject: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, max = 500))]
    pub topics: Option<Vec<String>>,
}

fn validate_chat_config(request: &ConfigureChatRequest) -> Result<(), ValidationError> {
    if let Some(subject) = &request.subject {
        validate_not_blank(subject)?;
    }

    let blank = request
        .topics
        .as_ref()
        .is_some_and(|topics| topics.iter().any(|topic| topic.trim().is_empty()));
    if blank {
        let mut err = ValidationError::new("blank_topic");
        err.message = Some("Topics cannot be empty".into());
        return Err(err);
    }
    Ok(())
}
