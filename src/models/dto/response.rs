use serde::Serialize;
use uuid::Uuid;

use crate::{
    models::domain::{
        DifficultyTier, GeneratedRoadmap, Provenance, Roadmap, ScoreSummary, TOTAL_QUESTIONS,
    },
    services::{
        chat_service::ChatProfile,
        question_service::{GeneratedQuestion, QuestionSource},
    },
};

pub const COURSE_NAME: &str = "Data Structures and Algorithms";
pub const ASSESSMENT_COMPLETED_MESSAGE: &str = "Assessment completed - ready for roadmap generation";
pub const FALLBACK_ROADMAP_NOTE: &str = "Generated using structured fallback due to API issue";

pub const CHAT_CONFIGURED_MESSAGE: &str = "Configuration updated successfully";

#[derive(Debug, Clone, Serialize)]
pub struct ChatConfigResponse {
    pub message: String,
    pub subject: String,
    pub topics_count: usize,
}

impl From<ChatProfile> for ChatConfigResponse {
    fn from(profile: ChatProfile) -> Self {
        Self {
            message: CHAT_CONFIGURED_MESSAGE.to_string(),
            subject: profile.subject,
            topics_count: profile.topics.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
    pub question: String,
    pub question_number: u8,
    pub total_questions: u8,
    pub completed: bool,
    pub difficulty: DifficultyTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub source: QuestionSource,
}

impl QuestionResponse {
    pub fn new(question: GeneratedQuestion, session_id: Option<Uuid>) -> Self {
        Self {
            success: true,
            session_id,
            question: question.question,
            question_number: question.question_number,
            total_questions: TOTAL_QUESTIONS,
            completed: false,
            difficulty: question.tier,
            topic: question.topic,
            source: question.source,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletedResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
    pub completed: bool,
    pub message: String,
}

impl CompletedResponse {
    pub fn new(session_id: Option<Uuid>) -> Self {
        Self {
            success: true,
            session_id,
            completed: true,
            message: ASSESSMENT_COMPLETED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub success: bool,
    #[serde(flatten)]
    pub summary: ScoreSummary,
    pub message: String,
}

impl From<ScoreSummary> for ScoreResponse {
    fn from(summary: ScoreSummary) -> Self {
        Self {
            success: true,
            summary,
            message: "Assessment completed successfully".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoadmapResponse {
    pub success: bool,
    pub roadmap: Roadmap,
    pub course: String,
    pub generated_by: Provenance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<GeneratedRoadmap> for RoadmapResponse {
    fn from(generated: GeneratedRoadmap) -> Self {
        let note = match generated.generated_by {
            Provenance::Fallback => Some(FALLBACK_ROADMAP_NOTE.to_string()),
            Provenance::GroqApi => None,
        };
        Self {
            success: true,
            roadmap: generated.roadmap,
            course: COURSE_NAME.to_string(),
            generated_by: generated.generated_by,
            note,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionDeletedResponse {
    pub success: bool,
    pub session_id: Uuid,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ai: String,
    pub api_configured: bool,
    pub service: &'static str,
    pub version: &'static str,
    pub active_sessions: usize,
}
