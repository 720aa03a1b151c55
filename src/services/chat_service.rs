use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::{
    constants::{
        catalog::SUBJECT_KEYWORDS,
        prompts::{
            IRRELEVANT_REPLY_TEMPLATE, RELEVANCE_CLASSIFIER_TEMPLATE, TUTOR_SYSTEM_TEMPLATE,
            TUTOR_UNAVAILABLE_REPLY,
        },
    },
    services::completion_service::{CompletionParams, CompletionService},
};

pub const FALLBACK_CLASSIFICATION: &str = "FALLBACK_CHECK";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelevanceVerdict {
    pub relevant: bool,
    pub classification: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub relevant: bool,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
}

/// What the tutor talks about. `topics` are stored lowercased and drive the
/// keyword check when the classifier is unreachable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatProfile {
    pub subject: String,
    pub topics: Vec<String>,
}

impl ChatProfile {
    pub fn new(
        subject: impl Into<String>,
        topics: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        Self {
            subject: subject.into(),
            topics: normalize_topics(topics),
        }
    }

    /// Keyword guardrail used when the classifier cannot be reached.
    pub fn matches_keywords(&self, message: &str) -> bool {
        let lowered = message.to_lowercase();
        self.topics.iter().any(|topic| lowered.contains(topic.as_str()))
    }
}

fn normalize_topics(topics: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<String> {
    topics
        .into_iter()
        .map(|topic| topic.as_ref().trim().to_lowercase())
        .filter(|topic| !topic.is_empty())
        .collect()
}

/// `RELEVANT` counts only when `IRRELEVANT` is absent.
fn is_relevant_label(classification: &str) -> bool {
    classification.contains("RELEVANT") && !classification.contains("IRRELEVANT")
}

/// Subject-guarded tutor chat. The subject and its topic list can be swapped
/// at runtime.
pub struct ChatService {
    completion: Arc<CompletionService>,
    profile: RwLock<ChatProfile>,
}

impl ChatService {
    pub fn new(completion: Arc<CompletionService>, subject: impl Into<String>) -> Self {
        Self::with_profile(completion, ChatProfile::new(subject, SUBJECT_KEYWORDS.iter()))
    }

    pub fn with_profile(completion: Arc<CompletionService>, profile: ChatProfile) -> Self {
        Self {
            completion,
            profile: RwLock::new(profile),
        }
    }

    pub async fn subject(&self) -> String {
        self.profile.read().await.subject.clone()
    }

    pub async fn profile(&self) -> ChatProfile {
        self.profile.read().await.clone()
    }

    /// Replaces whichever of subject and topics is given and returns the
    /// resulting profile.
    pub async fn configure(
        &self,
        subject: Option<String>,
        topics: Option<Vec<String>>,
    ) -> ChatProfile {
        let mut profile = self.profile.write().await;
        if let Some(subject) = subject {
            profile.subject = subject.trim().to_string();
        }
        if let Some(topics) = topics {
            profile.topics = normalize_topics(topics);
        }

        log::info!(
            "Chat configured: subject '{}' with {} topics",
            profile.subject,
            profile.topics.len()
        );
        profile.clone()
    }

    pub async fn relevance(&self, message: &str) -> RelevanceVerdict {
        let profile = self.profile().await;
        self.relevance_for(&profile, message).await
    }

    async fn relevance_for(&self, profile: &ChatProfile, message: &str) -> RelevanceVerdict {
        let prompt = RELEVANCE_CLASSIFIER_TEMPLATE
            .replace("{subject}", &profile.subject)
            .replace("{question}", message);

        match self
            .completion
            .complete_text("relevance check", None, &prompt, CompletionParams::CLASSIFIER)
            .await
        {
            Ok(content) => {
                let classification = content.trim().to_uppercase();
                RelevanceVerdict {
                    relevant: is_relevant_label(&classification),
                    classification,
                }
            }
            Err(err) => {
                log::warn!("Relevance classifier unavailable, using keyword check: {}", err);
                RelevanceVerdict {
                    relevant: profile.matches_keywords(message),
                    classification: FALLBACK_CLASSIFICATION.to_string(),
                }
            }
        }
    }

    /// Answers `message` if it is on-subject. Generator trouble never surfaces
    /// as an error; the caller always gets a reply.
    pub async fn reply(&self, message: &str) -> ChatReply {
        let message = message.trim();
        let profile = self.profile().await;
        let verdict = self.relevance_for(&profile, message).await;

        if !verdict.relevant {
            log::info!("Rejected off-subject chat message ({})", verdict.classification);
            return ChatReply {
                response: IRRELEVANT_REPLY_TEMPLATE.replace("{subject}", &profile.subject),
                relevant: false,
                subject: profile.subject,
                classification: Some(verdict.classification),
            };
        }

        let system = TUTOR_SYSTEM_TEMPLATE.replace("{subject}", &profile.subject);
        let response = match self
            .completion
            .complete_text("tutor reply", Some(&system), message, CompletionParams::TUTOR)
            .await
        {
            Ok(text) => text,
            Err(err) => {
                log::error!("Tutor reply failed: {}", err);
                TUTOR_UNAVAILABLE_REPLY.to_string()
            }
        };

        ChatReply {
            response,
            relevant: true,
            subject: profile.subject,
            classification: None,
        }
    }
}
