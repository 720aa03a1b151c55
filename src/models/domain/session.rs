use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Number of questions in one assessment.
pub const TOTAL_QUESTIONS: u8 = 5;

/// Per-client assessment state.
///
/// `asked_topics` only grows while the current tier still has unused topics;
/// it is cleared when a tier's pool wraps around.
#[derive(Clone, Debug, Serialize)]
pub struct AssessmentSession {
    pub id: Uuid,
    pub asked_topics: BTreeSet<String>,
    pub question_index: u8,
    pub last_seen: DateTime<Utc>,
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            asked_topics: BTreeSet::new(),
            question_index: 1,
            last_seen: Utc::now(),
        }
    }

    pub fn record_topic(&mut self, topic: impl Into<String>) {
        self.asked_topics.insert(topic.into());
    }

    /// Advance to the question after `question_number`, never moving backwards.
    pub fn advance_past(&mut self, question_number: u8) {
        let next = question_number.saturating_add(1).min(TOTAL_QUESTIONS + 1);
        self.question_index = self.question_index.max(next);
    }

    pub fn is_complete(&self) -> bool {
        self.question_index > TOTAL_QUESTIONS
    }

    /// A request may ask for the session's current question, or for anything
    /// once the session is complete, since that always answers `Completed`.
    pub fn accepts(&self, question_number: u8) -> bool {
        self.is_complete() || question_number == self.question_index
    }

    pub fn touch(&mut self) {
        self.last_seen = Utc::now();
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}
