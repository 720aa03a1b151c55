use serde::{Deserialize, Serialize};

/// Self-reported knowledge level for one assessment question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AnswerLevel {
    DoesNotKnow,
    Partial,
    KnowsWell,
}

impl AnswerLevel {
    pub fn points(self) -> u32 {
        match self {
            AnswerLevel::DoesNotKnow => 0,
            AnswerLevel::Partial => 1,
            AnswerLevel::KnowsWell => 2,
        }
    }

    /// Phrase used when replaying prior answers to the generator.
    pub fn recap_label(self) -> &'static str {
        match self {
            AnswerLevel::KnowsWell => "KNOWS WELL",
            AnswerLevel::Partial => "SOMEWHAT KNOWS",
            AnswerLevel::DoesNotKnow => "DOESN'T KNOW",
        }
    }
}

impl TryFrom<u8> for AnswerLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AnswerLevel::DoesNotKnow),
            1 => Ok(AnswerLevel::Partial),
            2 => Ok(AnswerLevel::KnowsWell),
            other => Err(format!("answer must be 0, 1 or 2 (got {})", other)),
        }
    }
}

impl From<AnswerLevel> for u8 {
    fn from(level: AnswerLevel) -> Self {
        level.points() as u8
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    pub question: String,
    pub answer: AnswerLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl Answer {
    pub fn new(question: impl Into<String>, answer: AnswerLevel) -> Self {
        Self {
            question: question.into(),
            answer,
            topic: None,
        }
    }
}

/// Sum of answer points across a sequence.
pub fn total_points(answers: &[Answer]) -> u32 {
    answers.iter().map(|a| a.answer.points()).sum()
}
