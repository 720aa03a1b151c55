use std::fmt;

use serde::{Deserialize, Serialize};

/// Difficulty band used to pick the topic pool for the next question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DifficultyTier {
    VeryBasic,
    Basic,
    Intermediate,
    Advanced,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 4] = [
        DifficultyTier::VeryBasic,
        DifficultyTier::Basic,
        DifficultyTier::Intermediate,
        DifficultyTier::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DifficultyTier::VeryBasic => "VERY BASIC",
            DifficultyTier::Basic => "BASIC",
            DifficultyTier::Intermediate => "INTERMEDIATE",
            DifficultyTier::Advanced => "ADVANCED",
        }
    }

    /// Instruction line placed in the question prompt.
    pub fn guidance(self) -> &'static str {
        match self {
            DifficultyTier::VeryBasic => {
                "Student knows very little. Ask the most FUNDAMENTAL question possible."
            }
            DifficultyTier::Basic => "Student is STRUGGLING. Ask a FUNDAMENTAL/BASIC question.",
            DifficultyTier::Intermediate => {
                "Student is performing MODERATELY. Ask an INTERMEDIATE level question."
            }
            DifficultyTier::Advanced => {
                "Student is performing EXCELLENTLY. Ask an ADVANCED/EXPERT level question."
            }
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Learner level reported in score summaries and roadmaps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum SkillLevel {
    Beginner,
    #[serde(rename = "Beginner-Intermediate")]
    BeginnerIntermediate,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Bands on a 0-100 scale; boundaries belong to the higher band.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 75.0 {
            SkillLevel::Advanced
        } else if percentage >= 50.0 {
            SkillLevel::Intermediate
        } else if percentage >= 25.0 {
            SkillLevel::BeginnerIntermediate
        } else {
            SkillLevel::Beginner
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::BeginnerIntermediate => "Beginner-Intermediate",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }

    pub fn focus_area(self) -> &'static str {
        match self {
            SkillLevel::Advanced => "mastery, optimization, and expert-level topics",
            SkillLevel::Intermediate => {
                "strengthening core concepts and exploring advanced topics"
            }
            SkillLevel::BeginnerIntermediate => {
                "building solid fundamentals and basic implementations"
            }
            SkillLevel::Beginner => "establishing strong foundational understanding",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
