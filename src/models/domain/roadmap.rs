use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Personalised learning roadmap produced once per completed assessment.
///
/// Generator output is deserialised into this type, so a document missing any
/// top-level key is rejected before it reaches a client.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub overview: String,
    pub current_level: String,
    pub phases: Vec<Phase>,
    pub weekly_plan: Vec<WeekPlan>,
    pub resources: Resources,
    pub priority_concepts: Vec<PriorityConcept>,
    pub milestones: Vec<Milestone>,
    pub practice_strategy: PracticeStrategy,
    pub motivational_tips: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub name: String,
    pub duration: String,
    pub concepts: Vec<String>,
    pub goals: Vec<String>,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    pub week: u32,
    pub focus: String,
    pub daily_tasks: Vec<String>,
    pub practice_problems: Vec<String>,
    pub milestone: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Resources {
    pub videos: Vec<String>,
    pub articles: Vec<String>,
    pub practice: Vec<String>,
    pub books: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriorityConcept {
    pub concept: String,
    pub why: String,
    pub time_to_learn: String,
    pub prerequisites: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Milestone {
    pub title: String,
    pub description: String,
    pub timeframe: String,
    pub criteria: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PracticeStrategy {
    pub approach: String,
    pub easy_problems: Vec<String>,
    pub medium_problems: Vec<String>,
    pub hard_problems: Vec<String>,
    pub projects: Vec<String>,
}

/// Top-level keys every roadmap document carries, in wire order.
pub const ROADMAP_KEYS: [&str; 12] = [
    "overview",
    "currentLevel",
    "phases",
    "weeklyPlan",
    "resources",
    "priorityConcepts",
    "milestones",
    "practiceStrategy",
    "motivationalTips",
    "strengths",
    "improvements",
    "recommendations",
];

impl Roadmap {
    /// Checks the content invariants serde cannot express.
    pub fn check_complete(&self) -> Result<(), String> {
        if self.overview.trim().is_empty() {
            return Err("overview is empty".to_string());
        }
        if self.phases.is_empty() {
            return Err("phases is empty".to_string());
        }
        if self.weekly_plan.is_empty() {
            return Err("weeklyPlan is empty".to_string());
        }
        Ok(())
    }
}

/// Where a roadmap came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Provenance {
    #[serde(rename = "groq_api")]
    GroqApi,
    #[serde(rename = "fallback")]
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedRoadmap {
    pub roadmap: Roadmap,
    pub generated_by: Provenance,
}
