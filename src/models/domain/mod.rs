pub mod answer;
pub mod difficulty;
pub mod roadmap;
pub mod score;
pub mod session;
pub use answer::{Answer, AnswerLevel};
pub use difficulty::{DifficultyTier, SkillLevel};
pub use roadmap::{GeneratedRoadmap, Provenance, Roadmap};
pub use score::ScoreSummary;
pub use session::{AssessmentSession, TOTAL_QUESTIONS};
