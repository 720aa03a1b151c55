use std::sync::Arc;

use once_cell::sync::Lazy;
use schemars::schema_for;

use crate::{
    constants::prompts::{ROADMAP_REQUIREMENTS, ROADMAP_SECTIONS},
    models::domain::{
        answer::total_points, Answer, AnswerLevel, GeneratedRoadmap, Provenance, Roadmap,
        ScoreSummary,
    },
    services::{
        completion_service::{CompletionParams, CompletionService},
        fallback_roadmap::build_fallback_roadmap,
    },
};

static ROADMAP_SCHEMA: Lazy<String> =
    Lazy::new(|| serde_json::to_string_pretty(&schema_for!(Roadmap)).unwrap_or_default());

fn bucket(answers: &[Answer], level: AnswerLevel, marker: &str, empty_line: &str) -> String {
    let lines: Vec<String> = answers
        .iter()
        .filter(|a| a.answer == level)
        .map(|a| format!("{} {}", marker, a.question))
        .collect();

    if lines.is_empty() {
        empty_line.to_string()
    } else {
        lines.join("\n")
    }
}

pub fn build_roadmap_prompt(answers: &[Answer]) -> String {
    let summary = ScoreSummary::from_totals(total_points(answers), 2 * answers.len() as u32);
    let level = summary.level;

    format!(
        "You are an expert Data Structures and Algorithms educator creating a personalized learning roadmap.\n\n\
         STUDENT ASSESSMENT RESULTS:\n\
         - Total Score: {score}/{max} points ({percentage:.1}%)\n\
         - Assessed Level: {level}\n\
         - Learning Focus: {focus}\n\n\
         CONCEPTS STUDENT KNOWS WELL:\n{known}\n\n\
         CONCEPTS STUDENT SOMEWHAT KNOWS:\n{partial}\n\n\
         CONCEPTS STUDENT NEEDS TO LEARN:\n{unknown}\n\n\
         {ROADMAP_SECTIONS}\n\n\
         Match ALL content to the student's {level} level.\n\n\
         {ROADMAP_REQUIREMENTS}\n\n\
         JSON SCHEMA:\n{schema}",
        score = summary.score,
        max = summary.max_score,
        percentage = summary.percentage,
        focus = level.focus_area(),
        known = bucket(answers, AnswerLevel::KnowsWell, "✓", "• Building foundational knowledge"),
        partial = bucket(answers, AnswerLevel::Partial, "◐", "• No partial knowledge areas"),
        unknown = bucket(answers, AnswerLevel::DoesNotKnow, "✗", "• Continue advancing knowledge"),
        schema = ROADMAP_SCHEMA.as_str(),
    )
}

/// Produces a roadmap for a finished assessment. Never fails.
pub struct RoadmapService {
    completion: Arc<CompletionService>,
}

impl RoadmapService {
    pub fn new(completion: Arc<CompletionService>) -> Self {
        Self { completion }
    }

    pub async fn generate(&self, answers: &[Answer]) -> GeneratedRoadmap {
        log::info!("Generating roadmap for {} assessment answers", answers.len());

        let prompt = build_roadmap_prompt(answers);
        let generated = self
            .completion
            .generate_typed::<Roadmap, _>(
                "roadmap generation",
                &prompt,
                CompletionParams::ROADMAP,
                Roadmap::check_complete,
            )
            .await;

        match generated {
            Ok(roadmap) => GeneratedRoadmap {
                roadmap,
                generated_by: Provenance::GroqApi,
            },
            Err(err) => {
                log::warn!("Roadmap generation failed, using fallback: {}", err);
                GeneratedRoadmap {
                    roadmap: build_fallback_roadmap(answers),
                    generated_by: Provenance::Fallback,
                }
            }
        }
    }
}
