use std::{collections::BTreeSet, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        catalog::{emergency_questions, EMERGENCY_QUESTION_COUNT},
        prompts::{FIRST_QUESTION_GUIDANCE, QUESTION_CONTEXT_HEADER, QUESTION_OUTPUT_FORMAT},
    },
    models::domain::{
        answer::total_points, Answer, AssessmentSession, DifficultyTier, TOTAL_QUESTIONS,
    },
    services::{
        completion_service::{CompletionParams, CompletionService},
        difficulty_estimator::DifficultyEstimator,
        topic_bank::{TopicBank, TopicSelection},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSource {
    Generator,
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedQuestion {
    pub question: String,
    pub topic: Option<String>,
    pub question_number: u8,
    pub tier: DifficultyTier,
    pub source: QuestionSource,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionOutcome {
    Question(GeneratedQuestion),
    Completed,
}

/// Shape the generator must return for a question.
#[derive(Debug, Deserialize)]
struct QuestionPayload {
    question: String,
    #[serde(default)]
    topic: Option<String>,
}

fn validate_payload(payload: &QuestionPayload) -> Result<(), String> {
    if payload.question.trim().is_empty() {
        return Err("question is empty".to_string());
    }
    Ok(())
}

/// Fixed question used when generation fails; never empty.
pub fn emergency_question(tier: DifficultyTier, question_number: u8) -> &'static str {
    let index = usize::from(question_number.saturating_sub(1)).min(EMERGENCY_QUESTION_COUNT - 1);
    emergency_questions(tier)[index]
}

pub fn build_question_prompt(
    question_number: u8,
    prior: &[Answer],
    selection: &TopicSelection,
    asked_topics: &BTreeSet<String>,
) -> String {
    let mut context = String::from(QUESTION_CONTEXT_HEADER);

    if !asked_topics.is_empty() {
        let asked: Vec<&str> = asked_topics.iter().map(String::as_str).collect();
        context.push_str(&format!("Topics already asked: {}\n", asked.join(", ")));
        context.push_str("You MUST ask about DIFFERENT topics that have NOT been covered yet.\n\n");
    }

    match DifficultyEstimator::performance_rate(prior) {
        Some(rate) => {
            context.push_str("Previous Questions and Student Responses:\n");
            for (i, answer) in prior.iter().enumerate() {
                context.push_str(&format!(
                    "{}. {}\n   Answer: {}\n\n",
                    i + 1,
                    answer.question,
                    answer.answer.recap_label()
                ));
            }
            context.push_str(&format!(
                "Current Performance: {}/{} points ({:.0}%)\n\n",
                total_points(prior),
                prior.len() * 2,
                rate * 100.0
            ));
            context.push_str(selection.tier.guidance());
            context.push('\n');
        }
        None => {
            context.push_str(FIRST_QUESTION_GUIDANCE);
            context.push('\n');
        }
    }

    context.push_str(&format!(
        "\nAvailable topics to choose from: {}\n",
        selection.pool.join(", ")
    ));
    context.push_str(&format!("Suggested topic: {}\n", selection.suggested));

    format!(
        "{context}\n\nCRITICAL INSTRUCTIONS:\n\
         1. Generate question {question_number} of {TOTAL_QUESTIONS} for Data Structures assessment\n\
         2. Pick ONE topic from the available topics list above that has NOT been asked yet\n\
         3. Ask about knowledge level: \"How well do you know [concept]?\"\n\
         4. Make it specific to the difficulty level: {tier}\n\
         5. The question MUST be completely DIFFERENT from all previous questions\n\n\
         {QUESTION_OUTPUT_FORMAT}",
        tier = selection.tier.label(),
    )
}

/// Picks the next question of an assessment.
pub struct QuestionService {
    completion: Arc<CompletionService>,
}

impl QuestionService {
    pub fn new(completion: Arc<CompletionService>) -> Self {
        Self { completion }
    }

    /// Returns `Completed` once the session is complete or for any
    /// `question_number` past the last question, leaving the session untouched.
    /// Generator failures are absorbed by the tier's emergency list.
    pub async fn next_question(
        &self,
        question_number: u8,
        prior: &[Answer],
        session: &mut AssessmentSession,
    ) -> QuestionOutcome {
        if session.is_complete() || question_number > TOTAL_QUESTIONS {
            return QuestionOutcome::Completed;
        }
        let question_number = question_number.max(1);

        let tier = DifficultyEstimator::estimate(prior);
        let selection = TopicBank::select(tier, session);
        let prompt = build_question_prompt(question_number, prior, &selection, &session.asked_topics);

        let generated = self
            .completion
            .generate_typed::<QuestionPayload, _>(
                "question generation",
                &prompt,
                CompletionParams::QUESTION,
                validate_payload,
            )
            .await;

        let question = match generated {
            Ok(payload) => {
                let topic = payload
                    .topic
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| selection.suggested.to_string());
                session.record_topic(topic.clone());

                log::info!(
                    "Generated question {} ({}) for session {}: topic '{}'",
                    question_number,
                    tier,
                    session.id,
                    topic
                );

                GeneratedQuestion {
                    question: payload.question.trim().to_string(),
                    topic: Some(topic),
                    question_number,
                    tier,
                    source: QuestionSource::Generator,
                }
            }
            Err(err) => {
                log::warn!(
                    "Question {} for session {} falls back to the emergency list: {}",
                    question_number,
                    session.id,
                    err
                );

                GeneratedQuestion {
                    question: emergency_question(tier, question_number).to_string(),
                    topic: None,
                    question_number,
                    tier,
                    source: QuestionSource::Fallback,
                }
            }
        };

        session.advance_past(question_number);
        session.touch();
        QuestionOutcome::Question(question)
    }
}
