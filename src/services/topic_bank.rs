use std::collections::BTreeSet;

use crate::{
    constants::catalog::{ADVANCED_TOPICS, BASIC_TOPICS, INTERMEDIATE_TOPICS, VERY_BASIC_TOPICS},
    models::domain::{AssessmentSession, DifficultyTier},
};

/// Outcome of looking for an unused topic in a tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopicPick {
    Topic(&'static str),
    Exhausted,
}

/// Topic chosen for the next question together with the pool offered to the generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicSelection {
    pub tier: DifficultyTier,
    pub suggested: &'static str,
    pub pool: Vec<&'static str>,
    /// The tier had no unused topics and the asked set was cleared first.
    pub wrapped: bool,
}

/// Static tiered topic catalog.
pub struct TopicBank;

impl TopicBank {
    pub fn topics_for(tier: DifficultyTier) -> &'static [&'static str] {
        match tier {
            DifficultyTier::VeryBasic => VERY_BASIC_TOPICS,
            DifficultyTier::Basic => BASIC_TOPICS,
            DifficultyTier::Intermediate => INTERMEDIATE_TOPICS,
            DifficultyTier::Advanced => ADVANCED_TOPICS,
        }
    }

    /// Unused topics of `tier`, in catalog order.
    pub fn available(tier: DifficultyTier, asked: &BTreeSet<String>) -> Vec<&'static str> {
        Self::topics_for(tier)
            .iter()
            .copied()
            .filter(|topic| !asked.contains(*topic))
            .collect()
    }

    pub fn next_available(tier: DifficultyTier, asked: &BTreeSet<String>) -> TopicPick {
        Self::topics_for(tier)
            .iter()
            .copied()
            .find(|topic| !asked.contains(*topic))
            .map_or(TopicPick::Exhausted, TopicPick::Topic)
    }

    /// Picks the next topic for `session`, clearing its asked set first when
    /// the tier has nothing left. The tier never changes on wraparound.
    pub fn select(tier: DifficultyTier, session: &mut AssessmentSession) -> TopicSelection {
        let mut wrapped = false;
        if Self::next_available(tier, &session.asked_topics) == TopicPick::Exhausted {
            log::debug!(
                "Topic pool for {} exhausted in session {}; starting over",
                tier,
                session.id
            );
            session.asked_topics.clear();
            wrapped = true;
        }

        let pool = Self::available(tier, &session.asked_topics);
        let suggested = match Self::next_available(tier, &session.asked_topics) {
            TopicPick::Topic(topic) => topic,
            // Unreachable with a non-empty catalog: the asked set was just cleared.
            TopicPick::Exhausted => Self::topics_for(tier)[0],
        };

        TopicSelection {
            tier,
            suggested,
            pool,
            wrapped,
        }
    }
}
