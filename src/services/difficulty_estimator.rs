use crate::models::domain::{answer::total_points, Answer, DifficultyTier};

pub const ADVANCED_RATE: f64 = 0.75;
pub const INTERMEDIATE_RATE: f64 = 0.50;
pub const BASIC_RATE: f64 = 0.25;

pub struct DifficultyEstimator;

impl DifficultyEstimator {
    /// `points / (2 * answers)`, or `None` before the first answer.
    pub fn performance_rate(prior: &[Answer]) -> Option<f64> {
        if prior.is_empty() {
            return None;
        }
        let max = 2 * prior.len() as u32;
        Some(f64::from(total_points(prior)) / f64::from(max))
    }

    /// The first question is always `Basic`; afterwards thresholds are checked
    /// top-down and a rate equal to a threshold takes the higher tier.
    pub fn estimate(prior: &[Answer]) -> DifficultyTier {
        match Self::performance_rate(prior) {
            None => DifficultyTier::Basic,
            Some(rate) => Self::tier_for_rate(rate),
        }
    }

    pub fn tier_for_rate(rate: f64) -> DifficultyTier {
        if rate >= ADVANCED_RATE {
            DifficultyTier::Advanced
        } else if rate >= INTERMEDIATE_RATE {
            DifficultyTier::Intermediate
        } else if rate >= BASIC_RATE {
            DifficultyTier::Basic
        } else {
            DifficultyTier::VeryBasic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::AnswerLevel;
    use crate::test_utils::fixtures::answers_from_levels;

    #[test]
    fn empty_history_is_basic() {
        assert_eq!(DifficultyEstimator::estimate(&[]), DifficultyTier::Basic);
        assert_eq!(DifficultyEstimator::performance_rate(&[]), None);
    }

    #[test]
    fn threshold_boundaries_take_higher_tier() {
        assert_eq!(DifficultyEstimator::tier_for_rate(0.75), DifficultyTier::Advanced);
        assert_eq!(DifficultyEstimator::tier_for_rate(0.50), DifficultyTier::Intermediate);
        assert_eq!(DifficultyEstimator::tier_for_rate(0.25), DifficultyTier::Basic);
        assert_eq!(DifficultyEstimator::tier_for_rate(0.24999), DifficultyTier::VeryBasic);
        assert_eq!(DifficultyEstimator::tier_for_rate(0.0), DifficultyTier::VeryBasic);
        assert_eq!(DifficultyEstimator::tier_for_rate(1.0), DifficultyTier::Advanced);
    }

    #[test]
    fn exact_boundaries_from_answer_sequences() {
        // 3 of 4 points
        assert_eq!(
            DifficultyEstimator::estimate(&answers_from_levels(&[2, 1])),
            DifficultyTier::Advanced
        );
        // 2 of 4 points
        assert_eq!(
            DifficultyEstimator::estimate(&answers_from_levels(&[2, 0])),
            DifficultyTier::Intermediate
        );
        // 1 of 4 points
        assert_eq!(
            DifficultyEstimator::estimate(&answers_from_levels(&[1, 0])),
            DifficultyTier::Basic
        );
        // 2 of 10 points
        assert_eq!(
            DifficultyEstimator::estimate(&answers_from_levels(&[1, 1, 0, 0, 0])),
            DifficultyTier::VeryBasic
        );
    }

    #[test]
    fn every_history_up_to_five_answers_maps_to_a_tier() {
        let levels = [AnswerLevel::DoesNotKnow, AnswerLevel::Partial, AnswerLevel::KnowsWell];
        for len in 1..=5usize {
            for seed in 0..3usize.pow(len as u32) {
                let mut code = seed;
                let answers: Vec<Answer> = (0..len)
                    .map(|i| {
                        let level = levels[code % 3];
                        code /= 3;
                        Answer::new(format!("q{}", i), level)
                    })
                    .collect();

                let rate = DifficultyEstimator::performance_rate(&answers)
                    .expect("non-empty history has a rate");
                assert!((0.0..=1.0).contains(&rate));
                assert!(DifficultyTier::ALL.contains(&DifficultyEstimator::estimate(&answers)));
            }
        }
    }
}
