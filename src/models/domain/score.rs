use serde::Serialize;
use serde_json::Value;

use crate::models::domain::{
    answer::{total_points, Answer},
    difficulty::SkillLevel,
};

/// Result of scoring a completed assessment. Recomputed per request, never stored.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub level: SkillLevel,
}

impl ScoreSummary {
    /// Summary returned when the submitted answers cannot be read.
    pub fn zeroed() -> Self {
        Self {
            score: 0,
            max_score: 10,
            percentage: 0.0,
            level: SkillLevel::Beginner,
        }
    }

    /// Level is banded on the unrounded percentage; the reported value is rounded to one decimal.
    pub fn from_totals(score: u32, max_score: u32) -> Self {
        let percentage = percentage_of(score, max_score);
        Self {
            score,
            max_score,
            percentage: round_one_decimal(percentage),
            level: SkillLevel::from_percentage(percentage),
        }
    }

    pub fn from_answers(answers: &[Answer]) -> Self {
        if answers.is_empty() {
            return Self::zeroed();
        }
        Self::from_totals(total_points(answers), 2 * answers.len() as u32)
    }

    /// Lenient scoring over an untyped answer list.
    ///
    /// Anything other than a non-empty array yields [`ScoreSummary::zeroed`].
    /// Elements that are not objects add nothing but still count toward the
    /// maximum. Answer values are read from numbers, numeric strings or
    /// booleans and clamped to `0..=2`, so an out-of-range value such as `7`
    /// scores as a full answer instead of inflating the total past the
    /// maximum. Unparseable values score 0.
    pub fn from_raw(answers: &Value) -> Self {
        let items = match answers.as_array() {
            Some(items) if !items.is_empty() => items,
            _ => return Self::zeroed(),
        };

        let score = items
            .iter()
            .filter_map(Value::as_object)
            .map(|item| item.get("answer").map_or(0, lenient_points))
            .sum();

        Self::from_totals(score, 2 * items.len() as u32)
    }
}

fn lenient_points(value: &Value) -> u32 {
    let raw = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    };
    raw.unwrap_or(0).clamp(0, 2) as u32
}

/// `100 * score / max`, or 0 when there is nothing to score.
pub fn percentage_of(score: u32, max_score: u32) -> f64 {
    if max_score == 0 {
        0.0
    } else {
        100.0 * f64::from(score) / f64::from(max_score)
    }
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zeroed_summary_matches_defensive_default() {
        let summary = ScoreSummary::zeroed();

        assert_eq!(summary.score, 0);
        assert_eq!(summary.max_score, 10);
        assert_eq!(summary.percentage, 0.0);
        assert_eq!(summary.level, SkillLevel::Beginner);
    }

    #[test]
    fn from_totals_rounds_percentage() {
        let summary = ScoreSummary::from_totals(2, 3);

        assert_eq!(summary.percentage, 66.7);
        assert_eq!(summary.level, SkillLevel::Intermediate);
    }

    #[test]
    fn from_answers_scores_mixed_levels() {
        let answers = crate::test_utils::fixtures::answers_from_levels(&[2, 0, 1]);
        let summary = ScoreSummary::from_answers(&answers);

        assert_eq!(summary.score, 3);
        assert_eq!(summary.max_score, 6);
        assert_eq!(summary.percentage, 50.0);
        assert_eq!(summary.level, SkillLevel::Intermediate);
    }

    #[test]
    fn from_answers_empty_is_zeroed() {
        assert_eq!(ScoreSummary::from_answers(&[]), ScoreSummary::zeroed());
    }

    #[test]
    fn from_raw_rejects_non_lists() {
        for value in [json!(null), json!({"answer": 2}), json!("2,2,1"), json!([])] {
            assert_eq!(ScoreSummary::from_raw(&value), ScoreSummary::zeroed());
        }
    }

    #[test]
    fn from_raw_matches_typed_scoring() {
        let raw = json!([{"answer": 2}, {"answer": 0}, {"answer": 1}]);
        let summary = ScoreSummary::from_raw(&raw);

        assert_eq!(summary.score, 3);
        assert_eq!(summary.max_score, 6);
        assert_eq!(summary.percentage, 50.0);
    }

    #[test]
    fn from_raw_tolerates_odd_elements() {
        let raw = json!([
            {"question": "arrays?", "answer": 2},
            "not an object",
            {"question": "heaps?", "answer": "1"},
            {"question": "tries?"},
            {"question": "graphs?", "answer": 7},
        ]);
        let summary = ScoreSummary::from_raw(&raw);

        assert_eq!(summary.score, 5);
        assert_eq!(summary.max_score, 10);
        assert_eq!(summary.percentage, 50.0);
        assert_eq!(summary.level, SkillLevel::Intermediate);
    }

    #[test]
    fn from_raw_scores_unparseable_values_as_zero() {
        let raw = json!([
            {"question": "arrays?", "answer": "two"},
            {"question": "heaps?", "answer": "1.5"},
            {"question": "tries?", "answer": null},
            {"question": "graphs?", "answer": [2]},
            {"question": "stacks?", "answer": -3},
        ]);
        let summary = ScoreSummary::from_raw(&raw);

        assert_eq!(summary.score, 0);
        assert_eq!(summary.max_score, 10);
        assert_eq!(summary.level, SkillLevel::Beginner);
    }

    #[test]
    fn from_raw_never_exceeds_max_score() {
        let raw = json!([{"answer": 7}, {"answer": "9"}, {"answer": true}]);
        let summary = ScoreSummary::from_raw(&raw);

        assert_eq!(summary.score, 5);
        assert_eq!(summary.max_score, 6);
    }

    #[test]
    fn percentage_of_zero_max_is_zero() {
        assert_eq!(percentage_of(0, 0), 0.0);
    }
}
