use crate::models::domain::{Answer, AnswerLevel};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Builds answers with numbered questions from raw 0/1/2 levels.
    pub fn answers_from_levels(levels: &[u8]) -> Vec<Answer> {
        levels
            .iter()
            .enumerate()
            .map(|(i, level)| {
                let level = AnswerLevel::try_from(*level).expect("fixture levels are 0, 1 or 2");
                Answer::new(format!("How well do you know topic {}?", i + 1), level)
            })
            .collect()
    }

    /// The five-answer run `[2, 2, 1, 0, 2]` used for end-to-end checks.
    pub fn mixed_assessment() -> Vec<Answer> {
        vec![
            Answer::new("How well do you understand arrays?", AnswerLevel::KnowsWell),
            Answer::new("How familiar are you with linked lists?", AnswerLevel::KnowsWell),
            Answer::new("How well do you know binary search trees?", AnswerLevel::Partial),
            Answer::new("How well do you know red-black trees?", AnswerLevel::DoesNotKnow),
            Answer::new("How comfortable are you with heaps?", AnswerLevel::KnowsWell),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::answer::total_points;

    #[test]
    fn test_fixtures_answers_from_levels() {
        let answers = answers_from_levels(&[2, 0, 1]);
        assert_eq!(answers.len(), 3);
        assert_eq!(total_points(&answers), 3);
        assert_eq!(answers[0].question, "How well do you know topic 1?");
    }

    #[test]
    fn test_fixtures_mixed_assessment() {
        let answers = mixed_assessment();
        assert_eq!(answers.len(), 5);
        assert_eq!(total_points(&answers), 7);
    }
}
