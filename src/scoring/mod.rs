pub mod category;
pub mod recommend;
pub mod tier;

use crate::types::assessment::{AssessmentResult, ResponseSet};
use crate::types::questionnaire::Question;

pub use category::compute_category_scores;
pub use recommend::build_recommendations;
pub use tier::{classify_overall, severity_tier, ScoreBand};

/// Scores a response set. Missing answers count as 0; completeness is the caller's gate.
pub fn assess(responses: &ResponseSet, questions: &[Question]) -> AssessmentResult {
    let scores = compute_category_scores(responses, questions);
    AssessmentResult {
        scores,
        overall_assessment: classify_overall(&scores).to_string(),
        recommendations: build_recommendations(&scores),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::QUESTIONS;
    use crate::scoring::tier::SeverityTier;
    use crate::types::assessment::CategoryScores;
    use crate::types::questionnaire::{AnswerValue, Category};

    fn answered(value_for: impl Fn(&Question) -> u8) -> ResponseSet {
        let mut set = ResponseSet::new();
        for question in QUESTIONS {
            set.record(
                QUESTIONS,
                question.id,
                AnswerValue::new(value_for(question)).expect("value should be in range"),
            )
            .expect("answer should record");
        }
        set
    }

    #[test]
    fn all_zero_assessment() {
        let result = assess(&answered(|_| 0), QUESTIONS);
        assert_eq!(result.scores, CategoryScores::new(0, 0, 0));
        assert_eq!(result.overall_assessment, SeverityTier::Good.narrative());
        assert_eq!(
            result.recommendations,
            vec![
                "Consider speaking with a mental health professional",
                "Maintain regular exercise routine"
            ]
        );
    }

    #[test]
    fn anxiety_only_assessment() {
        let result = assess(
            &answered(|question| {
                if question.category == Category::Anxiety {
                    3
                } else {
                    0
                }
            }),
            QUESTIONS,
        );
        assert_eq!(result.scores, CategoryScores::new(100, 0, 0));
        assert_eq!(
            result.overall_assessment,
            SeverityTier::SomeChallenges.narrative()
        );
        assert_eq!(result.recommendations.len(), 3);
        assert_eq!(
            result.recommendations[0],
            "Practice deep breathing exercises daily"
        );
    }

    #[test]
    fn severe_assessment_lists_every_category_item() {
        let result = assess(&answered(|_| 3), QUESTIONS);
        assert_eq!(result.overall_assessment, SeverityTier::Severe.narrative());
        assert_eq!(result.recommendations.len(), 5);
    }
}
