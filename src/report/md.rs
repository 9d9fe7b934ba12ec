use crate::history::HistoryEntry;
use crate::scoring::ScoreBand;
use crate::types::assessment::AssessmentResult;
use crate::types::questionnaire::{AnswerOption, Category, Question};
use chrono::{DateTime, Utc};

pub const EMPTY_HISTORY: &str = "No assessments yet. Take your first assessment with `wellcheck take` to start tracking your wellness journey.";

pub fn questionnaire_to_markdown(questions: &[Question], options: &[AnswerOption]) -> String {
    let mut output = String::new();
    output.push_str("# Mental Health Assessment\n\n");
    output.push_str(
        "Answer the following questions based on your experiences over the past two weeks.\n\n",
    );
    output.push_str("## Answer Options\n\n");
    for option in options {
        output.push_str(&format!("- {}: {}\n", option.value, option.label));
    }
    output.push_str("\n## Questions\n\n");
    for (index, question) in questions.iter().enumerate() {
        output.push_str(&format!(
            "{}. [{}] {} ({})\n",
            index + 1,
            question.id,
            question.text,
            question.category
        ));
    }
    output
}

pub fn result_to_markdown(result: &AssessmentResult, completed_at: Option<DateTime<Utc>>) -> String {
    let mut output = String::new();
    output.push_str("# Your Assessment Results\n\n");
    if let Some(at) = completed_at {
        output.push_str(&format!("Completed on {}\n\n", at.format("%Y-%m-%d")));
    }

    output.push_str("## Scores\n\n");
    for category in Category::ALL {
        let score = result.scores.get(category);
        output.push_str(&format!(
            "- {} Level: {}% ({})\n",
            category.title(),
            score,
            ScoreBand::for_score(score).label()
        ));
    }

    output.push_str("\n## Overall Assessment\n\n");
    output.push_str(&result.overall_assessment);
    output.push_str("\n\n## Recommendations\n\n");
    for (index, recommendation) in result.recommendations.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, recommendation));
    }
    output
}

pub fn history_to_markdown(entries: &[HistoryEntry<'_>]) -> String {
    let mut output = String::new();
    output.push_str("# Assessment History\n\n");
    if entries.is_empty() {
        output.push_str(EMPTY_HISTORY);
        output.push('\n');
        return output;
    }

    for entry in entries {
        let record = entry.record;
        output.push_str(&format!(
            "## {}{}\n\n",
            record.created_at.format("%A, %B %-d, %Y"),
            if entry.latest { " (Latest)" } else { "" }
        ));
        output.push_str(&record.result.overall_assessment);
        output.push_str("\n\n");
        for category in Category::ALL {
            output.push_str(&format!(
                "- {}: {}% {}\n",
                category.title(),
                record.scores().get(category),
                entry.trends.get(category).indicator()
            ));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::timeline;
    use crate::questionnaire::{OPTIONS, QUESTIONS};
    use crate::types::assessment::{AssessmentRecord, CategoryScores, ResponseSet};
    use chrono::TimeZone;

    fn result(scores: CategoryScores) -> AssessmentResult {
        AssessmentResult {
            scores,
            overall_assessment: "You're experiencing some challenges.".to_string(),
            recommendations: vec![
                "Practice deep breathing exercises daily".to_string(),
                "Maintain regular exercise routine".to_string(),
            ],
        }
    }

    fn record(day: u32, scores: CategoryScores) -> AssessmentRecord {
        AssessmentRecord {
            id: format!("r{day}"),
            user_id: "user-1".to_string(),
            created_at: Utc
                .with_ymd_and_hms(2024, 3, day, 12, 0, 0)
                .single()
                .expect("timestamp should be valid"),
            responses: ResponseSet::new(),
            result: result(scores),
        }
    }

    #[test]
    fn questionnaire_lists_every_question_and_option() {
        let rendered = questionnaire_to_markdown(QUESTIONS, OPTIONS);
        assert!(rendered.contains("1. [q1] How often have you felt nervous or anxious? (anxiety)"));
        assert!(rendered.contains("10. [q10]"));
        assert!(rendered.contains("- 3: Nearly every day"));
    }

    #[test]
    fn result_contains_bands_and_numbered_recommendations() {
        let rendered = result_to_markdown(&result(CategoryScores::new(100, 30, 8)), None);
        assert!(rendered.contains("- Anxiety Level: 100% (Severe)"));
        assert!(rendered.contains("- Depression Level: 30% (Moderate)"));
        assert!(rendered.contains("- Stress Level: 8% (Low)"));
        assert!(rendered.contains("1. Practice deep breathing exercises daily"));
        assert!(rendered.contains("2. Maintain regular exercise routine"));
        assert!(!rendered.contains("Completed on"));
    }

    #[test]
    fn history_shows_long_dates_latest_marker_and_trends() {
        let records = vec![
            record(4, CategoryScores::new(40, 20, 20)),
            record(1, CategoryScores::new(60, 20, 10)),
        ];
        let rendered = history_to_markdown(&timeline(&records));
        assert!(rendered.contains("## Monday, March 4, 2024 (Latest)"));
        assert!(rendered.contains("## Friday, March 1, 2024\n"));
        assert!(rendered.contains("- Anxiety: 40% ↓"));
        assert!(rendered.contains("- Stress: 20% ↑"));
        assert!(rendered.contains("- Depression: 20% –"));
    }

    #[test]
    fn empty_history_prompts_first_assessment() {
        let rendered = history_to_markdown(&[]);
        assert!(rendered.contains("No assessments yet"));
    }
}
