use crate::questionnaire::max_raw_score;
use crate::types::assessment::{CategoryScores, ResponseSet};
use crate::types::questionnaire::{Category, Question};

pub fn compute_category_scores(responses: &ResponseSet, questions: &[Question]) -> CategoryScores {
    let mut scores = CategoryScores::default();
    for category in Category::ALL {
        let raw = raw_score(responses, questions, category);
        let max = max_raw_score(questions, category);
        scores.set(category, percentage(raw, max));
    }
    scores
}

pub fn raw_score(responses: &ResponseSet, questions: &[Question], category: Category) -> u32 {
    questions
        .iter()
        .filter(|question| question.category == category)
        .map(|question| {
            responses
                .get(question.id)
                .map_or(0, |value| u32::from(value.get()))
        })
        .sum()
}

// round(raw / max * 100) with ties rounded up, in integer arithmetic.
fn percentage(raw: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let scaled = (raw.min(max) * 200 + max) / (2 * max);
    scaled as u8
}
