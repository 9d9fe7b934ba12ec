use crate::types::questionnaire::{AnswerOption, AnswerValue, Category, Question};

pub const QUESTIONS: &[Question] = &[
    Question {
        id: "q1",
        text: "How often have you felt nervous or anxious?",
        category: Category::Anxiety,
    },
    Question {
        id: "q2",
        text: "How often have you worried about things?",
        category: Category::Anxiety,
    },
    Question {
        id: "q3",
        text: "How often have you felt restless or on edge?",
        category: Category::Anxiety,
    },
    Question {
        id: "q4",
        text: "How often have you felt down or depressed?",
        category: Category::Depression,
    },
    Question {
        id: "q5",
        text: "How often have you lost interest in activities?",
        category: Category::Depression,
    },
    Question {
        id: "q6",
        text: "How often have you had trouble sleeping?",
        category: Category::Depression,
    },
    Question {
        id: "q7",
        text: "How often have you felt overwhelmed?",
        category: Category::Stress,
    },
    Question {
        id: "q8",
        text: "How often have you had difficulty concentrating?",
        category: Category::Stress,
    },
    Question {
        id: "q9",
        text: "How often have you felt irritable or angry?",
        category: Category::Stress,
    },
    Question {
        id: "q10",
        text: "How often have you experienced physical symptoms of stress?",
        category: Category::Stress,
    },
];

pub const OPTIONS: &[AnswerOption] = &[
    AnswerOption {
        value: 0,
        label: "Not at all",
    },
    AnswerOption {
        value: 1,
        label: "Several days",
    },
    AnswerOption {
        value: 2,
        label: "More than half the days",
    },
    AnswerOption {
        value: 3,
        label: "Nearly every day",
    },
];

pub fn question_count(questions: &[Question], category: Category) -> usize {
    questions
        .iter()
        .filter(|question| question.category == category)
        .count()
}

pub fn max_raw_score(questions: &[Question], category: Category) -> u32 {
    question_count(questions, category) as u32 * u32::from(AnswerValue::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn canonical_split_is_three_three_four() {
        assert_eq!(QUESTIONS.len(), 10);
        assert_eq!(question_count(QUESTIONS, Category::Anxiety), 3);
        assert_eq!(question_count(QUESTIONS, Category::Depression), 3);
        assert_eq!(question_count(QUESTIONS, Category::Stress), 4);
    }

    #[test]
    fn category_maxima_follow_question_counts() {
        assert_eq!(max_raw_score(QUESTIONS, Category::Anxiety), 9);
        assert_eq!(max_raw_score(QUESTIONS, Category::Depression), 9);
        assert_eq!(max_raw_score(QUESTIONS, Category::Stress), 12);
    }

    #[test]
    fn question_ids_are_unique() {
        let ids: HashSet<_> = QUESTIONS.iter().map(|question| question.id).collect();
        assert_eq!(ids.len(), QUESTIONS.len());
    }

    #[test]
    fn options_cover_the_answer_range_in_order() {
        let values: Vec<u8> = OPTIONS.iter().map(|option| option.value).collect();
        assert_eq!(values, vec![0, 1, 2, 3]);
        assert_eq!(values.last().copied(), Some(AnswerValue::MAX));
    }

    #[test]
    fn stress_questions_close_the_list() {
        let stress: Vec<_> = QUESTIONS
            .iter()
            .filter(|question| question.category == Category::Stress)
            .map(|question| question.id)
            .collect();
        assert_eq!(stress, vec!["q7", "q8", "q9", "q10"]);
    }
}
