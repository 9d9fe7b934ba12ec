use crate::types::assessment::CategoryScores;
use crate::types::questionnaire::Category;

#[derive(Debug, Clone, Copy)]
enum Trigger {
    Above(Category, u8),
    Always,
}

impl Trigger {
    fn fires(self, scores: &CategoryScores) -> bool {
        match self {
            Self::Above(category, threshold) => scores.get(category) > threshold,
            Self::Always => true,
        }
    }
}

const RULES: &[(Trigger, &str)] = &[
    (
        Trigger::Above(Category::Anxiety, 50),
        "Practice deep breathing exercises daily",
    ),
    (
        Trigger::Above(Category::Depression, 50),
        "Engage in activities you enjoy",
    ),
    (
        Trigger::Above(Category::Stress, 50),
        "Establish a regular sleep schedule",
    ),
    (
        Trigger::Always,
        "Consider speaking with a mental health professional",
    ),
    (Trigger::Always, "Maintain regular exercise routine"),
];

pub fn build_recommendations(scores: &CategoryScores) -> Vec<String> {
    RULES
        .iter()
        .filter(|(trigger, _)| trigger.fires(scores))
        .map(|(_, text)| (*text).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFESSIONAL: &str = "Consider speaking with a mental health professional";
    const EXERCISE: &str = "Maintain regular exercise routine";

    #[test]
    fn low_scores_get_only_unconditional_items() {
        let recs = build_recommendations(&CategoryScores::new(0, 0, 0));
        assert_eq!(recs, vec![PROFESSIONAL, EXERCISE]);
    }

    #[test]
    fn anxiety_item_precedes_unconditional_items() {
        let recs = build_recommendations(&CategoryScores::new(100, 0, 0));
        assert_eq!(
            recs,
            vec![
                "Practice deep breathing exercises daily",
                PROFESSIONAL,
                EXERCISE
            ]
        );
    }

    #[test]
    fn threshold_is_strictly_above_fifty() {
        let recs = build_recommendations(&CategoryScores::new(50, 50, 50));
        assert_eq!(recs.len(), 2);

        let recs = build_recommendations(&CategoryScores::new(51, 51, 51));
        assert_eq!(
            recs,
            vec![
                "Practice deep breathing exercises daily",
                "Engage in activities you enjoy",
                "Establish a regular sleep schedule",
                PROFESSIONAL,
                EXERCISE,
            ]
        );
    }

    #[test]
    fn stress_only_keeps_rule_order() {
        let recs = build_recommendations(&CategoryScores::new(10, 20, 75));
        assert_eq!(
            recs,
            vec!["Establish a regular sleep schedule", PROFESSIONAL, EXERCISE]
        );
    }
}
