use crate::error::WellcheckError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Anxiety,
    Depression,
    Stress,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Anxiety, Category::Depression, Category::Stress];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Anxiety => "anxiety",
            Self::Depression => "depression",
            Self::Stress => "stress",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Anxiety => "Anxiety",
            Self::Depression => "Depression",
            Self::Stress => "Stress",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: u8,
    pub label: &'static str,
}

/// A single Likert answer, always within 0..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAnswer", into = "u8")]
pub struct AnswerValue(u8);

impl AnswerValue {
    pub const MAX: u8 = 3;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> Self {
        value.0
    }
}

impl std::str::FromStr for AnswerValue {
    type Err = WellcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| WellcheckError::InvalidAnswer {
                question: "answer".to_string(),
                value: s.to_string(),
            })
    }
}

// Stored responses carry option values either as numbers or as numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnswer {
    Number(i64),
    Text(String),
}

impl TryFrom<RawAnswer> for AnswerValue {
    type Error = String;

    fn try_from(raw: RawAnswer) -> Result<Self, Self::Error> {
        match raw {
            RawAnswer::Number(n) => u8::try_from(n)
                .ok()
                .and_then(AnswerValue::new)
                .ok_or_else(|| format!("answer value {n} is outside 0-3")),
            RawAnswer::Text(text) => text
                .parse::<AnswerValue>()
                .map_err(|_| format!("answer value {text:?} is outside 0-3")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_value_rejects_out_of_range() {
        assert!(AnswerValue::new(3).is_some());
        assert!(AnswerValue::new(4).is_none());
        assert!("7".parse::<AnswerValue>().is_err());
        assert!("often".parse::<AnswerValue>().is_err());
    }

    #[test]
    fn answer_value_deserializes_numbers_and_numeric_strings() {
        let from_number: AnswerValue = serde_json::from_str("2").expect("number should parse");
        let from_text: AnswerValue = serde_json::from_str("\"3\"").expect("string should parse");
        assert_eq!(from_number.get(), 2);
        assert_eq!(from_text.get(), 3);
        assert!(serde_json::from_str::<AnswerValue>("-1").is_err());
        assert!(serde_json::from_str::<AnswerValue>("\"4\"").is_err());
    }

    #[test]
    fn category_serializes_lowercase() {
        let rendered = serde_json::to_string(&Category::Depression).expect("category should serialize");
        assert_eq!(rendered, "\"depression\"");
    }
}
