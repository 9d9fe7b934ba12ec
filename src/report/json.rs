use crate::history::HistoryEntry;
use crate::scoring::{severity_tier, ScoreBand};
use crate::types::assessment::{AssessmentRecord, AssessmentResult};
use crate::types::questionnaire::{AnswerOption, Category, Question};
use serde_json::{json, Map, Value};

pub fn questionnaire_to_json(
    questions: &[Question],
    options: &[AnswerOption],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "questions": questions,
        "options": options,
    }))
}

pub fn result_to_json(result: &AssessmentResult) -> Result<String, serde_json::Error> {
    let value = with_classification(serde_json::to_value(result)?, result)?;
    serde_json::to_string_pretty(&value)
}

pub fn record_to_json(record: &AssessmentRecord) -> Result<String, serde_json::Error> {
    let value = with_classification(serde_json::to_value(record)?, &record.result)?;
    serde_json::to_string_pretty(&value)
}

pub fn history_to_json(entries: &[HistoryEntry<'_>]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

fn with_classification(mut value: Value, result: &AssessmentResult) -> Result<Value, serde_json::Error> {
    if let Value::Object(fields) = &mut value {
        fields.insert("severity".to_string(), serde_json::to_value(severity_tier(&result.scores))?);
        fields.insert("bands".to_string(), bands(result));
    }
    Ok(value)
}

fn bands(result: &AssessmentResult) -> Value {
    let mut bands = Map::new();
    for category in Category::ALL {
        bands.insert(
            category.as_str().to_string(),
            json!(ScoreBand::for_score(result.scores.get(category)).label()),
        );
    }
    Value::Object(bands)
}
