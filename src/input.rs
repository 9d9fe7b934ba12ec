use crate::error::{Result, WellcheckError};
use crate::types::assessment::ResponseSet;
use crate::types::questionnaire::{AnswerValue, Question};
use std::collections::BTreeMap;
use std::path::Path;

pub fn parse_answer(raw: &str) -> Result<(String, AnswerValue)> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| WellcheckError::MalformedAnswer(raw.to_string()))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(WellcheckError::MalformedAnswer(raw.to_string()));
    }
    let value = value
        .parse::<AnswerValue>()
        .map_err(|_| WellcheckError::InvalidAnswer {
            question: id.to_string(),
            value: value.to_string(),
        })?;
    Ok((id.to_string(), value))
}

pub fn read_responses_file(path: &Path, questions: &[Question]) -> Result<ResponseSet> {
    if !path.exists() {
        return Err(WellcheckError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let entries: BTreeMap<String, serde_json::Value> = serde_json::from_str(&content)?;

    let mut parsed = Vec::with_capacity(entries.len());
    for (id, raw) in entries {
        let value = serde_json::from_value::<AnswerValue>(raw.clone()).map_err(|_| {
            WellcheckError::InvalidAnswer {
                question: id.clone(),
                value: raw.to_string(),
            }
        })?;
        parsed.push((id, value));
    }
    ResponseSet::from_entries(questions, parsed)
}

/// File answers first, then `--answer` overrides.
pub fn collect_responses(
    questions: &[Question],
    file: Option<&Path>,
    answers: &[String],
) -> Result<ResponseSet> {
    let mut responses = match file {
        Some(path) => read_responses_file(path, questions)?,
        None => ResponseSet::new(),
    };
    for raw in answers {
        let (id, value) = parse_answer(raw)?;
        responses.record(questions, &id, value)?;
    }
    Ok(responses)
}
