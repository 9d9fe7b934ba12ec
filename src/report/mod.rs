pub mod json;
pub mod md;

use crate::error::WellcheckError;
use crate::history::HistoryEntry;
use crate::types::assessment::{AssessmentRecord, AssessmentResult};
use crate::types::questionnaire::{AnswerOption, Question};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_questionnaire(
    questions: &[Question],
    options: &[AnswerOption],
    format: OutputFormat,
) -> Result<String, WellcheckError> {
    match format {
        OutputFormat::Json => json::questionnaire_to_json(questions, options).map_err(WellcheckError::Json),
        OutputFormat::Md => Ok(md::questionnaire_to_markdown(questions, options)),
    }
}

pub fn render_result(result: &AssessmentResult, format: OutputFormat) -> Result<String, WellcheckError> {
    match format {
        OutputFormat::Json => json::result_to_json(result).map_err(WellcheckError::Json),
        OutputFormat::Md => Ok(md::result_to_markdown(result, None)),
    }
}

pub fn render_record(record: &AssessmentRecord, format: OutputFormat) -> Result<String, WellcheckError> {
    match format {
        OutputFormat::Json => json::record_to_json(record).map_err(WellcheckError::Json),
        OutputFormat::Md => Ok(md::result_to_markdown(&record.result, Some(record.created_at))),
    }
}

pub fn render_history(entries: &[HistoryEntry<'_>], format: OutputFormat) -> Result<String, WellcheckError> {
    match format {
        OutputFormat::Json => json::history_to_json(entries).map_err(WellcheckError::Json),
        OutputFormat::Md => Ok(md::history_to_markdown(entries)),
    }
}
