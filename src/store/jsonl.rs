use crate::error::{Result, WellcheckError};
use crate::store::{newest_first, seal, AssessmentSink, HistorySource};
use crate::types::assessment::{AssessmentRecord, NewAssessment};
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_STORE_FILE: &str = ".wellcheck/assessments.jsonl";

#[derive(Debug, Clone)]
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<AssessmentRecord>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file absent, history is empty");
                return Ok(Vec::new());
            }
            Err(error) => return Err(WellcheckError::Io(error)),
        };

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    WellcheckError::Storage(format!(
                        "{}:{}: {}",
                        self.path.display(),
                        index + 1,
                        e
                    ))
                })
            })
            .collect()
    }
}

impl AssessmentSink for JsonlStore {
    fn submit(&mut self, assessment: NewAssessment) -> Result<AssessmentRecord> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(WellcheckError::Io)?;
            }
        }

        let record = seal(assessment, Utc::now());
        let line = serde_json::to_string(&record)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(WellcheckError::Io)?;
        writeln!(file, "{line}").map_err(WellcheckError::Io)?;
        file.flush().map_err(WellcheckError::Io)?;

        info!(id = %record.id, user = %record.user_id, path = %self.path.display(), "assessment stored");
        Ok(record)
    }
}

impl HistorySource for JsonlStore {
    fn fetch_history(&self, user_id: &str) -> Result<Vec<AssessmentRecord>> {
        let records = self
            .read_all()?
            .into_iter()
            .filter(|record| record.user_id == user_id)
            .collect::<Vec<_>>();
        debug!(user = user_id, count = records.len(), "history loaded");
        Ok(newest_first(records))
    }
}
