use crate::error::{Result, WellcheckError};
use crate::store::{newest_first, seal, AssessmentSink, HistorySource};
use crate::types::assessment::{AssessmentRecord, NewAssessment};
use chrono::{DateTime, Duration, TimeZone, Utc};

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub records: Vec<AssessmentRecord>,
    pub fail_writes: bool,
    pub submit_calls: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    fn next_timestamp(&self) -> DateTime<Utc> {
        let base = Utc
            .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        base + Duration::minutes(self.records.len() as i64)
    }
}

impl AssessmentSink for MemoryStore {
    fn submit(&mut self, assessment: NewAssessment) -> Result<AssessmentRecord> {
        self.submit_calls += 1;
        if self.fail_writes {
            return Err(WellcheckError::Storage("store unavailable".to_string()));
        }
        let record = seal(assessment, self.next_timestamp());
        self.records.push(record.clone());
        Ok(record)
    }
}

impl HistorySource for MemoryStore {
    fn fetch_history(&self, user_id: &str) -> Result<Vec<AssessmentRecord>> {
        Ok(newest_first(
            self.records
                .iter()
                .filter(|record| record.user_id == user_id)
                .cloned()
                .collect(),
        ))
    }
}
