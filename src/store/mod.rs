pub mod jsonl;
#[cfg(test)]
pub mod memory;

use crate::error::Result;
use crate::types::assessment::{AssessmentRecord, NewAssessment, ResponseSet};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

pub use jsonl::JsonlStore;

pub trait AssessmentSink {
    fn submit(&mut self, assessment: NewAssessment) -> Result<AssessmentRecord>;
}

pub trait HistorySource {
    fn fetch_history(&self, user_id: &str) -> Result<Vec<AssessmentRecord>>;

    fn latest(&self, user_id: &str) -> Result<Option<AssessmentRecord>> {
        Ok(self.fetch_history(user_id)?.into_iter().next())
    }
}

pub(crate) fn seal(assessment: NewAssessment, created_at: DateTime<Utc>) -> AssessmentRecord {
    AssessmentRecord {
        id: record_id(&assessment.user_id, created_at, &assessment.responses),
        user_id: assessment.user_id,
        created_at,
        responses: assessment.responses,
        result: assessment.result,
    }
}

pub(crate) fn record_id(user_id: &str, created_at: DateTime<Utc>, responses: &ResponseSet) -> String {
    let mut hasher = Sha256::new();
    hasher.update(user_id.as_bytes());
    hasher.update(created_at.to_rfc3339().as_bytes());
    for (id, value) in responses.entries() {
        hasher.update(id.as_bytes());
        hasher.update([value.get()]);
    }
    let digest = hasher.finalize();
    let hex = format!("{digest:x}");
    hex[..16].to_string()
}

/// Sorts by `created_at` descending; among equal timestamps the later write comes first.
pub(crate) fn newest_first(mut records: Vec<AssessmentRecord>) -> Vec<AssessmentRecord> {
    records.reverse();
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::QUESTIONS;
    use crate::types::assessment::{AssessmentResult, CategoryScores};
    use crate::types::questionnaire::AnswerValue;
    use chrono::TimeZone;

    fn record(id: &str, minute: u32) -> AssessmentRecord {
        AssessmentRecord {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            created_at: Utc
                .with_ymd_and_hms(2024, 3, 4, 10, minute, 0)
                .single()
                .expect("timestamp should be valid"),
            responses: ResponseSet::new(),
            result: AssessmentResult {
                scores: CategoryScores::default(),
                overall_assessment: String::new(),
                recommendations: Vec::new(),
            },
        }
    }

    #[test]
    fn newest_first_orders_by_timestamp_then_write_order() {
        let ordered = newest_first(vec![
            record("a", 1),
            record("b", 5),
            record("c", 3),
            record("d", 5),
        ]);
        let ids: Vec<_> = ordered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn record_id_depends_on_user_and_time() {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 4, 10, 0, 0)
            .single()
            .expect("timestamp should be valid");
        let later = at + chrono::Duration::seconds(1);
        let responses = ResponseSet::new();

        let id = record_id("user-1", at, &responses);
        assert_eq!(id.len(), 16);
        assert_eq!(id, record_id("user-1", at, &responses));
        assert_ne!(id, record_id("user-2", at, &responses));
        assert_ne!(id, record_id("user-1", later, &responses));
    }

    #[test]
    fn record_id_depends_on_answers() {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 4, 10, 0, 0)
            .single()
            .expect("timestamp should be valid");
        let value = |n| AnswerValue::new(n).expect("value should be in range");
        let mut first = ResponseSet::new();
        first.record(QUESTIONS, "q1", value(1)).expect("answer should record");
        let mut second = ResponseSet::new();
        second.record(QUESTIONS, "q1", value(2)).expect("answer should record");
        let mut third = ResponseSet::new();
        third.record(QUESTIONS, "q2", value(1)).expect("answer should record");

        let id = record_id("user-1", at, &first);
        assert_eq!(id, record_id("user-1", at, &first));
        assert_ne!(id, record_id("user-1", at, &second));
        assert_ne!(id, record_id("user-1", at, &third));
        assert_ne!(id, record_id("user-1", at, &ResponseSet::new()));
    }
}
