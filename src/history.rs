use crate::types::assessment::{AssessmentRecord, CategoryScores};
use crate::types::questionnaire::Category;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improved,
    Worsened,
    Unchanged,
}

impl Trend {
    pub fn between(current: u8, previous: Option<u8>) -> Self {
        match previous {
            Some(previous) if current < previous => Self::Improved,
            Some(previous) if current > previous => Self::Worsened,
            _ => Self::Unchanged,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Self::Improved => "↓",
            Self::Worsened => "↑",
            Self::Unchanged => "–",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTrends {
    pub anxiety: Trend,
    pub depression: Trend,
    pub stress: Trend,
}

impl CategoryTrends {
    pub fn compare(current: &CategoryScores, previous: Option<&CategoryScores>) -> Self {
        let trend = |category: Category| {
            Trend::between(
                current.get(category),
                previous.map(|scores| scores.get(category)),
            )
        };
        Self {
            anxiety: trend(Category::Anxiety),
            depression: trend(Category::Depression),
            stress: trend(Category::Stress),
        }
    }

    pub fn get(&self, category: Category) -> Trend {
        match category {
            Category::Anxiety => self.anxiety,
            Category::Depression => self.depression,
            Category::Stress => self.stress,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry<'a> {
    pub latest: bool,
    pub record: &'a AssessmentRecord,
    pub trends: CategoryTrends,
}

/// Pairs each record with trends against the one after it. Expects newest-first input.
pub fn timeline(records: &[AssessmentRecord]) -> Vec<HistoryEntry<'_>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| HistoryEntry {
            latest: index == 0,
            record,
            trends: CategoryTrends::compare(
                record.scores(),
                records.get(index + 1).map(AssessmentRecord::scores),
            ),
        })
        .collect()
}
