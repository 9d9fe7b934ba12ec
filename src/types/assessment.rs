use crate::error::{Result, WellcheckError};
use crate::types::questionnaire::{AnswerValue, Category, Question};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    answers: BTreeMap<String, AnswerValue>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I>(questions: &[Question], entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, AnswerValue)>,
    {
        let mut set = Self::new();
        for (id, value) in entries {
            set.record(questions, &id, value)?;
        }
        Ok(set)
    }

    pub fn record(&mut self, questions: &[Question], id: &str, value: AnswerValue) -> Result<()> {
        if !questions.iter().any(|question| question.id == id) {
            return Err(WellcheckError::UnknownQuestion(id.to_string()));
        }
        self.answers.insert(id.to_string(), value);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<AnswerValue> {
        self.answers.get(id).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, AnswerValue)> {
        self.answers.iter().map(|(id, value)| (id.as_str(), *value))
    }

    pub fn answered_count(&self, questions: &[Question]) -> usize {
        questions
            .iter()
            .filter(|question| self.answers.contains_key(question.id))
            .count()
    }

    pub fn is_complete(&self, questions: &[Question]) -> bool {
        self.answered_count(questions) == questions.len()
    }

    pub fn unanswered<'q>(&self, questions: &'q [Question]) -> Vec<&'q Question> {
        questions
            .iter()
            .filter(|question| !self.answers.contains_key(question.id))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    #[serde(rename = "anxiety_score")]
    pub anxiety: u8,
    #[serde(rename = "depression_score")]
    pub depression: u8,
    #[serde(rename = "stress_score")]
    pub stress: u8,
}

impl CategoryScores {
    #[cfg(test)]
    pub fn new(anxiety: u8, depression: u8, stress: u8) -> Self {
        Self {
            anxiety,
            depression,
            stress,
        }
    }

    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Anxiety => self.anxiety,
            Category::Depression => self.depression,
            Category::Stress => self.stress,
        }
    }

    pub(crate) fn set(&mut self, category: Category, value: u8) {
        match category {
            Category::Anxiety => self.anxiety = value,
            Category::Depression => self.depression = value,
            Category::Stress => self.stress = value,
        }
    }

    pub fn average(&self) -> f64 {
        (f64::from(self.anxiety) + f64::from(self.depression) + f64::from(self.stress)) / 3.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    #[serde(flatten)]
    pub scores: CategoryScores,
    pub overall_assessment: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub user_id: String,
    pub responses: ResponseSet,
    pub result: AssessmentResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub responses: ResponseSet,
    #[serde(flatten)]
    pub result: AssessmentResult,
}

impl AssessmentRecord {
    pub fn scores(&self) -> &CategoryScores {
        &self.result.scores
    }
}
