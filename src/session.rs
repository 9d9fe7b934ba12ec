use crate::error::{Result, WellcheckError};
use crate::scoring;
use crate::store::AssessmentSink;
use crate::types::assessment::{AssessmentRecord, NewAssessment, ResponseSet};
use crate::types::questionnaire::{AnswerValue, Question};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    InProgress { answered: usize },
    Complete,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.answered as f32 / self.total as f32 * 100.0
    }
}

#[derive(Debug)]
pub struct AssessmentSession<'q> {
    questions: &'q [Question],
    responses: ResponseSet,
    submitted: bool,
}

impl<'q> AssessmentSession<'q> {
    pub fn new(questions: &'q [Question]) -> Self {
        Self {
            questions,
            responses: ResponseSet::new(),
            submitted: false,
        }
    }

    pub fn with_responses(questions: &'q [Question], responses: ResponseSet) -> Self {
        Self {
            questions,
            responses,
            submitted: false,
        }
    }

    pub fn questions(&self) -> &'q [Question] {
        self.questions
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn state(&self) -> SessionState {
        if self.submitted {
            return SessionState::Submitted;
        }
        if self.responses.is_complete(self.questions) {
            return SessionState::Complete;
        }
        match self.responses.answered_count(self.questions) {
            0 => SessionState::Empty,
            answered => SessionState::InProgress { answered },
        }
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.responses.answered_count(self.questions),
            total: self.questions.len(),
        }
    }

    pub fn answer(&mut self, question_id: &str, value: AnswerValue) -> Result<SessionState> {
        if self.submitted {
            return Err(WellcheckError::AlreadySubmitted);
        }
        self.responses.record(self.questions, question_id, value)?;
        let state = self.state();
        debug!(question = question_id, value = value.get(), ?state, "answer recorded");
        Ok(state)
    }

    pub fn submit(&mut self, user_id: &str, sink: &mut dyn AssessmentSink) -> Result<AssessmentRecord> {
        match self.state() {
            SessionState::Complete => {}
            SessionState::Submitted => return Err(WellcheckError::AlreadySubmitted),
            _ => {
                let progress = self.progress();
                info!(answered = progress.answered, total = progress.total, "submission rejected");
                return Err(WellcheckError::IncompleteAssessment {
                    answered: progress.answered,
                    total: progress.total,
                });
            }
        }

        let result = scoring::assess(&self.responses, self.questions);
        let record = sink.submit(NewAssessment {
            user_id: user_id.to_string(),
            responses: self.responses.clone(),
            result,
        })?;
        self.submitted = true;
        info!(id = %record.id, "assessment submitted");
        Ok(record)
    }
}
