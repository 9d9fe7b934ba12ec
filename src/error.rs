use thiserror::Error;

#[derive(Error, Debug)]
pub enum WellcheckError {
    #[error("incomplete assessment: {answered} of {total} questions answered; please answer all questions before submitting")]
    IncompleteAssessment { answered: usize, total: usize },

    #[error("assessment has already been submitted")]
    AlreadySubmitted,

    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("invalid answer for {question}: {value} (expected 0-3)")]
    InvalidAnswer { question: String, value: String },

    #[error("malformed answer argument: {0} (expected ID=VALUE)")]
    MalformedAnswer(String),

    #[error("no user identity: pass --user or set [profile] user_id in wellcheck.toml")]
    MissingUser,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WellcheckError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::IncompleteAssessment { .. }
                | Self::AlreadySubmitted
                | Self::UnknownQuestion(_)
                | Self::InvalidAnswer { .. }
                | Self::MalformedAnswer(_)
                | Self::MissingUser
        )
    }
}

pub type Result<T> = std::result::Result<T, WellcheckError>;
