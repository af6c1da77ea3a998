use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("catalog is empty: nothing to score")]
    EmptyCatalog,

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("invalid preferences: {0}")]
    InvalidPreferences(String),

    #[error("quiz expects an answer for the {expected} step, got {got}")]
    StepOutOfOrder {
        expected: &'static str,
        got: &'static str,
    },

    #[error("missing quiz answer for the {0} step")]
    MissingAnswer(&'static str),

    #[error("quiz is not complete: still on the {0} step")]
    QuizIncomplete(&'static str),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MatchError>;
