use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("{}", .0.user_message())]
    Advisor(#[from] style_advisor_common::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl AdvisorError {
    /// リクエスト自体が失敗したか（接続不可など）
    pub fn is_transport(&self) -> bool {
        match self {
            AdvisorError::Http(_) => true,
            AdvisorError::Advisor(e) => e.is_transport(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
