use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestScopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File watch error: {0}")]
    Watch(#[from] notify::Error),
    #[error("Invalid snapshot: {0}")]
    Snapshot(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<testscope_api::ApiError> for TestScopeError {
    fn from(err: testscope_api::ApiError) -> Self {
        TestScopeError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TestScopeError>;
