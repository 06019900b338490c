use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CafeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Error reading orders file: {0}")]
    FileReaderError(String),
}

impl From<std::io::Error> for CafeError {
    fn from(error: std::io::Error) -> Self {
        CafeError::FileReaderError(error.to_string())
    }
}

impl From<serde_json::Error> for CafeError {
    fn from(error: serde_json::Error) -> Self {
        CafeError::FileReaderError(error.to_string())
    }
}
