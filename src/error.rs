use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid transfer direction: {0}")]
    InvalidDirection(String),

    #[error("Table error in {path} (line {line}): {message}")]
    Table {
        path: String,
        line: usize,
        message: String,
    },

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, TransferError>;
