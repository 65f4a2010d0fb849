use thiserror::Error;

#[derive(Error, Debug)]
pub enum FragmentError {
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },
    #[error("Invalid expiry date: {0}")]
    InvalidExpiryDate(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FragmentError>;
