use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },
    #[error("Invalid metric for course {course}: {reason}")]
    InvalidMetric { course: String, reason: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CompareError>;
