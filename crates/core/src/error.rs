use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutodocError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Parsing error: {0}")]
    Parsing(String),
    #[error("Invalid package name: {0:?}")]
    InvalidPackage(String),
}

pub type Result<T> = std::result::Result<T, AutodocError>;
