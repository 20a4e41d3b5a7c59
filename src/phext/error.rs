use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhextError {
    #[error("Phext not found: {0}")]
    PhextNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid delimiter set: {0}")]
    InvalidDelimiters(String),

    #[error("Text contains the reserved delimiter {0:?}")]
    ReservedDelimiter(char),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PhextError>;
