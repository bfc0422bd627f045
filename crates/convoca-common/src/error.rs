use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvocaError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CMS responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("GraphQL query error: {0}")]
    Query(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ConvocaError>;
