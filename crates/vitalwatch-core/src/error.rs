use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid condition severity: {0} (expected 2 or 3)")]
    InvalidSeverity(u8),
}
