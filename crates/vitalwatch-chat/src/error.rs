use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    /// The provider answered with a non-success status. Holds the
    /// provider's own error message when it sent one.
    #[error("{0}")]
    Invocation(String),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No AI provider key found. Set OPENAI_API_KEY or GEMINI_API_KEY.")]
    NotConfigured,

    /// Every configured provider failed. Each entry reads `"<Provider>: <message>"`.
    #[error("AI provider request failed.")]
    AllProvidersFailed(Vec<String>),
}
