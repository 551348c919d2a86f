use thiserror::Error;

/// Failures raised while handling a single invocation.
///
/// None of these are turned into an envelope by the handlers; they propagate
/// to the Lambda runtime, which reports the invocation as failed.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Invocation error: {0}")]
    Invocation(String),
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Parameter: {0}")]
    Parameter(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("missing required environment variable {0}")]
    Missing(String),
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: String, reason: String },
}
