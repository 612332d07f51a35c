use thiserror::Error;

/// Failures raised locally while talking to the Clash of Clans API.
///
/// Errors reported by the service itself (bad token, unknown tag, throttling)
/// are not represented here: they arrive as an ordinary JSON body and are
/// handed back to the caller untouched.
#[derive(Error, Debug)]
pub enum ClashError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("JSON parsing error: {0}")]
    DecodeError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for ClashError {
    fn from(e: serde_json::Error) -> Self {
        ClashError::DecodeError(e.to_string())
    }
}
