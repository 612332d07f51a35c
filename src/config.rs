use crate::api::client::DEFAULT_TIMEOUT_SECS;
use crate::error::ClashError;
use std::env;

pub const TOKEN_VAR: &str = "CLASH_API_TOKEN";
pub const TIMEOUT_VAR: &str = "CLASH_API_TIMEOUT";

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub timeout: u64,
}

impl Config {
    /// Loads `.env` (if any) and reads the token and timeout from the environment.
    ///
    /// A `token_override` (e.g. from the command line) wins over `CLASH_API_TOKEN`.
    pub fn from_env(token_override: Option<String>) -> Result<Self, ClashError> {
        dotenvy::dotenv().ok();

        let token = token_override.or_else(|| env::var(TOKEN_VAR).ok());
        Self::from_values(token, env::var(TIMEOUT_VAR).ok())
    }

    pub fn from_values(token: Option<String>, timeout: Option<String>) -> Result<Self, ClashError> {
        let token = token.ok_or_else(|| {
            ClashError::ConfigError(format!("{} not found in environment or .env file", TOKEN_VAR))
        })?;

        let timeout = match timeout {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config { token, timeout })
    }
}

/// Parses a timeout in whole seconds; zero is rejected.
pub fn parse_timeout(raw: &str) -> Result<u64, ClashError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ClashError::ConfigError(
            "timeout must be at least 1 second".to_string(),
        )),
        Ok(secs) => Ok(secs),
        Err(_) => Err(ClashError::ConfigError(format!(
            "invalid timeout '{}', expected whole seconds",
            raw
        ))),
    }
}
