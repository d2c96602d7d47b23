//! Delivery configuration sourced from the process environment.

use thiserror::Error;

/// Environment variable holding the Telegram bot token.
pub const TOKEN_VAR: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the numeric destination chat id.
pub const CHAT_ID_VAR: &str = "CHAT_ID";

/// Configuration failures surfaced before any network activity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("{CHAT_ID_VAR} must be a numeric chat identifier, got '{value}'")]
    InvalidChatId { value: String },
}

/// Delivery credentials, constructed once at startup and passed into the
/// sender explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub chat_id: i64,
}

impl Config {
    /// Read and validate the delivery configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token =
            std::env::var(TOKEN_VAR).map_err(|_| ConfigError::MissingVar(TOKEN_VAR))?;
        let raw_chat_id =
            std::env::var(CHAT_ID_VAR).map_err(|_| ConfigError::MissingVar(CHAT_ID_VAR))?;
        let chat_id = raw_chat_id
            .parse()
            .map_err(|_| ConfigError::InvalidChatId { value: raw_chat_id })?;

        Ok(Self { token, chat_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn from_env_fails_without_token() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var(TOKEN_VAR);
        std::env::remove_var(CHAT_ID_VAR);

        assert_eq!(
            Config::from_env().unwrap_err(),
            ConfigError::MissingVar(TOKEN_VAR)
        );
    }

    #[test]
    fn from_env_fails_without_chat_id() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(TOKEN_VAR, "test-token");
        std::env::remove_var(CHAT_ID_VAR);

        assert_eq!(
            Config::from_env().unwrap_err(),
            ConfigError::MissingVar(CHAT_ID_VAR)
        );

        std::env::remove_var(TOKEN_VAR);
    }

    #[test]
    fn from_env_rejects_non_numeric_chat_id() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(TOKEN_VAR, "test-token");
        std::env::set_var(CHAT_ID_VAR, "not-a-number");

        assert_eq!(
            Config::from_env().unwrap_err(),
            ConfigError::InvalidChatId {
                value: "not-a-number".to_string()
            }
        );

        std::env::remove_var(TOKEN_VAR);
        std::env::remove_var(CHAT_ID_VAR);
    }

    #[test]
    fn from_env_reads_valid_configuration() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(TOKEN_VAR, "test-token");
        std::env::set_var(CHAT_ID_VAR, "-1001234567890");

        let config = Config::from_env().unwrap();
        assert_eq!(config.token, "test-token");
        assert_eq!(config.chat_id, -1_001_234_567_890);

        std::env::remove_var(TOKEN_VAR);
        std::env::remove_var(CHAT_ID_VAR);
    }
}
