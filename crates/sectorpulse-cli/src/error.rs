use thiserror::Error;

use crate::config::ConfigError;

/// CLI-level error categories mapped to exit codes.
///
/// Only unrecoverable failures land here; fetch failures are absorbed by
/// the report pipeline and never reach the binary boundary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("telegram delivery failed: {0}")]
    Delivery(#[from] teloxide::RequestError),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Delivery(_) => 7,
        }
    }
}
