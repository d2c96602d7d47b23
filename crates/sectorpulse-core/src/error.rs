use std::fmt::{Display, Formatter};

/// Failure classification for upstream data fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Connection, DNS, or timeout failure before a response arrived.
    Transport,
    /// The upstream answered with a non-success HTTP status.
    Status,
    /// The response body did not decode into the expected payload.
    Parse,
}

/// Typed fetch failure carried back to the report pipeline.
///
/// Callers use [`FetchError::kind`] to distinguish causes; the pipeline
/// treats every kind as recoverable and degrades the report instead of
/// aborting the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    kind: FetchErrorKind,
    message: String,
    retryable: bool,
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Transport,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn status(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Status,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Parse,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::Transport => "fetch.transport",
            FetchErrorKind::Status => "fetch.status",
            FetchErrorKind::Parse => "fetch.parse",
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FetchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_failures_are_not_retryable() {
        let error = FetchError::parse("unexpected token");
        assert_eq!(error.kind(), FetchErrorKind::Parse);
        assert!(!error.retryable());
    }

    #[test]
    fn display_includes_message_and_code() {
        let error = FetchError::status("upstream returned status 503");
        assert_eq!(
            error.to_string(),
            "upstream returned status 503 (fetch.status)"
        );
    }
}
