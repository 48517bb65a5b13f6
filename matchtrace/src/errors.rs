use thiserror::Error;

/// Result type for matching and benchmarking operations
pub type MatchResult<T> = Result<T, MatchError>;

/// Errors that can occur while running searches or benchmarks.
///
/// Rabin-Karp hash collisions are deliberately *not* represented here: a
/// collision is an observable event in the trace-frame stream
/// ([`crate::trace::TraceFrame::FalsePositive`]), never a failure. Every
/// variant below is returned to the immediate caller; nothing in this crate
/// aborts the process.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl MatchError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = MatchError::invalid_input("empty text");
        assert!(matches!(err, MatchError::InvalidInput(_)));

        let err = MatchError::invalid_configuration("num_trials must be positive");
        assert!(matches!(err, MatchError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = MatchError::invalid_input("text must not be empty");
        assert_eq!(err.to_string(), "Invalid input: text must not be empty");

        let err = MatchError::invalid_configuration("text sizes must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: text sizes must not be empty"
        );
    }
}
