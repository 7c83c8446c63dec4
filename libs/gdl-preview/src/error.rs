//! # Preview Errors
//!
//! Caller contract violations. Problems inside a script never surface here;
//! they become warnings on the result.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors returned to the caller before a run starts.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// Rejected run configuration, e.g. a negative loop limit.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Parameter payload that is not a JSON object of supported values.
    #[error("invalid parameters: {0}")]
    Parameters(#[from] serde_json::Error),

    /// A result could not be encoded as JSON.
    #[error("failed to serialize result: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: PreviewError = ConfigError::NegativeForLimit(-2).into();
        assert_eq!(
            err.to_string(),
            "invalid configuration: for_limit must not be negative: -2"
        );
    }
}
