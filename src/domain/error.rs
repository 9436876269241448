//! Domain error types

use thiserror::Error;

/// Error when a method call carries malformed or missing arguments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Invalid arguments for notification")]
    Notify,

    #[error("Invalid arguments for closing notification")]
    Close,
}

impl ArgumentError {
    /// Error code reported over the method channel
    pub const CODE: &'static str = "INVALID_ARGUMENTS";
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_error_messages() {
        assert_eq!(
            ArgumentError::Notify.to_string(),
            "Invalid arguments for notification"
        );
        assert_eq!(
            ArgumentError::Close.to_string(),
            "Invalid arguments for closing notification"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::AlreadyExists("/tmp/config.toml".to_string());
        assert!(err.to_string().contains("/tmp/config.toml"));
    }
}
