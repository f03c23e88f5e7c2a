use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GameError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            GameError::IoError(e) => format!("無法讀寫主控台: {}", e),
            GameError::SerializationError(_) => "Could not format the round result".to_string(),
            GameError::TomlError(_) | GameError::ConfigError { .. } => {
                format!("Config file problem: {}", self)
            }
            GameError::InvalidConfigValueError { field, .. } => {
                format!("Setting '{}' is not valid: {}", field, self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GameError::IoError(_) => "Check that standard input and output are connected",
            GameError::SerializationError(_) => "Retry with --format text",
            GameError::TomlError(_) | GameError::ConfigError { .. } => {
                "Check the TOML syntax of the file passed to --config"
            }
            GameError::InvalidConfigValueError { .. } => "Fix the value and run again",
        }
    }

    /// Process exit code for this failure. Normal rounds always exit 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            GameError::IoError(_) | GameError::SerializationError(_) => 1,
            GameError::TomlError(_)
            | GameError::ConfigError { .. }
            | GameError::InvalidConfigValueError { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_share_exit_code() {
        let err = GameError::ConfigError {
            message: "missing [game]".to_string(),
        };
        assert_eq!(err.exit_code(), 2);

        let err = GameError::InvalidConfigValueError {
            field: "max_attempts".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 100".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.user_friendly_message().contains("max_attempts"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: GameError = io.into();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().starts_with("IO error"));
    }
}
