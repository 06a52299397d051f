//! Error types for comment-pulse

use thiserror::Error;

/// Errors that can occur while analyzing a comment stream
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Non-numeric vote count: {0}")]
    InvalidVotes(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("Invalid pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}

impl AnalysisError {
    /// Whether the error only affects a single input record.
    ///
    /// Record-level errors are skipped by the processor; everything else
    /// aborts the run.
    pub fn is_record_level(&self) -> bool {
        matches!(
            self,
            AnalysisError::MalformedRecord(_) | AnalysisError::InvalidVotes(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_level_errors() {
        assert!(AnalysisError::MalformedRecord("line 3".to_string()).is_record_level());
        assert!(AnalysisError::InvalidVotes("lots".to_string()).is_record_level());
        assert!(!AnalysisError::ConfigError("window".to_string()).is_record_level());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(!AnalysisError::from(io).is_record_level());
    }

    #[test]
    fn test_error_messages() {
        let err = AnalysisError::InvalidVotes("\"many\"".to_string());
        assert_eq!(err.to_string(), "Non-numeric vote count: \"many\"");
    }
}
