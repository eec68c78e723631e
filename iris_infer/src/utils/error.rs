//! Error Handling Module
//!
//! Defines the error type shared by the iris inference crates.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for iris inference operations
#[derive(Error, Debug)]
pub enum IrisError {
    /// Error with model operations
    #[error("Model error: {0}")]
    Model(String),

    /// The model artifact is not on disk
    #[error("Model artifact not found: {0}")]
    ArtifactNotFound(PathBuf),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error fetching the artifact from object storage
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for IrisError {
    fn from(err: serde_json::Error) -> Self {
        IrisError::Serialization(err.to_string())
    }
}

impl From<bincode::Error> for IrisError {
    fn from(err: bincode::Error) -> Self {
        IrisError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for IrisError {
    fn from(err: reqwest::Error) -> Self {
        IrisError::Fetch(err.to_string())
    }
}

/// Convenience Result type for iris inference operations
pub type Result<T> = std::result::Result<T, IrisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IrisError::Model("test error".to_string());
        assert_eq!(err.to_string(), "Model error: test error");
    }

    #[test]
    fn test_artifact_not_found_display() {
        let err = IrisError::ArtifactNotFound(PathBuf::from("models/iris_trained_model.pkl"));
        assert!(err.to_string().contains("iris_trained_model.pkl"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: IrisError = io_err.into();
        assert!(matches!(err, IrisError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<f64>>("not json[").unwrap_err();
        let err: IrisError = json_err.into();
        assert!(matches!(err, IrisError::Serialization(_)));
    }
}
