//! Error types for starcat
//!
//! This module defines all error types used throughout the catalog.

use thiserror::Error;

/// The main error type for starcat
#[derive(Error, Debug)]
pub enum Error {
    // ========== Configuration Errors ==========
    #[error("Config error: failed to read '{path}': {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Config error: failed to parse '{path}': {message}")]
    ConfigParse { path: String, message: String },

    #[error("Config error: key '{section}.{key}' is empty")]
    EmptyConfigValue { section: String, key: String },

    // ========== Copy Statement Errors ==========
    #[error("Copy error: '{0}' is not an s3:// location")]
    InvalidStorageUri(String),

    #[error("Copy error: '{0}' is not an IAM role ARN")]
    InvalidRoleArn(String),

    #[error("Copy error: value '{0}' contains characters unsafe to inline into SQL")]
    UnsafeInlineValue(String),

    // ========== Catalog Errors ==========
    #[error("Catalog error: table '{0}' not found")]
    TableNotFound(String),
}

/// Result type alias for starcat operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyConfigValue {
            section: "iam_role".to_string(),
            key: "arn".to_string(),
        };
        assert_eq!(err.to_string(), "Config error: key 'iam_role.arn' is empty");

        let err = Error::InvalidStorageUri("http://bucket/data".to_string());
        assert_eq!(
            err.to_string(),
            "Copy error: 'http://bucket/data' is not an s3:// location"
        );
    }
}
