//! Warehouse configuration
//!
//! Bucket locations and the warehouse-readable IAM role, loaded once from a
//! TOML file. All keys are required; loading fails immediately on a missing
//! file, a missing key, or an empty value so that no statement is ever built
//! with a blank location or credential clause.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Object storage locations for the raw data sets
#[derive(Debug, Clone, Deserialize)]
pub struct S3Config {
    /// Location of the newline-delimited JSON event logs
    pub log_data: String,
    /// Location of the newline-delimited JSON song metadata
    pub song_data: String,
    /// Location of the jsonpaths mapping used to load the event logs
    pub log_jsonpath: String,
}

/// IAM role the warehouse assumes when reading from object storage
#[derive(Debug, Clone, Deserialize)]
pub struct IamRoleConfig {
    /// Role ARN; must already have read access to the S3 locations
    pub arn: String,
}

/// Full warehouse configuration
///
/// ```toml
/// [s3]
/// log_data = "s3://udacity-dend/log_data"
/// song_data = "s3://udacity-dend/song_data"
/// log_jsonpath = "s3://udacity-dend/log_json_path.json"
///
/// [iam_role]
/// arn = "arn:aws:iam::123456789012:role/dwhRole"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct WarehouseConfig {
    pub s3: S3Config,
    pub iam_role: IamRoleConfig,
}

impl WarehouseConfig {
    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty values; serde already rejects missing keys
    fn validate(&self) -> Result<()> {
        let required = [
            ("s3", "log_data", &self.s3.log_data),
            ("s3", "song_data", &self.s3.song_data),
            ("s3", "log_jsonpath", &self.s3.log_jsonpath),
            ("iam_role", "arn", &self.iam_role.arn),
        ];
        for (section, key, value) in required {
            if value.trim().is_empty() {
                return Err(Error::EmptyConfigValue {
                    section: section.to_string(),
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }
}
