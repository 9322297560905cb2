//! Bulk-load statement builder
//!
//! The one place in the crate where configuration values are inlined into
//! SQL text. The warehouse's COPY syntax takes locations and credentials as
//! string literals, not bind parameters, so the inlining is isolated here
//! and every value is checked before it is quoted.

use crate::error::{Error, Result};

/// Storage region the source buckets live in
pub const REGION: &str = "us-west-2";

/// How the warehouse should map JSON fields onto table columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonFormat {
    /// Let the warehouse match JSON keys to column names
    Auto,
    /// Use an explicit jsonpaths mapping file
    JsonPaths(String),
}

/// Build a COPY statement loading newline-delimited JSON from S3.
///
/// The emitted text is the exact wire format the target warehouse expects:
///
/// ```text
/// COPY <table> FROM '<uri>'
/// CREDENTIALS 'aws_iam_role=<arn>'
/// FORMAT AS JSON '<jsonpaths-uri-or-auto>'
/// REGION 'us-west-2'
/// ```
///
/// The role must already have read access to the source location; nothing
/// is verified here beyond the shape of the inlined values. Inaccessible or
/// malformed data surfaces as a load error from the warehouse engine.
pub fn copy_from_s3(
    table: &str,
    source_uri: &str,
    role_arn: &str,
    format: &JsonFormat,
) -> Result<String> {
    check_inline_safe(source_uri)?;
    check_inline_safe(role_arn)?;
    if !source_uri.starts_with("s3://") {
        return Err(Error::InvalidStorageUri(source_uri.to_string()));
    }
    if !role_arn.starts_with("arn:") {
        return Err(Error::InvalidRoleArn(role_arn.to_string()));
    }

    let json_clause = match format {
        JsonFormat::Auto => "auto".to_string(),
        JsonFormat::JsonPaths(uri) => {
            check_inline_safe(uri)?;
            if !uri.starts_with("s3://") {
                return Err(Error::InvalidStorageUri(uri.to_string()));
            }
            uri.clone()
        }
    };

    Ok(format!(
        "COPY {} FROM '{}'\nCREDENTIALS 'aws_iam_role={}'\nFORMAT AS JSON '{}'\nREGION '{}'",
        table, source_uri, role_arn, json_clause, REGION
    ))
}

/// A value is safe to inline only if quoting it cannot change the statement
fn check_inline_safe(value: &str) -> Result<()> {
    if value.contains('\'') || value.contains(char::is_whitespace) {
        return Err(Error::UnsafeInlineValue(value.to_string()));
    }
    Ok(())
}
