//! Error types for `clusterboot`
//!
//! Loading follows a fail-fast policy for fetch, decode and conversion
//! failures, while validation failures are collected exhaustively and
//! surfaced as a single [`AggregateError`].

use std::path::PathBuf;
use thiserror::Error;

use crate::config::field::AggregateError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `clusterboot` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// Configuration error (malformed YAML, conversion or validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (unreadable asset directory, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `clusterboot` operations.
///
/// Aggregates the domain errors and maps each one to a process exit code.
#[derive(Debug, Error)]
pub enum ClusterBootError {
    /// Configuration loading, conversion or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClusterBootError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(ConfigError::Fetch { .. } | ConfigError::TemplateExists { .. }) => {
                ExitCode::IO_ERROR
            }
            Self::Config(_) | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading, conversion and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file fetcher failed for a reason other than "not found"
    #[error("failed to load {name} file: {source}")]
    Fetch {
        /// Name of the requested asset file
        name: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Input exceeds the configured size limit
    #[error("{name} is {size} bytes, exceeding the limit of {limit} bytes")]
    TooLarge {
        /// Name of the asset file
        name: String,
        /// Actual size in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// Strict YAML decoding failed (syntax, unknown field, type mismatch)
    #[error("failed to unmarshal {name}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    Decode {
        /// Name of the asset file
        name: String,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the decoder
        message: String,
    },

    /// Deprecated fields could not be upconverted
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// One or more validation rules failed
    #[error(transparent)]
    Invalid(#[from] AggregateError),

    /// A derived artifact could not be serialized
    #[error("failed to encode host file: {0}")]
    Encode(String),

    /// Refused to overwrite an existing file
    #[error("{} already exists (use --force to overwrite)", path.display())]
    TemplateExists {
        /// Path of the existing file
        path: PathBuf,
    },
}

/// Failures while rewriting deprecated fields into their canonical shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// `apiVersion` names a version this tool cannot read
    #[error("unsupported apiVersion {version:?}: expected one of {supported:?}")]
    UnsupportedVersion {
        /// Version found in the document
        version: String,
        /// Versions this tool understands
        supported: Vec<&'static str>,
    },

    /// A deprecated field and its replacement are both set and disagree
    #[error("cannot set both {deprecated} and {replacement}; {deprecated} is deprecated")]
    ConflictingFields {
        /// Path of the deprecated field
        deprecated: String,
        /// Path of the canonical field
        replacement: String,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `clusterboot` operations.
pub type Result<T> = std::result::Result<T, ClusterBootError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::field::{FieldError, FieldPath};

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
    }

    #[test]
    fn test_decode_error_exit_code() {
        let err: ClusterBootError = ConfigError::Decode {
            name: "agent-config.yaml".to_string(),
            line: Some(3),
            message: "unknown field `bogus`".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
    }

    #[test]
    fn test_fetch_error_exit_code() {
        let err: ClusterBootError = ConfigError::Fetch {
            name: "agent-config.yaml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_invalid_exit_code() {
        let aggregate = AggregateError::new(vec![FieldError::required(
            FieldPath::new("Hosts").index(0).child("Interfaces"),
            "at least one interface must be defined for each node",
        )]);
        let err: ClusterBootError = ConfigError::Invalid(aggregate).into();
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: ClusterBootError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_decode_error_display_includes_line() {
        let err = ConfigError::Decode {
            name: "agent-config.yaml".to_string(),
            line: Some(42),
            message: "unexpected token".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("agent-config.yaml"));
        assert!(msg.contains("line 42"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_conversion_error_display() {
        let err = ConversionError::ConflictingFields {
            deprecated: "ntpSources".to_string(),
            replacement: "additionalNTPSources".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot set both ntpSources and additionalNTPSources; ntpSources is deprecated"
        );
    }
}
