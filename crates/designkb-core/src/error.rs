//! Error types and exit codes for designkb
//!
//! Exit codes:
//! - 0: Success (including queries that matched nothing)
//! - 1: Invalid invocation (bad/missing selector, empty query, bad flags or config)
//! - 2: Corpus data unavailable or corrupt

mod macros;

use std::path::PathBuf;

use thiserror::Error;

use crate::corpus::Family;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Invalid invocation - bad selector, flags, query or config (1)
    Usage = 1,
    /// Corpus data missing or malformed (2)
    Data = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while answering a query
#[derive(Error, Debug)]
pub enum DesignKbError {
    // Invocation errors (exit code 1)
    #[error("invalid selector: {reason}")]
    InvalidSelector { reason: String },

    #[error("unknown {family}: {value} (valid: {})", .valid.join(", "))]
    UnknownPartition {
        family: Family,
        value: String,
        valid: Vec<&'static str>,
    },

    #[error("empty query: provide at least one search term")]
    EmptyQuery,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Corpus errors (exit code 2)
    #[error("{family} corpus unavailable: {reason}")]
    CorpusUnavailable { family: Family, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DesignKbError {
    /// Create an error for a selector that is missing or ambiguous
    pub fn invalid_selector(reason: impl Into<String>) -> Self {
        DesignKbError::InvalidSelector {
            reason: reason.into(),
        }
    }

    /// Create an error for a partition name outside the family's enumerated set
    pub fn unknown_partition(family: Family, value: impl Into<String>) -> Self {
        DesignKbError::UnknownPartition {
            family,
            value: value.into(),
            valid: family.partition_names(),
        }
    }

    /// Create an error for corpus data that cannot be read or parsed
    pub fn corpus_unavailable(family: Family, reason: impl std::fmt::Display) -> Self {
        DesignKbError::CorpusUnavailable {
            family,
            reason: reason.to_string(),
        }
    }

    /// Create an error for a config file that cannot be used
    pub fn invalid_config(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        DesignKbError::InvalidConfig {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DesignKbError::InvalidSelector { .. }
            | DesignKbError::UnknownPartition { .. }
            | DesignKbError::EmptyQuery
            | DesignKbError::UsageError(_)
            | DesignKbError::InvalidConfig { .. }
            | DesignKbError::Json(_) => ExitCode::Usage,

            DesignKbError::CorpusUnavailable { .. } => ExitCode::Data,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            DesignKbError::InvalidSelector { .. } => "invalid_selector",
            DesignKbError::UnknownPartition { .. } => "unknown_partition",
            DesignKbError::EmptyQuery => "empty_query",
            DesignKbError::UsageError(_) => "usage_error",
            DesignKbError::InvalidConfig { .. } => "invalid_config",
            DesignKbError::CorpusUnavailable { .. } => "corpus_unavailable",
            DesignKbError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let DesignKbError::UnknownPartition { family, valid, .. } = self {
            error_obj["family"] = serde_json::json!(family.as_str());
            error_obj["valid"] = serde_json::json!(valid);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for designkb operations
pub type Result<T> = std::result::Result<T, DesignKbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            DesignKbError::invalid_selector("both").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(DesignKbError::EmptyQuery.exit_code(), ExitCode::Usage);
        assert_eq!(
            DesignKbError::unknown_partition(Family::Domain, "nope").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            DesignKbError::corpus_unavailable(Family::Stack, "missing").exit_code(),
            ExitCode::Data
        );
        assert_eq!(i32::from(ExitCode::Data), 2);
    }

    #[test]
    fn test_unknown_partition_lists_valid_options() {
        let err = DesignKbError::unknown_partition(Family::Domain, "nonexistent");
        let message = err.to_string();
        assert!(message.starts_with("unknown domain: nonexistent"));
        assert!(message.contains("style, typography, color, product, landing, chart, ux, prompt"));
    }

    #[test]
    fn test_to_json_envelope() {
        let err = DesignKbError::unknown_partition(Family::Stack, "angular");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 1);
        assert_eq!(json["error"]["type"], "unknown_partition");
        assert_eq!(json["error"]["family"], "stack");
        assert!(json["error"]["valid"]
            .as_array()
            .unwrap()
            .iter()
            .any(|v| v == "react-native"));
    }

    #[test]
    fn test_invocation_error_types() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let cases = [
            (DesignKbError::UsageError("bad flag".into()), "usage_error"),
            (
                DesignKbError::invalid_config("/tmp/config.toml", "bad weights"),
                "invalid_config",
            ),
            (DesignKbError::from(json_err), "json_error"),
        ];
        for (err, expected) in cases {
            assert_eq!(err.error_type(), expected);
            assert_eq!(err.exit_code(), ExitCode::Usage);
        }
    }

    #[test]
    fn test_corpus_unavailable_json_code() {
        let err = DesignKbError::corpus_unavailable(Family::Domain, "bad toml");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "corpus_unavailable");
    }
}
