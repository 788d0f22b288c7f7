//! # Error Types
//!
//! Structured error types for frame_core. Design failures of a single member
//! (flexure, shear) and search failures (beam-count ceiling) are *result
//! values*, see [`crate::design::DesignFailure`] and
//! [`crate::frame::FrameInfeasibility`]. This type covers the operational
//! failures: bad inputs, unreadable catalogs, unknown sections.
//!
//! ## Example
//!
//! ```rust
//! use frame_core::errors::{FrameError, FrameResult};
//!
//! fn validate_span(span_ft: f64) -> FrameResult<()> {
//!     if span_ft <= 0.0 {
//!         return Err(FrameError::invalid_input(
//!             "span_ft",
//!             span_ft.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for frame_core operations
pub type FrameResult<T> = Result<T, FrameError>;

/// Structured error type for catalog and search operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FrameError {
    /// An input value is invalid (out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required catalog column is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Section identifier not present in the catalog
    #[error("Section not found: {section}")]
    SectionNotFound { section: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl FrameError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FrameError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        FrameError::MissingField {
            field: field.into(),
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(section: impl Into<String>) -> Self {
        FrameError::SectionNotFound {
            section: section.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FrameError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FrameError::InvalidInput { .. } => "INVALID_INPUT",
            FrameError::MissingField { .. } => "MISSING_FIELD",
            FrameError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            FrameError::FileError { .. } => "FILE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = FrameError::invalid_input("height_ft", "-20", "Height must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("InvalidInput"));
        let roundtrip: FrameError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(FrameError::missing_field("W").error_code(), "MISSING_FIELD");
        assert_eq!(
            FrameError::section_not_found("W8X10").error_code(),
            "SECTION_NOT_FOUND"
        );
        assert_eq!(
            FrameError::file_error("open", "wsec.csv", "no such file").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        let error = FrameError::section_not_found("W99X1");
        assert_eq!(error.to_string(), "Section not found: W99X1");
    }
}
