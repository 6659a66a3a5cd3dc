//! Error types for conform.
//!
//! - [`ConformError`] - Record walking errors
//! - [`SchemaError`] - Schema loading errors
//!
//! Everything else (missing annotations, unknown directives, `None` fields,
//! unsupported field kinds) is a silent no-op rather than an error.

use thiserror::Error;

// =============================================================================
// Walk Errors
// =============================================================================

/// Errors while walking a record.
///
/// The only structural failure is a top-level argument that cannot be
/// addressed as a record. It is detected before any field is mutated, so a
/// failed call never leaves a half-normalized record behind. Nested traversal
/// never raises it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConformError {
    /// The top-level value is not a reference to a record.
    #[error("Not a pointer: expected a record, got {0}")]
    NotAPointer(&'static str),
}

// =============================================================================
// Schema Errors
// =============================================================================

/// Errors while loading an annotation schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Failed to read the schema file.
    #[error("Failed to read schema: {0}")]
    Io(#[from] std::io::Error),

    /// The schema document is malformed.
    #[error("Invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for walk operations.
pub type ConformResult<T> = Result<T, ConformError>;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_pointer_message() {
        let err = ConformError::NotAPointer("string");
        let msg = err.to_string();
        assert!(msg.contains("Not a pointer"));
        assert!(msg.contains("string"));
    }

    #[test]
    fn test_schema_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SchemaError = json_err.into();
        assert!(err.to_string().starts_with("Invalid schema JSON"));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: SchemaError = io_err.into();
        assert!(err.to_string().contains("missing.json"));
    }
}
