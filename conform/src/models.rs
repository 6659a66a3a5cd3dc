//! Ready-made field types.
//!
//! - [`NullString`] - Nullable string wrapper, normalized as a wrapped scalar

use serde::{Deserialize, Serialize};

use crate::Conform;

// =============================================================================
// Nullable String
// =============================================================================

/// A string that may be SQL `NULL`.
///
/// As a wrapped scalar, an annotated `NullString` field has the annotation
/// applied to its `string` member. `valid` is never changed, so a `NULL`
/// value keeps its (normally empty) string and its null flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Conform)]
#[conform(wrapped)]
pub struct NullString {
    /// The value, meaningful when `valid` is true.
    pub string: String,
    /// False for `NULL`.
    pub valid: bool,
}

impl NullString {
    /// A non-null string.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            string: value.into(),
            valid: true,
        }
    }

    /// The `NULL` value.
    pub fn null() -> Self {
        Self::default()
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.valid.then_some(self.string.as_str())
    }
}

impl From<Option<String>> for NullString {
    fn from(value: Option<String>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }
}

impl From<NullString> for Option<String> {
    fn from(value: NullString) -> Self {
        value.valid.then_some(value.string)
    }
}
