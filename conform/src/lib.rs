//! # Conform - declarative normalization of string fields
//!
//! Conform rewrites the string fields of a record in place, following a
//! per-field annotation: an ordered, comma-separated list of directives such
//! as `trim,lower` or `trim,name,truncate=64`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Record    │────▶│   Walker    │────▶│    Chain    │────▶│   Record    │
//! │ (annotated) │     │ (per field) │     │ (directives)│     │ (in place)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use conform::Conform;
//!
//! #[derive(Conform)]
//! struct Signup {
//!     #[conform("trim,email")]
//!     email: String,
//!     #[conform("trim,name")]
//!     first_name: String,
//!     #[conform("trim,slug")]
//!     tags: Vec<String>,
//! }
//!
//! let mut form = Signup {
//!     email: "  Jane@EXAMPLE.com ".into(),
//!     first_name: " jANE ".into(),
//!     tags: vec!["Rust Lang".into()],
//! };
//! conform::apply(&mut form)?;
//! assert_eq!(form.email, "Jane@example.com");
//! assert_eq!(form.first_name, "Jane");
//! assert_eq!(form.tags, ["rust-lang"]);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`transform`] - Directives, chains and the built-in transforms
//! - [`registry`] - Extension transforms
//! - [`walk`] - Record walking (typed records and JSON schemas)
//! - [`models`] - Ready-made field types

// Lets the derive macro's `::conform::` paths resolve inside this crate.
extern crate self as conform;

// Core modules
pub mod error;
pub mod registry;

// Transformation
pub mod transform;

// Walking
pub mod walk;

// Field types
pub mod models;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConformError, ConformResult, SchemaError, SchemaResult};

// =============================================================================
// Re-exports - Transforms
// =============================================================================

pub use transform::{directives_description, transform_chain, Chain, Directive, Step};

// =============================================================================
// Re-exports - Registry
// =============================================================================

pub use registry::{register_transform, Registry, TransformFn};

// =============================================================================
// Re-exports - Walking
// =============================================================================

pub use conform_derive::Conform;
pub use walk::{apply, apply_with, example_schema, Conform, ConformField, FieldRule, Schema};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::NullString;

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
