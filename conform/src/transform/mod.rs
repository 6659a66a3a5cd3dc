//! Transformation module.
//!
//! This module turns annotations into string rewrites:
//! - Directive: the named steps and their dispatch
//! - Chain: parse an annotation and apply it left to right
//! - Text / escape: the built-in transform functions
//! - Words: initialism-aware word segmentation

pub mod chain;
pub mod directive;
pub mod escape;
pub mod text;
pub mod words;

pub use chain::{transform_chain, Chain};
pub use directive::{directives_description, Directive, Step};
