//! Chain interpreter
//!
//! Parses an annotation (`trim,lower,truncate=10`) once and applies its
//! directives left to right, each one receiving the previous output.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::directive::{Directive, Step};
use crate::registry::Registry;

/// A parsed annotation: an ordered list of directives
///
/// Serialized as its annotation string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Chain {
    directives: Vec<Directive>,
}

impl Chain {
    /// Parse a comma-separated directive list. An empty string yields an
    /// empty chain, which leaves values unchanged.
    pub fn parse(annotation: &str) -> Self {
        if annotation.is_empty() {
            return Self::default();
        }
        Self {
            directives: annotation.split(',').map(Directive::parse).collect(),
        }
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Apply every directive in order
    ///
    /// `truncate=<N>` ends the chain as soon as it cuts the value: directives
    /// after it are not applied.
    pub fn apply(&self, input: &str, registry: &Registry) -> String {
        let mut value = input.to_string();
        for directive in &self.directives {
            match directive.apply(&value, registry) {
                Step::Continue(next) => value = next,
                Step::Stop(last) => return last,
            }
        }
        value
    }
}

impl From<String> for Chain {
    fn from(annotation: String) -> Self {
        Self::parse(&annotation)
    }
}

impl From<&str> for Chain {
    fn from(annotation: &str) -> Self {
        Self::parse(annotation)
    }
}

impl From<Chain> for String {
    fn from(chain: Chain) -> Self {
        chain.to_string()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, directive) in self.directives.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", directive)?;
        }
        Ok(())
    }
}

/// Apply a comma-separated directive list to `input` using the process-wide
/// registry for extension names.
pub fn transform_chain(input: &str, directives: &str) -> String {
    Registry::global().transform_chain(input, directives)
}
