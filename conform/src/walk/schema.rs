//! Annotation schema for untyped records
//!
//! A schema plays the role of field annotations for `serde_json::Value`
//! records, where no Rust type carries them.
//!
//! ```json
//! {
//!   "description": "signup form",
//!   "fields": {
//!     "email": "trim,email",
//!     "tags": "trim,slug",
//!     "address": { "fields": { "city": "trim,title" } },
//!     "contacts": { "values": { "fields": { "name": "name" } } }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::SchemaResult;
use crate::transform::Chain;

/// Field annotations for one record shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Human-readable description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Rule per field name; unlisted fields are never touched
    pub fields: BTreeMap<String, FieldRule>,
}

/// How a single field is handled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldRule {
    /// Annotation applied to a string, to every string of an array, or to
    /// the single string member of a wrapped scalar object
    Directives(Chain),

    /// Nested record (or array of records) walked with its own schema
    Record(Schema),

    /// Object used as a map: every value is walked with `values`, keys are
    /// kept as they are
    Mapping { values: Box<FieldRule> },
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for `field`
    pub fn with_field(mut self, field: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.insert(field.into(), rule);
        self
    }

    /// Parse a schema from JSON string
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a schema from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Names of the annotated fields, nested ones as dotted paths
    pub fn field_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_paths(self, "", &mut paths);
        paths
    }
}

fn collect_paths(schema: &Schema, prefix: &str, paths: &mut Vec<String>) {
    for (name, rule) in &schema.fields {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        collect_rule_paths(rule, path, paths);
    }
}

fn collect_rule_paths(rule: &FieldRule, path: String, paths: &mut Vec<String>) {
    match rule {
        FieldRule::Directives(_) => paths.push(path),
        FieldRule::Record(nested) => collect_paths(nested, &path, paths),
        FieldRule::Mapping { values } => collect_rule_paths(values, format!("{}.*", path), paths),
    }
}

impl FieldRule {
    /// Directive rule from an annotation string
    pub fn directives(annotation: &str) -> Self {
        Self::Directives(Chain::parse(annotation))
    }

    /// Mapping rule walking every value with `values`
    pub fn mapping(values: FieldRule) -> Self {
        Self::Mapping {
            values: Box::new(values),
        }
    }
}

/// Create an example schema for documentation/testing
pub fn example_schema() -> Schema {
    let address = Schema::new()
        .with_field("city", FieldRule::directives("trim,title"))
        .with_field("postcode", FieldRule::directives("trim,upper"));

    let contact = Schema::new()
        .with_field("name", FieldRule::directives("trim,name"))
        .with_field("phone", FieldRule::directives("num"));

    let mut schema = Schema::new()
        .with_field("email", FieldRule::directives("trim,email"))
        .with_field("first_name", FieldRule::directives("trim,name"))
        .with_field("last_name", FieldRule::directives("trim,name"))
        .with_field("username", FieldRule::directives("trim,snake,truncate=32"))
        .with_field("tags", FieldRule::directives("trim,slug"))
        .with_field("bio", FieldRule::directives("trim,!html"))
        .with_field("address", FieldRule::Record(address))
        .with_field("contacts", FieldRule::mapping(FieldRule::Record(contact)));
    schema.description = "Example signup form".to_string();
    schema
}
