//! Schema executor
//!
//! Applies a [`Schema`] to `serde_json::Value` records in place.

use serde_json::{Map, Value};

use super::schema::{FieldRule, Schema};
use crate::error::{ConformError, ConformResult};
use crate::registry::Registry;
use crate::transform::Chain;

impl Schema {
    /// Normalize a JSON document in place
    ///
    /// An object is walked as one record and an array as a sequence of
    /// records (non-object items are skipped). `null` is a no-op. A bare
    /// string, number or boolean has no fields to address and is rejected
    /// with [`ConformError::NotAPointer`] before anything is touched.
    pub fn apply(&self, document: &mut Value, registry: &Registry) -> ConformResult<()> {
        match document {
            Value::Object(record) => self.walk_record(record, registry),
            Value::Array(items) => {
                for item in items.iter_mut() {
                    if let Value::Object(record) = item {
                        self.walk_record(record, registry);
                    }
                }
            }
            Value::Null => {}
            Value::String(_) => return Err(ConformError::NotAPointer("string")),
            Value::Number(_) => return Err(ConformError::NotAPointer("number")),
            Value::Bool(_) => return Err(ConformError::NotAPointer("bool")),
        }
        Ok(())
    }

    fn walk_record(&self, record: &mut Map<String, Value>, registry: &Registry) {
        for (name, rule) in &self.fields {
            if let Some(value) = record.get_mut(name) {
                walk_field(value, rule, registry);
            }
        }
    }
}

fn walk_field(value: &mut Value, rule: &FieldRule, registry: &Registry) {
    match (rule, value) {
        (FieldRule::Directives(chain), Value::String(text)) => conform_string(text, chain, registry),
        (FieldRule::Directives(chain), Value::Array(items)) => {
            for item in items.iter_mut() {
                if let Value::String(text) = item {
                    conform_string(text, chain, registry);
                }
            }
        }
        (FieldRule::Directives(chain), Value::Object(wrapper)) => {
            conform_wrapped(wrapper, chain, registry)
        }
        (FieldRule::Record(schema), Value::Object(record)) => schema.walk_record(record, registry),
        (FieldRule::Record(schema), Value::Array(items)) => {
            for item in items.iter_mut() {
                if let Value::Object(record) = item {
                    schema.walk_record(record, registry);
                }
            }
        }
        (FieldRule::Mapping { values }, Value::Object(entries)) => {
            for entry in entries.values_mut() {
                walk_field(entry, values, registry);
            }
        }
        // null fields and kind mismatches are left alone
        _ => {}
    }
}

fn conform_string(text: &mut String, chain: &Chain, registry: &Registry) {
    let conformed = chain.apply(text, registry);
    *text = conformed;
}

/// Wrapped scalar (`{"String": "...", "Valid": true}`): an object with exactly
/// one string member takes the outer annotation.
fn conform_wrapped(wrapper: &mut Map<String, Value>, chain: &Chain, registry: &Registry) {
    let mut strings = wrapper.values_mut().filter_map(|value| match value {
        Value::String(text) => Some(text),
        _ => None,
    });
    if let (Some(text), None) = (strings.next(), strings.next()) {
        conform_string(text, chain, registry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::schema::example_schema;
    use serde_json::json;

    #[test]
    fn test_apply_example_schema() {
        let mut document = json!({
            "email": "  Jane.Doe@EXAMPLE.org ",
            "first_name": "  jANE ",
            "last_name": "o''CONNOR--smith",
            "username": "Jane Doe The Great",
            "tags": ["Rust Lang", "  WebAssembly "],
            "bio": "<b>hi</b>",
            "age": 37,
            "address": { "city": " new york ", "postcode": "ny 10001", "country": " us " },
            "contacts": {
                "Mom": { "name": "  MARY ann ", "phone": "+1 (555) 010-9999" },
                "Dad": { "name": "bob", "phone": null }
            },
            "untouched": "  Stays  "
        });

        example_schema().apply(&mut document, &Registry::new()).unwrap();

        assert_eq!(document["email"], "Jane.Doe@example.org");
        assert_eq!(document["first_name"], "Jane");
        assert_eq!(document["last_name"], "O'Connor-Smith");
        assert_eq!(document["username"], "jane_doe_the_great");
        assert_eq!(document["tags"], json!(["rust-lang", "web-assembly"]));
        assert_eq!(document["bio"], "&lt;b&gt;hi&lt;/b&gt;");
        assert_eq!(document["age"], 37);
        assert_eq!(document["address"]["city"], "New York");
        assert_eq!(document["address"]["postcode"], "NY 10001");
        assert_eq!(document["address"]["country"], " us ");
        assert_eq!(document["contacts"]["Mom"]["name"], "Mary Ann");
        assert_eq!(document["contacts"]["Mom"]["phone"], "15550109999");
        assert_eq!(document["contacts"]["Dad"]["phone"], Value::Null);
        assert_eq!(document["untouched"], "  Stays  ");
    }

    #[test]
    fn test_array_root_and_null_items() {
        let schema = Schema::new().with_field("name", FieldRule::directives("trim,upper"));
        let mut document = json!([{ "name": " a " }, 12, { "name": null }, { "name": " b " }]);

        schema.apply(&mut document, &Registry::new()).unwrap();
        assert_eq!(document, json!([{ "name": "A" }, 12, { "name": null }, { "name": "B" }]));
    }

    #[test]
    fn test_null_root_is_noop() {
        let mut document = Value::Null;
        assert!(example_schema().apply(&mut document, &Registry::new()).is_ok());
        assert_eq!(document, Value::Null);
    }

    #[test]
    fn test_scalar_root_is_rejected() {
        let schema = example_schema();
        let registry = Registry::new();

        let mut text = json!("  not a record ");
        assert_eq!(
            schema.apply(&mut text, &registry),
            Err(ConformError::NotAPointer("string"))
        );
        assert_eq!(text, "  not a record ");

        assert!(schema.apply(&mut json!(3), &registry).is_err());
        assert!(schema.apply(&mut json!(true), &registry).is_err());
    }

    #[test]
    fn test_wrapped_scalar_object() {
        let schema = Schema::new().with_field("nickname", FieldRule::directives("trim,lower"));

        let mut document = json!({ "nickname": { "String": "  BoB ", "Valid": true } });
        schema.apply(&mut document, &Registry::new()).unwrap();
        assert_eq!(document["nickname"]["String"], "bob");
        assert_eq!(document["nickname"]["Valid"], true);

        // two string members: not a wrapped scalar
        let mut document = json!({ "nickname": { "first": " A ", "second": " B " } });
        schema.apply(&mut document, &Registry::new()).unwrap();
        assert_eq!(document["nickname"], json!({ "first": " A ", "second": " B " }));
    }

    #[test]
    fn test_mapping_keeps_keys() {
        let schema = Schema::new().with_field(
            "labels",
            FieldRule::mapping(FieldRule::directives("trim,upper")),
        );
        let mut document = json!({ "labels": { " Key ": " value ", "other": 3 } });

        schema.apply(&mut document, &Registry::new()).unwrap();
        assert_eq!(document["labels"], json!({ " Key ": "VALUE", "other": 3 }));
    }

    #[test]
    fn test_key_order_preserved() {
        let schema = Schema::new().with_field("name", FieldRule::directives("trim,upper"));
        let mut document: Value =
            serde_json::from_str(r#"{"zeta": 1, "name": " x ", "alpha": {"b": 2, "a": 3}}"#).unwrap();

        schema.apply(&mut document, &Registry::new()).unwrap();
        assert_eq!(
            serde_json::to_string(&document).unwrap(),
            r#"{"zeta":1,"name":"X","alpha":{"b":2,"a":3}}"#
        );
    }

    #[test]
    fn test_custom_directive_from_registry() {
        let registry = Registry::new();
        registry.register("redact", |s: &str| "*".repeat(s.chars().count()));
        let schema = Schema::new().with_field("secret", FieldRule::directives("trim,redact"));

        let mut document = json!({ "secret": "  hunter2 " });
        schema.apply(&mut document, &registry).unwrap();
        assert_eq!(document["secret"], "*******");
    }
}
