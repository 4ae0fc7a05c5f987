use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::validators::{ValidationContext, Validator};

/// A single persisted record: an ordered field map keyed by an opaque,
/// store-assigned `_key`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    fields: BTreeMap<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a schema's default values, as the original seeding code
    /// did when it created documents from a default-field map.
    pub fn with_defaults(schema: &CollectionSchema) -> Self {
        let mut doc = Self::new();
        for field in &schema.fields {
            if let Some(default) = &field.default {
                doc.set(field.name, default.clone());
            }
        }
        doc
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    pub fn key(&self) -> Option<&str> {
        self.get_str("_key")
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.set("_key", Value::String(key.into()));
    }

    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }
}

/// Whether a collection holds plain documents or directed relationship
/// records with `_from`/`_to` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Document,
    Edge,
}

/// One declared field: name, optional default, and the ordered validator
/// chain evaluated on save.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub name: &'static str,
    pub default: Option<Value>,
    pub validators: Vec<Validator>,
}

impl FieldSchema {
    pub fn new(name: &'static str, validators: Vec<Validator>) -> Self {
        Self {
            name,
            default: None,
            validators,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Declarative collection definition. Fields not listed here are allowed
/// and pass through unvalidated (foreign fields).
#[derive(Debug, Clone)]
pub struct CollectionSchema {
    pub name: &'static str,
    pub kind: CollectionKind,
    pub fields: Vec<FieldSchema>,
}

impl CollectionSchema {
    /// Run every declared field's validator chain against the candidate
    /// document, short-circuiting on the first failure.
    pub fn validate(
        &self,
        doc: &Document,
        ctx: &ValidationContext<'_>,
    ) -> Result<(), ValidationError> {
        for field in &self.fields {
            let value = doc.get(field.name);
            for validator in &field.validators {
                validator.check(field.name, value, ctx)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::validators::NoCollections;

    fn ctx() -> ValidationContext<'static> {
        ValidationContext {
            today: chrono::NaiveDate::from_ymd_opt(2026, 8, 26).unwrap(),
            store: &NoCollections,
        }
    }

    #[test]
    fn defaults_populate_new_documents() {
        let schema = CollectionSchema {
            name: "clinic_Test",
            kind: CollectionKind::Document,
            fields: vec![
                FieldSchema::new("status", vec![Validator::NotNull])
                    .with_default(json!("New")),
                FieldSchema::new("payed", vec![Validator::Bool]).with_default(json!(false)),
            ],
        };

        let doc = Document::with_defaults(&schema);
        assert_eq!(doc.get("status"), Some(&json!("New")));
        assert_eq!(doc.get("payed"), Some(&json!(false)));
    }

    #[test]
    fn validation_short_circuits_on_first_failure() {
        let schema = CollectionSchema {
            name: "clinic_Test",
            kind: CollectionKind::Document,
            fields: vec![FieldSchema::new(
                "birth_date",
                vec![Validator::NotNull, Validator::DateFormat],
            )],
        };

        let mut doc = Document::new();
        doc.set("birth_date", json!(""));
        let err = schema.validate(&doc, &ctx()).unwrap_err();
        assert_eq!(err.field, "birth_date");
        assert!(err.message.contains("null"));
    }

    #[test]
    fn foreign_fields_pass_through() {
        let schema = CollectionSchema {
            name: "clinic_Test",
            kind: CollectionKind::Document,
            fields: vec![FieldSchema::new("model", vec![Validator::NotNull])],
        };

        let mut doc = Document::new();
        doc.set("model", json!("AB 123"));
        doc.set("extra", json!({"anything": true}));
        assert!(schema.validate(&doc, &ctx()).is_ok());
    }
}
