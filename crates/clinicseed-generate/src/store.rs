//! In-memory document store with validate-on-save semantics.
//!
//! Stands in for the clinic's document database: named collections of
//! JSON documents, opaque store-assigned keys, and random limit-1 lookups
//! for foreign-key resolution. Single writer, no transactions; ordering is
//! program order.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde_json::Value;

use clinicseed_model::{CollectionRead, CollectionSchema, Document, ValidationContext};

use crate::errors::SeedError;

#[derive(Debug)]
pub struct MemoryStore {
    schemas: BTreeMap<&'static str, CollectionSchema>,
    documents: BTreeMap<&'static str, Vec<Document>>,
    today: NaiveDate,
    next_key: u64,
}

impl MemoryStore {
    /// A store with every clinic collection registered and empty.
    pub fn new(today: NaiveDate) -> Self {
        let mut schemas = BTreeMap::new();
        let mut documents = BTreeMap::new();
        for schema in clinicseed_model::schema::all() {
            documents.insert(schema.name, Vec::new());
            schemas.insert(schema.name, schema);
        }
        Self {
            schemas,
            documents,
            today,
            next_key: 1,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Validate the candidate against the collection's schema and, on
    /// success, persist it under a fresh key. The key is returned so edges
    /// can reference the new document.
    pub fn insert(
        &mut self,
        collection: &str,
        mut doc: Document,
    ) -> Result<String, SeedError> {
        let schema = self
            .schemas
            .get(collection)
            .ok_or_else(|| SeedError::UnknownCollection(collection.to_string()))?;
        let ctx = ValidationContext {
            today: self.today,
            store: self,
        };
        schema.validate(&doc, &ctx)?;

        let key = self.next_key.to_string();
        self.next_key += 1;
        doc.set_key(key.clone());
        self.documents
            .get_mut(collection)
            .expect("schemas and documents share keys")
            .push(doc);
        Ok(key)
    }

    pub fn docs(&self, collection: &str) -> &[Document] {
        self.documents
            .get(collection)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self, collection: &str) -> usize {
        self.docs(collection).len()
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    pub fn get(&self, collection: &str, key: &str) -> Option<&Document> {
        self.docs(collection)
            .iter()
            .find(|doc| doc.key() == Some(key))
    }

    /// Random limit-1 query, the in-memory counterpart of
    /// `SORT RAND() LIMIT 1`.
    pub fn random_one(&self, collection: &str, rng: &mut impl Rng) -> Option<&Document> {
        self.docs(collection).choose(rng)
    }

    /// Random limit-1 query over the documents matching a predicate.
    pub fn random_where<'a>(
        &'a self,
        collection: &str,
        rng: &mut impl Rng,
        predicate: impl Fn(&Document) -> bool,
    ) -> Option<&'a Document> {
        let matching: Vec<&Document> = self
            .docs(collection)
            .iter()
            .filter(|doc| predicate(doc))
            .collect();
        matching.choose(rng).copied()
    }

    pub fn first_where<'a>(
        &'a self,
        collection: &str,
        predicate: impl Fn(&Document) -> bool,
    ) -> Option<&'a Document> {
        self.docs(collection).iter().find(|doc| predicate(doc))
    }

    /// Collection names in registration-independent, stable order.
    pub fn collection_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.documents.keys().copied()
    }
}

/// Collection-qualified handle used by edge endpoints, e.g.
/// `clinic_Staff/42`.
pub fn handle(collection: &str, key: &str) -> String {
    format!("{collection}/{key}")
}

impl CollectionRead for MemoryStore {
    fn contains_key(&self, collection: &str, key: &str) -> bool {
        self.get(collection, key).is_some()
    }

    fn field_of(&self, collection: &str, key: &str, field: &str) -> Option<Value> {
        self.get(collection, key)
            .and_then(|doc| doc.get(field).cloned())
    }

    fn email_taken(&self, collection: &str, email: &str) -> bool {
        self.docs(collection)
            .iter()
            .any(|doc| doc.get_str("email") == Some(email))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    use clinicseed_model::schema;

    use super::*;

    fn store() -> MemoryStore {
        MemoryStore::new(NaiveDate::from_ymd_opt(2026, 8, 26).unwrap())
    }

    fn tip(text: &str) -> Document {
        let mut doc = Document::new();
        doc.set("text", json!(text));
        doc
    }

    #[test]
    fn insert_assigns_monotonic_keys() {
        let mut store = store();
        let first = store.insert(schema::TIPS, tip("drink water")).unwrap();
        let second = store.insert(schema::TIPS, tip("sleep well")).unwrap();
        assert_ne!(first, second);
        assert!(store.get(schema::TIPS, &first).is_some());
        assert_eq!(store.len(schema::TIPS), 2);
    }

    #[test]
    fn insert_rejects_invalid_documents() {
        let mut store = store();
        let err = store.insert(schema::TIPS, Document::new()).unwrap_err();
        assert!(matches!(err, SeedError::Validation(_)));
        assert!(store.is_empty(schema::TIPS));
    }

    #[test]
    fn unknown_collection_is_an_error() {
        let mut store = store();
        let err = store.insert("clinic_Nope", tip("x")).unwrap_err();
        assert!(matches!(err, SeedError::UnknownCollection(_)));
    }

    #[test]
    fn duplicate_email_is_rejected_on_second_insert() {
        let mut store = store();
        let mut group = Document::new();
        group.set("name", json!("patients"));
        store.insert(schema::USERGROUPS, group).unwrap();

        let patient = |email: &str| {
            let mut doc = Document::new();
            doc.set("email", json!(email));
            doc.set("first_name", json!("Анна"));
            doc.set("last_name", json!("Иванова"));
            doc.set("birth_date", json!("1985-03-14"));
            doc.set("ssn", json!("123-45-6789"));
            doc.set(
                "address",
                json!({"zip": "420111", "country": "Россия", "city": "Казань",
                       "street": "Баумана", "building": "5", "flat": 10}),
            );
            doc.set("phone_number", json!("+7 843 555 0101"));
            doc.set(
                "security_questions",
                json!([{"question": "First pet?", "answer": "Барсик"}]),
            );
            doc
        };

        store
            .insert(schema::PATIENTS, patient("dup@clinic.ru"))
            .unwrap();
        let err = store
            .insert(schema::PATIENTS, patient("dup@clinic.ru"))
            .unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn random_where_filters_before_sampling() {
        let mut store = store();
        for name in ["doctors", "staff", "patients"] {
            let mut doc = Document::new();
            doc.set("name", json!(name));
            store.insert(schema::USERGROUPS, doc).unwrap();
        }

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let picked = store
            .random_where(schema::USERGROUPS, &mut rng, |doc| {
                doc.get_str("name") == Some("doctors")
            })
            .expect("a doctors group exists");
        assert_eq!(picked.get_str("name"), Some("doctors"));

        assert!(
            store
                .random_where(schema::USERGROUPS, &mut rng, |doc| {
                    doc.get_str("name") == Some("janitors")
                })
                .is_none()
        );
    }

    #[test]
    fn handles_are_collection_qualified() {
        assert_eq!(handle(schema::STAFF, "42"), "clinic_Staff/42");
    }
}
