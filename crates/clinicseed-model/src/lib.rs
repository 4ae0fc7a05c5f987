//! Document model for the clinic seeding tool.
//!
//! This crate defines the collection schemas, closed enumerations, and the
//! field validators the store evaluates on save.

pub mod document;
pub mod enumerators;
pub mod error;
pub mod schema;
pub mod validators;

pub use document::{CollectionKind, CollectionSchema, Document, FieldSchema};
pub use error::ValidationError;
pub use validators::{CollectionRead, NoCollections, ValidationContext, Validator};
