//! Seeding engine for the clinic collections.
//!
//! Generates schema-plausible random documents, validates them through the
//! model crate's field chains, and dumps every collection as a JSON run
//! artifact.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod sample;
pub mod store;
pub mod streets;

pub use engine::{SeedEngine, SeedRun};
pub use errors::SeedError;
pub use model::{SeedCounts, SeedOptions, SeedReport};
pub use store::MemoryStore;
pub use streets::StreetBook;
