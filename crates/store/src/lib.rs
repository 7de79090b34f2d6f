//! Catalog Store: whole-document persistence for the product collection.
//!
//! The store treats a flat JSON file as the single source of truth. Every
//! operation re-reads the full document and mutations write the full
//! document back; there is no in-memory cache, no indexing, and no partial
//! write. Read-modify-write cycles are serialized through an internal mutex
//! so concurrent writers cannot lose each other's updates.

pub mod catalog;
pub mod error;

pub use catalog::CatalogStore;
pub use error::StoreError;
