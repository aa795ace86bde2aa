//! Record storage for techedu
//!
//! The store is the single source of truth for the process lifetime. It is
//! constructed by the entry point and handed to the HTTP layer; there is no
//! module-level instance.
//!
//! # Design Principles
//!
//! - Append-only: records are never updated or deleted
//! - One lock per collection, taken once per operation
//! - Identifiers are generated by the store and never reused
//! - Timestamps are assigned by the store, never by callers

mod collection;
mod errors;
mod memory;
mod seed;
mod store;

pub use errors::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use store::Storage;
