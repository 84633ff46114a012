//! In-memory store backend for Pergola resources
//!
//! This crate implements the `ResourceDao` contract using:
//! - `BTreeMap<StoreKey, serde_json::Value>` for ordered (project, name) storage
//! - `parking_lot::RwLock` for thread-safe access
//!
//! Entities are stored JSON-encoded: the wire/storage codec is a store
//! concern, so codec failures surface as `StoreError::Serialization` rather
//! than leaking into the lifecycle layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod memory;

pub use memory::MemoryDao;
