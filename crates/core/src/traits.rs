//! Data-access contract
//!
//! This module defines the `ResourceDao` trait that the lifecycle service
//! depends on, enabling swapping store backends (in-memory, etcd-like KV,
//! SQL) without touching the lifecycle layer.
//!
//! Thread safety: all methods must be safe to call concurrently from
//! multiple threads (requires Send + Sync). The service adds no locking of
//! its own; every concurrency guarantee lives behind this trait.

use crate::error::StoreResult;
use crate::query::Query;

/// Data-access contract for one resource kind
///
/// Keyed by `(project, name)`. Implementations report failures through the
/// closed [`StoreError`](crate::error::StoreError) enum so the lifecycle
/// service can classify them exhaustively.
pub trait ResourceDao<T>: Send + Sync {
    /// Store a new entity
    ///
    /// Must be atomic with respect to concurrent creates of the same
    /// identity: exactly one succeeds.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` if an entity with the same (project, name) is already
    /// stored; any other variant for backend failures.
    fn create(&self, entity: &T) -> StoreResult<()>;

    /// Overwrite the stored entity with the same identity
    ///
    /// A blind write: no compare-and-swap, no existence check required of
    /// the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn update(&self, entity: &T) -> StoreResult<()>;

    /// Fetch the entity stored under (project, name)
    ///
    /// # Errors
    ///
    /// `NotFound` if no such identity is stored; any other variant for
    /// backend failures.
    fn get(&self, project: &str, name: &str) -> StoreResult<T>;

    /// Remove the entity stored under (project, name)
    ///
    /// # Errors
    ///
    /// `NotFound` if no such identity is stored; any other variant for
    /// backend failures.
    fn delete(&self, project: &str, name: &str) -> StoreResult<()>;

    /// List stored entities matching `query`
    ///
    /// Results are ordered by (project, name). The query is interpreted
    /// entirely by the implementation.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn list(&self, query: &Query) -> StoreResult<Vec<T>>;
}
