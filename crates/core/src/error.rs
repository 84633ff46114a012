//! Error types for the resource lifecycle
//!
//! Two taxonomies live here, one per layer:
//!
//! - [`StoreError`] is what a [`ResourceDao`](crate::traits::ResourceDao)
//!   implementation reports. It is a closed enum so the lifecycle service can
//!   classify store failures with an exhaustive match instead of sentinel
//!   comparisons.
//! - [`ApiError`] is what the lifecycle service returns to its caller. Four
//!   kinds, transport-agnostic; a transport layer maps them to protocol
//!   status signals.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.

use crate::resource::Kind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for data-access operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type alias for caller-facing lifecycle operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors reported by a data-access backend.
///
/// `AlreadyExists` and `NotFound` are the two signals the lifecycle service
/// classifies specially; everything else is an opaque backend failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An entity with the same (project, name) is already stored.
    ///
    /// Must only be reported by `create`, which is the one conditional write.
    #[error("entity already exists: {project}/{name}")]
    AlreadyExists {
        /// Project scope of the colliding identity
        project: String,
        /// Name of the colliding identity
        name: String,
    },

    /// No entity stored under (project, name)
    #[error("entity not found: {project}/{name}")]
    NotFound {
        /// Project scope of the missing identity
        project: String,
        /// Name of the missing identity
        name: String,
    },

    /// Storage codec failure (encode or decode)
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Any other backend failure (connectivity, corruption, ...)
    #[error("backend error: {0}")]
    Backend(String),
}

/// Caller-facing errors returned by the lifecycle service.
///
/// The taxonomy is exhaustive for this layer: every operation returns either
/// a typed success value or one of these four kinds.
///
/// `Internal` deliberately carries no detail. The underlying store cause is
/// emitted as a structured `tracing` event at the classification point and
/// never surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ApiError {
    /// Caller-supplied data failed a structural or identity check.
    ///
    /// Always detected locally, before any store call.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Creation collided with an existing identity
    #[error("conflict: {kind} {project}/{name} already exists")]
    Conflict {
        /// Kind of the colliding resource
        kind: Kind,
        /// Project scope of the colliding identity
        project: String,
        /// Name of the colliding identity
        name: String,
    },

    /// The requested (project, name) does not exist
    #[error("not found: {kind} {project}/{name}")]
    NotFound {
        /// Kind of the missing resource
        kind: Kind,
        /// Project scope of the missing identity
        project: String,
        /// Name of the missing identity
        name: String,
    },

    /// Unexpected store failure; the cause was logged, not exposed
    #[error("internal server error")]
    Internal,
}
