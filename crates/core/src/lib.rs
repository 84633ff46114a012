//! Core types and traits for Pergola
//!
//! This crate defines the foundational types used throughout the system:
//! - Metadata: identity and timestamp block shared by every resource
//! - Parameters: path-derived identity (project, name) for a single request
//! - Kind / Resource / AnyEntity: resource kinds, the trait the lifecycle
//!   service is generic over, and the weakly-typed wire envelope
//! - Query: opaque list filter passed through to the store
//! - StoreError / ApiError: the store-level and caller-facing error taxonomies
//! - ResourceDao: the data-access contract the lifecycle service depends on

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod metadata;
pub mod query;
pub mod resource;
pub mod traits;

// Re-export commonly used types and traits
pub use error::{ApiError, ApiResult, StoreError, StoreResult};
pub use metadata::{Metadata, Parameters};
pub use query::Query;
pub use resource::{AlertRule, AlertRuleSpec, AnyEntity, Folder, FolderSpec, Kind, Resource};
pub use traits::ResourceDao;
