//! Pergola - lifecycle service for named, project-scoped configuration resources
//!
//! Pergola validates and normalizes a resource before persistence, enforces
//! metadata invariants (creation/update timestamps, immutability of identity
//! fields), and translates backing-store failures into a stable caller-facing
//! error taxonomy. One generic service, instantiated per resource kind.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use pergola::{Folder, FolderService, LifecycleService, MemoryDao, Parameters, Resource};
//!
//! let dao = Arc::new(MemoryDao::<Folder>::new());
//! let service: FolderService = LifecycleService::new(dao);
//!
//! let created = service.create(Folder::new("team-a", "dash1").into_any())?;
//! assert_eq!(created.metadata.created_at, created.metadata.updated_at);
//!
//! let fetched = service.get(&Parameters::new("team-a", "dash1"))?;
//! assert_eq!(fetched, created);
//! # Ok::<(), pergola::ApiError>(())
//! ```
//!
//! # Architecture
//!
//! The service is generic over the [`Resource`] trait and consumes the store
//! only through the [`ResourceDao`] contract. Transport layers sit above it
//! and map [`ApiError`] kinds to protocol status signals; store backends sit
//! below it and report failures through the closed [`StoreError`] enum.

pub use pergola_core::{
    AlertRule, AlertRuleSpec, AnyEntity, ApiError, ApiResult, Folder, FolderSpec, Kind, Metadata,
    Parameters, Query, Resource, ResourceDao, StoreError, StoreResult,
};
pub use pergola_lifecycle::{AlertRuleService, FolderService, LifecycleService};
pub use pergola_store::MemoryDao;
