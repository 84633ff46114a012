//! Generic entity lifecycle service
//!
//! One implementation of the Create/Update/Get/Delete/List contract,
//! parameterized over the resource kind and its data-access backend, and
//! instantiated once per kind at composition time:
//!
//! ```
//! use std::sync::Arc;
//! use pergola_core::Folder;
//! use pergola_lifecycle::{FolderService, LifecycleService};
//! use pergola_store::MemoryDao;
//!
//! let dao = Arc::new(MemoryDao::<Folder>::new());
//! let service: FolderService = LifecycleService::new(dao);
//! ```
//!
//! The service is stateless and holds no shared mutable state; concurrency
//! guarantees are entirely a property of the backing store.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod convert;
mod service;

pub use service::LifecycleService;

use pergola_core::{AlertRule, Folder};

/// Lifecycle service over folders
pub type FolderService = LifecycleService<Folder>;

/// Lifecycle service over alerting rules
pub type AlertRuleService = LifecycleService<AlertRule>;
