//! LifecycleService: the generic Create/Update/Get/Delete/List orchestrator
//!
//! ## Design
//!
//! The service is a stateless facade over a [`ResourceDao`] backend. It holds
//! no state beyond an `Arc<dyn ResourceDao<T>>` reference, so cloning is
//! cheap and instances can be shared freely across threads.
//!
//! ## Responsibilities
//!
//! - guard the wire boundary: a body of the wrong kind is rejected before it
//!   can touch the store
//! - enforce the metadata invariants: identity fields from the request path
//!   are authoritative, `created_at` survives every update, `updated_at`
//!   moves forward on every write
//! - classify store failures once, at the store call, into the four-kind
//!   caller-facing taxonomy
//!
//! ## Concurrency
//!
//! `create` relies on the store's atomic-create guarantee and is the only
//! operation with one. `update` is a read-modify-write without a guard: two
//! concurrent updates interleave as last-writer-wins. That race is inherited
//! from the contract deliberately; see the data-access docs.

use std::sync::Arc;

use tracing::debug;

use pergola_core::{AnyEntity, ApiError, ApiResult, Parameters, Query, Resource, ResourceDao};

use crate::convert;

/// Generic lifecycle service over one resource kind
///
/// Stateless facade over a data-access backend; all persistent state lives
/// behind the DAO. Instantiated once per kind at composition time.
#[derive(Clone)]
pub struct LifecycleService<T> {
    dao: Arc<dyn ResourceDao<T>>,
}

impl<T: Resource> LifecycleService<T> {
    /// Create a service over the given backend
    pub fn new(dao: Arc<dyn ResourceDao<T>>) -> Self {
        LifecycleService { dao }
    }

    /// Unwrap the wire envelope, rejecting bodies of another kind.
    fn extract(entity: AnyEntity) -> ApiResult<T> {
        T::from_any(entity).map_err(|received| {
            ApiError::BadRequest(format!(
                "wrong entity format, expected '{}', received '{}'",
                T::KIND,
                received
            ))
        })
    }

    /// Validate, stamp, and persist a new entity
    ///
    /// Creation timestamps are set here, overwriting anything the caller
    /// supplied. Returns the stamped entity as stored.
    ///
    /// # Errors
    ///
    /// `BadRequest` for a body of the wrong kind, `Conflict` when the
    /// identity already exists, `Internal` for any other store failure.
    pub fn create(&self, entity: AnyEntity) -> ApiResult<T> {
        let mut entity = Self::extract(entity)?;
        entity.metadata_mut().stamp_create();
        if let Err(err) = self.dao.create(&entity) {
            return Err(convert::classify_create(err, T::KIND));
        }
        Ok(entity)
    }

    /// Validate and persist a replacement for an existing entity
    ///
    /// The request path is authoritative: the body's name must match, and
    /// its project must be empty (adopted from the path) or equal to it.
    /// `created_at` is carried forward from the stored version; `updated_at`
    /// is set to now.
    ///
    /// # Errors
    ///
    /// `BadRequest` for kind or identity mismatches, `NotFound` when no
    /// entity is stored under the path identity, `Internal` for any other
    /// store failure.
    pub fn update(&self, entity: AnyEntity, parameters: &Parameters) -> ApiResult<T> {
        let mut entity = Self::extract(entity)?;
        if entity.metadata().name != parameters.name {
            debug!(
                kind = %T::KIND,
                body_name = %entity.metadata().name,
                path_name = %parameters.name,
                "rejecting update with mismatched name"
            );
            return Err(ApiError::BadRequest(
                "metadata.name and the name in the request path don't match".to_string(),
            ));
        }
        if entity.metadata().project.is_empty() {
            entity.metadata_mut().project = parameters.project.clone();
        } else if entity.metadata().project != parameters.project {
            debug!(
                kind = %T::KIND,
                body_project = %entity.metadata().project,
                path_project = %parameters.project,
                "rejecting update with mismatched project"
            );
            return Err(ApiError::BadRequest(
                "metadata.project and the project in the request path don't match".to_string(),
            ));
        }
        // Fetch the stored version to carry its immutable fields forward.
        let previous = self
            .dao
            .get(&parameters.project, &parameters.name)
            .map_err(|err| convert::classify_read(err, T::KIND, "update"))?;
        entity.metadata_mut().carry_forward(previous.metadata());
        if let Err(err) = self.dao.update(&entity) {
            return Err(convert::classify_other(err, T::KIND, "update"));
        }
        Ok(entity)
    }

    /// Fetch the entity stored under the path identity
    ///
    /// # Errors
    ///
    /// `NotFound` when no such entity is stored, `Internal` for any other
    /// store failure.
    pub fn get(&self, parameters: &Parameters) -> ApiResult<T> {
        self.dao
            .get(&parameters.project, &parameters.name)
            .map_err(|err| convert::classify_read(err, T::KIND, "get"))
    }

    /// Remove the entity stored under the path identity
    ///
    /// # Errors
    ///
    /// `NotFound` when no such entity is stored, `Internal` for any other
    /// store failure.
    pub fn delete(&self, parameters: &Parameters) -> ApiResult<()> {
        self.dao
            .delete(&parameters.project, &parameters.name)
            .map_err(|err| convert::classify_read(err, T::KIND, "delete"))
    }

    /// List stored entities matching `query`
    ///
    /// The query is passed through to the store unmodified. `parameters` is
    /// accepted for interface uniformity and unused; any scoping is encoded
    /// into the query by the caller.
    ///
    /// # Errors
    ///
    /// `Internal` for any store failure.
    pub fn list(&self, query: &Query, _parameters: &Parameters) -> ApiResult<Vec<T>> {
        self.dao
            .list(query)
            .map_err(|err| convert::classify_other(err, T::KIND, "list"))
    }
}
