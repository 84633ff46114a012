//! Classification of store errors into the caller-facing taxonomy.
//!
//! Each operation classifies its store error exactly once, at the point of
//! the store call:
//!
//! - `create` is the only path that can see a key conflict,
//! - reads (`get`, the update pre-read, `delete`) are the only paths that
//!   map a missing key to `NotFound`,
//! - everything else becomes `Internal`, with the underlying cause emitted
//!   as a structured `tracing` event and never surfaced to the caller.
//!
//! `BadRequest` never originates here; it is raised by the service from
//! parameter/body mismatches before any store call.

use pergola_core::{ApiError, Kind, StoreError};
use tracing::{debug, error};

/// Record the cause of an unexpected store failure and hide it from callers.
fn internal(err: &StoreError, kind: Kind, op: &str) -> ApiError {
    error!(%kind, op, cause = %err, "store operation failed");
    ApiError::Internal
}

/// Classify a failure of the atomic create.
pub(crate) fn classify_create(err: StoreError, kind: Kind) -> ApiError {
    match err {
        StoreError::AlreadyExists { project, name } => {
            debug!(%kind, %project, %name, "create collided with an existing entity");
            ApiError::Conflict {
                kind,
                project,
                name,
            }
        }
        other => internal(&other, kind, "create"),
    }
}

/// Classify a failure of a read or delete keyed by (project, name).
pub(crate) fn classify_read(err: StoreError, kind: Kind, op: &str) -> ApiError {
    match err {
        StoreError::NotFound { project, name } => {
            debug!(%kind, op, %project, %name, "entity not found");
            ApiError::NotFound {
                kind,
                project,
                name,
            }
        }
        other => internal(&other, kind, op),
    }
}

/// Classify a failure of an unconditional write or list.
///
/// These operations carry no distinguishable store signal: any failure is
/// internal.
pub(crate) fn classify_other(err: StoreError, kind: Kind, op: &str) -> ApiError {
    internal(&err, kind, op)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_conflict_maps_to_conflict() {
        let err = StoreError::AlreadyExists {
            project: "team-a".to_string(),
            name: "dash1".to_string(),
        };
        assert_eq!(
            classify_create(err, Kind::Folder),
            ApiError::Conflict {
                kind: Kind::Folder,
                project: "team-a".to_string(),
                name: "dash1".to_string(),
            }
        );
    }

    #[test]
    fn test_create_backend_failure_maps_to_internal() {
        let err = StoreError::Backend("connection refused".to_string());
        assert_eq!(classify_create(err, Kind::Folder), ApiError::Internal);
    }

    #[test]
    fn test_read_not_found_maps_to_not_found() {
        let err = StoreError::NotFound {
            project: "team-a".to_string(),
            name: "dash1".to_string(),
        };
        assert_eq!(
            classify_read(err, Kind::AlertRule, "get"),
            ApiError::NotFound {
                kind: Kind::AlertRule,
                project: "team-a".to_string(),
                name: "dash1".to_string(),
            }
        );
    }

    #[test]
    fn test_read_serialization_failure_maps_to_internal() {
        let err = StoreError::Serialization("truncated value".to_string());
        assert_eq!(classify_read(err, Kind::Folder, "get"), ApiError::Internal);
    }

    #[test]
    fn test_unconditional_write_never_maps_to_conflict() {
        // The update write is blind: even an unexpected AlreadyExists from a
        // misbehaving backend is classified as internal.
        let err = StoreError::AlreadyExists {
            project: "team-a".to_string(),
            name: "dash1".to_string(),
        };
        assert_eq!(classify_other(err, Kind::Folder, "update"), ApiError::Internal);
    }
}
