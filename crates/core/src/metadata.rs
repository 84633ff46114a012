//! Metadata and request identity types
//!
//! Every stored resource carries a [`Metadata`] block: its name, an optional
//! project scope, and creation/update timestamps. The timestamp rules are the
//! core invariants of the lifecycle:
//!
//! - `created_at` is set exactly once, at creation, and never changes
//! - `updated_at` is set on every successful create or update and is always
//!   `>= created_at`
//! - `name` and a non-empty `project` are immutable after creation
//!
//! The stamping operations here are pure with respect to the store; they only
//! touch the in-memory entity before persistence.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

fn unix_epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// Identity and timestamp block common to all resources
///
/// An empty `project` means the resource is global/unscoped; the lifecycle
/// service populates it from the request path at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Resource name, unique within its project. Immutable after creation.
    pub name: String,
    /// Project scope; empty means unscoped. Immutable once non-empty.
    #[serde(default)]
    pub project: String,
    /// Creation time (UTC). Set once by the service, never by the caller.
    #[serde(default = "unix_epoch")]
    pub created_at: DateTime<Utc>,
    /// Last update time (UTC). Set by the service on every write.
    #[serde(default = "unix_epoch")]
    pub updated_at: DateTime<Utc>,
}

impl Metadata {
    /// Create metadata for a named resource in a project
    ///
    /// Timestamps start at the Unix epoch; they are stamped by the lifecycle
    /// service before persistence, not by the caller.
    pub fn new(project: &str, name: &str) -> Self {
        Metadata {
            name: name.to_string(),
            project: project.to_string(),
            created_at: unix_epoch(),
            updated_at: unix_epoch(),
        }
    }

    /// Stamp this metadata for creation
    ///
    /// Sets `created_at = updated_at = now (UTC)`, unconditionally
    /// overwriting any caller-supplied timestamps.
    pub fn stamp_create(&mut self) {
        let now = Utc::now();
        self.created_at = now;
        self.updated_at = now;
    }

    /// Carry immutable fields forward from the previously stored version
    ///
    /// Copies `created_at` from `previous` and sets `updated_at` to now.
    /// When the clock has not advanced past `previous.updated_at`, the new
    /// `updated_at` is bumped one nanosecond past it so successive updates
    /// are strictly ordered even at coarse clock resolution.
    pub fn carry_forward(&mut self, previous: &Metadata) {
        self.created_at = previous.created_at;
        let now = Utc::now();
        self.updated_at = if now > previous.updated_at {
            now
        } else {
            previous.updated_at + Duration::nanoseconds(1)
        };
    }
}

/// Path-derived identity for a single request
///
/// Authoritative over any identity embedded in the entity body: the
/// lifecycle service rejects bodies that disagree with these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    /// Project scope from the request path
    pub project: String,
    /// Resource name from the request path
    pub name: String,
}

impl Parameters {
    /// Build parameters from path segments
    pub fn new(project: &str, name: &str) -> Self {
        Parameters {
            project: project.to_string(),
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_metadata_starts_at_epoch() {
        let meta = Metadata::new("team-a", "dash1");
        assert_eq!(meta.project, "team-a");
        assert_eq!(meta.name, "dash1");
        assert_eq!(meta.created_at, DateTime::UNIX_EPOCH);
        assert_eq!(meta.updated_at, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_stamp_create_sets_both_timestamps() {
        let before = Utc::now();
        let mut meta = Metadata::new("team-a", "dash1");
        meta.stamp_create();
        let after = Utc::now();

        assert_eq!(meta.created_at, meta.updated_at);
        assert!(meta.created_at >= before);
        assert!(meta.created_at <= after);
    }

    #[test]
    fn test_stamp_create_overwrites_caller_timestamps() {
        let mut meta = Metadata::new("team-a", "dash1");
        meta.created_at = Utc::now() + Duration::days(365);
        meta.updated_at = meta.created_at;
        meta.stamp_create();
        assert!(meta.created_at <= Utc::now());
    }

    #[test]
    fn test_carry_forward_preserves_created_at() {
        let mut previous = Metadata::new("team-a", "dash1");
        previous.stamp_create();

        let mut next = Metadata::new("team-a", "dash1");
        next.carry_forward(&previous);

        assert_eq!(next.created_at, previous.created_at);
        assert!(next.updated_at > previous.updated_at);
    }

    #[test]
    fn test_carry_forward_is_strictly_monotonic() {
        let mut meta = Metadata::new("team-a", "dash1");
        meta.stamp_create();

        // Repeated updates faster than clock resolution must still order.
        for _ in 0..100 {
            let previous = meta.clone();
            meta.carry_forward(&previous);
            assert!(meta.updated_at > previous.updated_at);
            assert_eq!(meta.created_at, previous.created_at);
        }
    }

    #[test]
    fn test_carry_forward_against_future_previous() {
        let mut previous = Metadata::new("team-a", "dash1");
        previous.stamp_create();
        previous.updated_at = Utc::now() + Duration::hours(1);

        let mut next = Metadata::new("team-a", "dash1");
        next.carry_forward(&previous);
        assert!(next.updated_at > previous.updated_at);
    }

    #[test]
    fn test_metadata_serde_defaults() {
        // A caller-supplied body can omit project and timestamps.
        let meta: Metadata = serde_json::from_str(r#"{"name":"dash1"}"#).unwrap();
        assert_eq!(meta.name, "dash1");
        assert!(meta.project.is_empty());
        assert_eq!(meta.created_at, DateTime::UNIX_EPOCH);
    }

    proptest! {
        #[test]
        fn prop_carry_forward_preserves_created_at(secs in 0i64..4_000_000_000i64) {
            let mut previous = Metadata::new("p", "n");
            previous.created_at = DateTime::from_timestamp(secs, 0).unwrap();
            previous.updated_at = previous.created_at;

            let mut next = Metadata::new("p", "n");
            next.carry_forward(&previous);

            prop_assert_eq!(next.created_at, previous.created_at);
            prop_assert!(next.updated_at > previous.updated_at);
        }
    }
}
