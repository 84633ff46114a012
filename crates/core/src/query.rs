//! Opaque list query
//!
//! The lifecycle service passes a [`Query`] through to the store unmodified;
//! only the DAO implementation interprets it. Scoping a list to a project is
//! the caller's job, encoded here rather than in `Parameters`.

use serde::{Deserialize, Serialize};

/// Filter for list operations, interpreted by the store only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Restrict results to this exact project scope
    pub project: Option<String>,
    /// Restrict results to names starting with this prefix
    pub name_prefix: Option<String>,
}

impl Query {
    /// Query matching every stored entity
    pub fn all() -> Self {
        Query::default()
    }

    /// Query scoped to a single project
    pub fn in_project(project: &str) -> Self {
        Query {
            project: Some(project.to_string()),
            name_prefix: None,
        }
    }

    /// Restrict this query to names starting with `prefix`
    #[must_use]
    pub fn with_name_prefix(mut self, prefix: &str) -> Self {
        self.name_prefix = Some(prefix.to_string());
        self
    }
}
