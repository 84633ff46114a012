//! Resource kinds, the generic resource trait, and the wire envelope
//!
//! The lifecycle service is generic over [`Resource`], the trait every
//! concrete kind implements. The wire representation, however, is weakly
//! typed: a decoded request body is an [`AnyEntity`], a serde enum tagged by
//! `kind`. Each service instance extracts its own kind from the envelope and
//! rejects everything else with a bad-request error, so a body claiming the
//! wrong kind never reaches the store.
//!
//! Two kinds are built in: [`Folder`] and [`AlertRule`]. Their `spec` fields
//! are opaque to the lifecycle layer; only [`Metadata`] is interpreted.

use crate::metadata::Metadata;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Closed enumeration of resource kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// A folder grouping other resources
    Folder,
    /// An alerting rule
    AlertRule,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Folder => write!(f, "Folder"),
            Kind::AlertRule => write!(f, "AlertRule"),
        }
    }
}

/// A resource kind the lifecycle service can manage
///
/// Implementors carry a [`Metadata`] block plus kind-specific fields the
/// service never interprets. The associated `KIND` is the tag checked at the
/// wire boundary.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The kind tag for this resource type
    const KIND: Kind;

    /// Shared metadata block
    fn metadata(&self) -> &Metadata;

    /// Mutable access to the metadata block, for stamping
    fn metadata_mut(&mut self) -> &mut Metadata;

    /// Extract this kind from the wire envelope
    ///
    /// # Errors
    ///
    /// Returns the envelope's actual kind when it does not match `KIND`.
    fn from_any(entity: AnyEntity) -> Result<Self, Kind>;

    /// Wrap this resource back into the wire envelope
    fn into_any(self) -> AnyEntity;
}

/// The weakly-typed wire envelope
///
/// Serialized form is internally tagged:
/// `{"kind": "Folder", "metadata": {...}, "spec": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AnyEntity {
    /// A folder body
    Folder(Folder),
    /// An alerting rule body
    AlertRule(AlertRule),
}

impl AnyEntity {
    /// Kind tag carried by this envelope
    pub fn kind(&self) -> Kind {
        match self {
            AnyEntity::Folder(_) => Kind::Folder,
            AnyEntity::AlertRule(_) => Kind::AlertRule,
        }
    }

    /// Metadata block of the wrapped entity
    pub fn metadata(&self) -> &Metadata {
        match self {
            AnyEntity::Folder(folder) => &folder.metadata,
            AnyEntity::AlertRule(rule) => &rule.metadata,
        }
    }
}

/// A folder resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Identity and timestamps
    pub metadata: Metadata,
    /// Kind-specific fields, opaque to the lifecycle layer
    #[serde(default)]
    pub spec: FolderSpec,
}

/// Business fields of a folder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolderSpec {
    /// Optional display name
    pub display: Option<String>,
    /// Optional free-form description
    pub description: Option<String>,
}

impl Folder {
    /// Build a folder with the given identity and an empty spec
    pub fn new(project: &str, name: &str) -> Self {
        Folder {
            metadata: Metadata::new(project, name),
            spec: FolderSpec::default(),
        }
    }
}

impl Resource for Folder {
    const KIND: Kind = Kind::Folder;

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    fn from_any(entity: AnyEntity) -> Result<Self, Kind> {
        match entity {
            AnyEntity::Folder(folder) => Ok(folder),
            other => Err(other.kind()),
        }
    }

    fn into_any(self) -> AnyEntity {
        AnyEntity::Folder(self)
    }
}

/// An alerting rule resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    /// Identity and timestamps
    pub metadata: Metadata,
    /// Kind-specific fields, opaque to the lifecycle layer
    pub spec: AlertRuleSpec,
}

/// Business fields of an alerting rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertRuleSpec {
    /// Rule expression, evaluated by a system out of scope here
    pub expr: String,
    /// Optional minimum firing duration, e.g. "5m"
    pub for_duration: Option<String>,
    /// Labels attached to the rule
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl AlertRule {
    /// Build a rule with the given identity and expression
    pub fn new(project: &str, name: &str, expr: &str) -> Self {
        AlertRule {
            metadata: Metadata::new(project, name),
            spec: AlertRuleSpec {
                expr: expr.to_string(),
                ..AlertRuleSpec::default()
            },
        }
    }
}

impl Resource for AlertRule {
    const KIND: Kind = Kind::AlertRule;

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    fn from_any(entity: AnyEntity) -> Result<Self, Kind> {
        match entity {
            AnyEntity::AlertRule(rule) => Ok(rule),
            other => Err(other.kind()),
        }
    }

    fn into_any(self) -> AnyEntity {
        AnyEntity::AlertRule(self)
    }
}
