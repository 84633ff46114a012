//! MemoryDao: BTreeMap-backed reference implementation of the DAO contract
//!
//! # Design Notes
//!
//! - **JSON encoding at rest**: entities are stored as `serde_json::Value`,
//!   so the store exercises the same codec path a remote KV backend would.
//! - **Atomic create**: existence check and insert happen under a single
//!   write lock; concurrent creates of one identity cannot both succeed.
//! - **Blind update**: `update` is an unconditional overwrite. Last writer
//!   wins; the lifecycle layer knowingly accepts this race.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use parking_lot::RwLock;

use pergola_core::{Query, Resource, ResourceDao, StoreError, StoreResult};

/// Ordered storage key: project first, then name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct StoreKey {
    project: String,
    name: String,
}

impl StoreKey {
    fn new(project: &str, name: &str) -> Self {
        StoreKey {
            project: project.to_string(),
            name: name.to_string(),
        }
    }
}

/// In-memory DAO backend for one resource kind
///
/// Thread-safe through `parking_lot::RwLock`; a single instance can be
/// shared across threads behind an `Arc`.
#[derive(Debug)]
pub struct MemoryDao<T> {
    data: RwLock<BTreeMap<StoreKey, serde_json::Value>>,
    _kind: PhantomData<fn() -> T>,
}

impl<T> Default for MemoryDao<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryDao<T> {
    /// Create a new empty store
    pub fn new() -> Self {
        MemoryDao {
            data: RwLock::new(BTreeMap::new()),
            _kind: PhantomData,
        }
    }

    /// Number of stored entities
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store holds no entities
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl<T: Resource> MemoryDao<T> {
    fn key_for(entity: &T) -> StoreKey {
        let meta = entity.metadata();
        StoreKey::new(&meta.project, &meta.name)
    }

    fn encode(entity: &T) -> StoreResult<serde_json::Value> {
        serde_json::to_value(entity).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    fn decode(value: serde_json::Value) -> StoreResult<T> {
        serde_json::from_value(value).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

impl<T: Resource> ResourceDao<T> for MemoryDao<T> {
    fn create(&self, entity: &T) -> StoreResult<()> {
        let key = Self::key_for(entity);
        let encoded = Self::encode(entity)?;
        let mut data = self.data.write();
        if data.contains_key(&key) {
            return Err(StoreError::AlreadyExists {
                project: key.project,
                name: key.name,
            });
        }
        data.insert(key, encoded);
        Ok(())
    }

    fn update(&self, entity: &T) -> StoreResult<()> {
        let key = Self::key_for(entity);
        let encoded = Self::encode(entity)?;
        self.data.write().insert(key, encoded);
        Ok(())
    }

    fn get(&self, project: &str, name: &str) -> StoreResult<T> {
        let key = StoreKey::new(project, name);
        let value = self.data.read().get(&key).cloned().ok_or_else(|| {
            StoreError::NotFound {
                project: project.to_string(),
                name: name.to_string(),
            }
        })?;
        Self::decode(value)
    }

    fn delete(&self, project: &str, name: &str) -> StoreResult<()> {
        let key = StoreKey::new(project, name);
        match self.data.write().remove(&key) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                project: project.to_string(),
                name: name.to_string(),
            }),
        }
    }

    fn list(&self, query: &Query) -> StoreResult<Vec<T>> {
        let data = self.data.read();
        let mut results = Vec::new();
        for (key, value) in data.iter() {
            if let Some(project) = &query.project {
                if &key.project != project {
                    continue;
                }
            }
            if let Some(prefix) = &query.name_prefix {
                if !key.name.starts_with(prefix.as_str()) {
                    continue;
                }
            }
            results.push(Self::decode(value.clone())?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_core::Folder;

    fn folder(project: &str, name: &str) -> Folder {
        let mut folder = Folder::new(project, name);
        folder.metadata.stamp_create();
        folder
    }

    #[test]
    fn test_create_then_get() {
        let dao = MemoryDao::new();
        let stored = folder("team-a", "dash1");
        dao.create(&stored).unwrap();

        let fetched = dao.get("team-a", "dash1").unwrap();
        assert_eq!(fetched, stored);
    }

    #[test]
    fn test_create_conflict_on_same_identity() {
        let dao = MemoryDao::new();
        dao.create(&folder("team-a", "dash1")).unwrap();

        let err = dao.create(&folder("team-a", "dash1")).unwrap_err();
        assert_eq!(
            err,
            StoreError::AlreadyExists {
                project: "team-a".to_string(),
                name: "dash1".to_string(),
            }
        );
        assert_eq!(dao.len(), 1);
    }

    #[test]
    fn test_same_name_in_different_projects() {
        let dao = MemoryDao::new();
        dao.create(&folder("team-a", "dash1")).unwrap();
        dao.create(&folder("team-b", "dash1")).unwrap();
        assert_eq!(dao.len(), 2);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let dao: MemoryDao<Folder> = MemoryDao::new();
        let err = dao.get("team-a", "missing").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_update_is_blind_overwrite() {
        let dao = MemoryDao::new();
        dao.create(&folder("team-a", "dash1")).unwrap();

        let mut replacement = folder("team-a", "dash1");
        replacement.spec.display = Some("Dashboards".to_string());
        dao.update(&replacement).unwrap();

        let fetched = dao.get("team-a", "dash1").unwrap();
        assert_eq!(fetched.spec.display.as_deref(), Some("Dashboards"));
    }

    #[test]
    fn test_delete_removes_entity() {
        let dao = MemoryDao::new();
        dao.create(&folder("team-a", "dash1")).unwrap();
        dao.delete("team-a", "dash1").unwrap();

        assert!(dao.is_empty());
        let err = dao.delete("team-a", "dash1").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_list_filters_by_project_and_prefix() {
        let dao = MemoryDao::new();
        dao.create(&folder("team-a", "dash1")).unwrap();
        dao.create(&folder("team-a", "dash2")).unwrap();
        dao.create(&folder("team-a", "ops")).unwrap();
        dao.create(&folder("team-b", "dash1")).unwrap();

        let all = dao.list(&Query::all()).unwrap();
        assert_eq!(all.len(), 4);

        let team_a = dao.list(&Query::in_project("team-a")).unwrap();
        assert_eq!(team_a.len(), 3);

        let dashes = dao
            .list(&Query::in_project("team-a").with_name_prefix("dash"))
            .unwrap();
        assert_eq!(dashes.len(), 2);
        assert!(dashes.iter().all(|f| f.metadata.name.starts_with("dash")));
    }

    #[test]
    fn test_list_is_ordered_by_project_then_name() {
        let dao = MemoryDao::new();
        dao.create(&folder("team-b", "a")).unwrap();
        dao.create(&folder("team-a", "z")).unwrap();
        dao.create(&folder("team-a", "a")).unwrap();

        let all = dao.list(&Query::all()).unwrap();
        let identities: Vec<(String, String)> = all
            .iter()
            .map(|f| (f.metadata.project.clone(), f.metadata.name.clone()))
            .collect();
        assert_eq!(
            identities,
            vec![
                ("team-a".to_string(), "a".to_string()),
                ("team-a".to_string(), "z".to_string()),
                ("team-b".to_string(), "a".to_string()),
            ]
        );
    }
}
