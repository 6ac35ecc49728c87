//! In-memory assignment store.
//!
//! Stands in for a document store: an insertion-ordered map keyed by the
//! record identifier. The store is the sole arbiter of consistency between
//! concurrent requests to the same key; every operation takes the lock for
//! its full duration, so per-key reads and writes are atomic.

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use uuid::Uuid;

use crate::models::user_assignment::{NewUserAssignment, UserAssignment};
use crate::sort::SortSpec;

/// Cheaply cloneable handle to the shared assignment collection.
#[derive(Debug, Clone, Default)]
pub struct AssignmentStore {
    inner: Arc<RwLock<IndexMap<String, UserAssignment>>>,
}

impl AssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// List every record, in insertion order unless a sort is requested.
    pub fn find_all(&self, sort: Option<SortSpec>) -> Vec<UserAssignment> {
        let guard = self.inner.read().expect("assignment store lock poisoned");
        let mut records: Vec<UserAssignment> = guard.values().cloned().collect();
        drop(guard);
        if let Some(spec) = sort {
            spec.apply(&mut records);
        }
        records
    }

    pub fn find_by_id(&self, id: &str) -> Option<UserAssignment> {
        let guard = self.inner.read().expect("assignment store lock poisoned");
        guard.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        let guard = self.inner.read().expect("assignment store lock poisoned");
        guard.contains_key(id)
    }

    /// Persist a new record, assigning it a fresh UUID identifier.
    pub fn insert(&self, new: NewUserAssignment) -> UserAssignment {
        let record = new.with_id(Uuid::new_v4().to_string());
        let mut guard = self.inner.write().expect("assignment store lock poisoned");
        guard.insert(record.id.clone(), record.clone());
        record
    }

    /// Replace the record stored under `record.id`, returning the new state.
    ///
    /// Inserts if the key is absent; update handlers check existence first.
    pub fn save(&self, record: UserAssignment) -> UserAssignment {
        let mut guard = self.inner.write().expect("assignment store lock poisoned");
        guard.insert(record.id.clone(), record.clone());
        record
    }

    /// Remove the record under `id`. Returns whether anything was removed.
    pub fn delete_by_id(&self, id: &str) -> bool {
        let mut guard = self.inner.write().expect("assignment store lock poisoned");
        guard.shift_remove(id).is_some()
    }

    /// Empty the collection. Test setup uses this as an explicit reset.
    pub fn clear(&self) {
        let mut guard = self.inner.write().expect("assignment store lock poisoned");
        guard.clear();
    }

    pub fn len(&self) -> usize {
        let guard = self.inner.read().expect("assignment store lock poisoned");
        guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
