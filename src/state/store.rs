use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::StoreError;

/// A record that can report its own identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

/// In-memory collection keyed by each record's identifier.
///
/// Entries are kept in a `BTreeMap`, so `list` always comes back in
/// ascending identifier order whatever order the records were created in.
/// Every operation takes the lock exactly once, which keeps
/// create/list/delete linearizable across concurrent requests.
#[derive(Debug)]
pub struct MemStore<T> {
    items: RwLock<BTreeMap<String, T>>,
}

impl<T> MemStore<T>
where
    T: Identified + Clone,
{
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
        }
    }

    /// Insert `item`, failing if its identifier already has a live entry.
    pub fn create(&self, item: T) -> Result<(), StoreError> {
        let mut items = self.write();

        match items.entry(item.id().to_string()) {
            Entry::Occupied(slot) => Err(StoreError::DuplicateId(slot.key().clone())),
            Entry::Vacant(slot) => {
                slot.insert(item);
                Ok(())
            }
        }
    }

    /// All live entries, sorted by identifier.
    pub fn list(&self) -> Vec<T> {
        self.read().values().cloned().collect()
    }

    /// Remove the entry for `id`. Deleting an unknown id is a no-op.
    pub fn delete(&self, id: &str) {
        if self.write().remove(id).is_none() {
            tracing::debug!("delete of unknown id {:?} ignored", id);
        }
    }

    /// Return number of stored entries.
    pub(crate) fn len(&self) -> usize {
        self.read().len()
    }

    // A poisoned lock still holds a consistent map: every mutation above is a
    // single map call.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, T>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, T>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for MemStore<T>
where
    T: Identified + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
