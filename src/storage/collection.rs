//! Keyed, insertion-ordered record collection
//!
//! Records are stored once and never updated or removed. Each collection has
//! its own lock; every operation takes it exactly once.

use std::collections::HashSet;
use std::sync::RwLock;

use uuid::Uuid;

use super::errors::{StorageError, StorageResult};

struct Records<T> {
    ids: HashSet<String>,
    rows: Vec<T>,
}

pub(crate) struct Collection<T> {
    name: &'static str,
    inner: RwLock<Records<T>>,
}

impl<T: Clone> Collection<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: RwLock::new(Records {
                ids: HashSet::new(),
                rows: Vec::new(),
            }),
        }
    }

    /// Inserts a record built around a freshly generated id.
    ///
    /// The id is guaranteed unused in this collection.
    pub fn insert_with(&self, build: impl FnOnce(String) -> T) -> StorageResult<T> {
        let mut records = self
            .inner
            .write()
            .map_err(|_| StorageError::LockPoisoned(self.name))?;

        let mut id = Uuid::new_v4().to_string();
        while records.ids.contains(&id) {
            id = Uuid::new_v4().to_string();
        }

        let record = build(id.clone());
        records.rows.push(record.clone());
        records.ids.insert(id);

        Ok(record)
    }

    /// Records matching `keep`, in insertion order
    pub fn filtered(&self, keep: impl Fn(&T) -> bool) -> StorageResult<Vec<T>> {
        let records = self
            .inner
            .read()
            .map_err(|_| StorageError::LockPoisoned(self.name))?;
        Ok(records.rows.iter().filter(|r| keep(r)).cloned().collect())
    }

    pub fn all(&self) -> StorageResult<Vec<T>> {
        self.filtered(|_| true)
    }

    /// All records sorted by `key` descending. Equal keys put the most
    /// recently inserted record first.
    pub fn newest_first<K: Ord>(&self, key: impl Fn(&T) -> K) -> StorageResult<Vec<T>> {
        let mut rows = self.all()?;
        rows.reverse();
        rows.sort_by(|a, b| key(b).cmp(&key(a)));
        Ok(rows)
    }

    pub fn len(&self) -> StorageResult<usize> {
        let records = self
            .inner
            .read()
            .map_err(|_| StorageError::LockPoisoned(self.name))?;
        Ok(records.rows.len())
    }

    #[cfg(test)]
    pub fn modify_each(&self, f: impl FnMut(&mut T)) {
        self.inner.write().unwrap().rows.iter_mut().for_each(f);
    }
}
