//! In-memory collection backed by a [`JsonFileStore`].
//!
//! The records behind the mutex are the only copy the process reads from.
//! Every mutation stages a copy, writes it to disk, and only then replaces
//! the in-memory records, all while the lock is held.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};

use crate::store::JsonFileStore;
use crate::StorageError;

pub struct Collection<T> {
    store: JsonFileStore,
    records: Mutex<Vec<T>>,
}

/// Exclusive access to a collection for a load-mutate-save cycle.
pub struct CollectionGuard<'a, T> {
    store: &'a JsonFileStore,
    records: MutexGuard<'a, Vec<T>>,
}

impl<T> Collection<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Load the collection from `path`.
    pub async fn open(path: &Path) -> Result<Self, StorageError> {
        let store = JsonFileStore::new(path);
        let records = store.load().await?;
        tracing::info!(path = %path.display(), count = records.len(), "Collection loaded");
        Ok(Self::with_records(store, records))
    }

    pub fn with_records(store: JsonFileStore, records: Vec<T>) -> Self {
        Self {
            store,
            records: Mutex::new(records),
        }
    }

    /// Run a read-only query against the current records.
    pub async fn read<R>(&self, query: impl FnOnce(&[T]) -> R) -> R {
        let records = self.records.lock().await;
        query(records.as_slice())
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }

    /// Take the collection lock. Hold it across every read that a
    /// subsequent [`CollectionGuard::commit`] depends on.
    pub async fn lock(&self) -> CollectionGuard<'_, T> {
        CollectionGuard {
            store: &self.store,
            records: self.records.lock().await,
        }
    }

    /// Apply `change` to a staged copy and persist it.
    ///
    /// If `change` fails nothing is written; if the write fails the
    /// in-memory records are left untouched.
    pub async fn mutate<R, E, F>(&self, change: F) -> Result<R, E>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, E>,
        E: From<StorageError>,
    {
        let mut guard = self.lock().await;
        let mut staged = guard.records().to_vec();
        let out = change(&mut staged)?;
        guard.commit(staged).await?;
        Ok(out)
    }
}

impl<T> CollectionGuard<'_, T>
where
    T: Serialize,
{
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Persist `staged` and make it the current record set.
    pub async fn commit(&mut self, staged: Vec<T>) -> Result<(), StorageError> {
        self.store.save_all(&staged).await?;
        *self.records = staged;
        Ok(())
    }
}
