use super::backend::StorageBackend;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// An ordered sequence of records mirrored to one storage key.
///
/// The collection exclusively owns its records. Every change goes through
/// [`replace`](Self::replace), which rewrites the whole value; there are no
/// partial updates.
pub struct PersistedCollection<T, B: StorageBackend> {
    key: &'static str,
    items: Vec<T>,
    backend: B,
}

impl<T, B> PersistedCollection<T, B>
where
    T: Serialize + DeserializeOwned,
    B: StorageBackend,
{
    /// Hydrate from `key`. Never fails: unreadable or malformed data is logged
    /// and treated as an empty collection.
    pub fn load(backend: B, key: &'static str) -> Self {
        let items = match backend.read(key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(items) => {
                    tracing::debug!(key, count = items.len(), "loaded persisted collection");
                    items
                }
                Err(e) => {
                    tracing::warn!(
                        key,
                        error = %e,
                        "failed to parse persisted collection, starting empty"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(
                    key,
                    error = %e,
                    "failed to read persisted collection, starting empty"
                );
                Vec::new()
            }
        };

        Self {
            key,
            items,
            backend,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Swap in `items` and write the whole sequence back.
    ///
    /// The in-memory state always reflects `items`, even when the write fails;
    /// a failed write only means a later reload may not see the change.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.persist();
    }

    /// Empty the collection and drop its key from storage.
    pub fn clear(&mut self) {
        self.items.clear();
        if let Err(e) = self.backend.remove(self.key) {
            tracing::warn!(key = self.key, error = %e, "failed to remove collection from storage");
        }
    }

    fn persist(&self) {
        let raw = match serde_json::to_string(&self.items) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = self.key, error = %e, "failed to serialize collection");
                return;
            }
        };

        match self.backend.write(self.key, &raw) {
            Ok(()) => {
                tracing::debug!(key = self.key, count = self.items.len(), "persisted collection")
            }
            Err(e) => {
                tracing::warn!(
                    key = self.key,
                    error = %e,
                    "failed to save collection, keeping in-memory state"
                )
            }
        }
    }
}
