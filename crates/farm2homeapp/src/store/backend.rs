use crate::error::Result;

/// Abstract interface for raw key-value storage.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::collection::PersistedCollection`] handles the "what" (parsing,
/// recovery, logging).
pub trait StorageBackend {
    /// Read the raw value stored at `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value at `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value at `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
