//! # Farmer Registry Store
//!
//! Holds registered [`FarmerRecord`]s, newest first. A record is either absent
//! or present: it becomes present only through a successful
//! [`register`](FarmerRegistry::register) and absent only through
//! [`remove`](FarmerRegistry::remove). Records are never edited in place.
//!
//! ## Identifiers
//!
//! Ids are millisecond timestamps, bumped when needed so that every id is
//! strictly greater than any id this registry has issued or loaded:
//! `next = max(now_millis, last_issued + 1)`. Two registrations inside the same
//! millisecond, or a clock that steps backwards, still yield increasing ids.
//!
//! ## Confirmation
//!
//! Removal in the UI requires the user to confirm first. That is a
//! presentation contract: the store removes whatever it is asked to, and
//! callers use [`get`](FarmerRegistry::get) to preview the record.

use crate::events::{Notifier, StoreEvent};
use crate::model::{FarmerId, FarmerInput, FarmerRecord};
use crate::store::backend::StorageBackend;
use crate::store::collection::PersistedCollection;
use crate::store::FARMERS_KEY;
use crate::validation::{validate, FieldErrors};
use chrono::{DateTime, Utc};

pub struct FarmerRegistry<B: StorageBackend> {
    records: PersistedCollection<FarmerRecord, B>,
    last_issued: u64,
    notifier: Notifier,
}

impl<B: StorageBackend> FarmerRegistry<B> {
    /// Hydrate the registry from storage (empty if nothing usable is stored).
    pub fn load(backend: B) -> Self {
        let records: PersistedCollection<FarmerRecord, B> =
            PersistedCollection::load(backend, FARMERS_KEY);
        let last_issued = records.items().iter().map(|r| r.id.0).max().unwrap_or(0);
        Self {
            records,
            last_issued,
            notifier: Notifier::new(),
        }
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.notifier.subscribe(listener);
    }

    /// Records, newest first.
    pub fn list(&self) -> &[FarmerRecord] {
        self.records.items()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, id: FarmerId) -> Option<&FarmerRecord> {
        self.list().iter().find(|r| r.id == id)
    }

    /// Validates `input` and, if valid, prepends a new record.
    ///
    /// On validation failure nothing changes and every field error is returned.
    pub fn register(&mut self, input: &FarmerInput) -> Result<FarmerRecord, FieldErrors> {
        self.register_at(input, Utc::now())
    }

    /// [`register`](Self::register) with an explicit clock reading.
    pub fn register_at(
        &mut self,
        input: &FarmerInput,
        now: DateTime<Utc>,
    ) -> Result<FarmerRecord, FieldErrors> {
        let errors = validate(input);
        if !errors.is_empty() {
            return Err(errors);
        }

        let record = FarmerRecord::from_input(self.next_id(now), input, now);

        let mut next = Vec::with_capacity(self.count() + 1);
        next.push(record.clone());
        next.extend_from_slice(self.list());
        self.commit(next);

        tracing::debug!(id = %record.id, "registered farmer");
        Ok(record)
    }

    /// Removes the record with `id`. Absent ids are a no-op returning `None`.
    pub fn remove(&mut self, id: FarmerId) -> Option<FarmerRecord> {
        let removed = self.get(id).cloned()?;
        let next = self.list().iter().filter(|r| r.id != id).cloned().collect();
        self.commit(next);
        tracing::debug!(%id, "removed farmer");
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.notifier.emit(StoreEvent::FarmersChanged { count: 0 });
    }

    fn next_id(&mut self, now: DateTime<Utc>) -> FarmerId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last_issued.saturating_add(1));
        self.last_issued = id;
        FarmerId(id)
    }

    fn commit(&mut self, next: Vec<FarmerRecord>) {
        self.records.replace(next);
        let count = self.count();
        self.notifier.emit(StoreEvent::FarmersChanged { count });
    }
}
