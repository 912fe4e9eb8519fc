//! In-process record store.
//!
//! Holds every collection in ordered maps behind a read/write lock. Used for
//! tests and for `database.in_memory` sessions; behaves exactly like
//! [`crate::sql::SqlStore`] at the [`RecordStore`] boundary.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use conduct_core::enums::Kind;
use conduct_core::record::Payload;

use crate::coerce;
use crate::error::StoreError;
use crate::store::{RecordStore, UpsertOutcome, WriteStatus};

type Collections = BTreeMap<Kind, BTreeMap<String, Payload>>;

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>, StoreError> {
        self.collections
            .read()
            .map_err(|_| StoreError::InvalidState("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, StoreError> {
        self.collections
            .write()
            .map_err(|_| StoreError::InvalidState("memory store lock poisoned".into()))
    }
}

impl RecordStore for MemoryStore {
    async fn list(&self, kind: Kind) -> Result<Vec<Payload>, StoreError> {
        let guard = self.read()?;
        Ok(guard
            .get(&kind)
            .map(|records| {
                records
                    .values()
                    .map(|stored| coerce::outbound(kind, stored.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get(&self, kind: Kind, id: &str) -> Result<Option<Payload>, StoreError> {
        let guard = self.read()?;
        Ok(guard
            .get(&kind)
            .and_then(|records| records.get(id))
            .map(|stored| coerce::outbound(kind, stored.clone())))
    }

    async fn upsert(&self, kind: Kind, payload: Payload) -> Result<UpsertOutcome, StoreError> {
        let (id, stored) = coerce::inbound(kind, payload)?;
        let mut guard = self.write()?;
        let records = guard.entry(kind).or_default();

        let status = match records.get_mut(&id) {
            Some(existing) => {
                existing.extend(stored);
                WriteStatus::Updated
            }
            None => {
                records.insert(id.clone(), stored);
                WriteStatus::Created
            }
        };
        drop(guard);

        tracing::debug!(%kind, %id, %status, "upserted record");
        Ok(UpsertOutcome { status, id })
    }

    async fn delete(&self, kind: Kind, id: &str) -> Result<(), StoreError> {
        let mut guard = self.write()?;
        let removed = guard
            .get_mut(&kind)
            .and_then(|records| records.remove(id))
            .is_some();
        drop(guard);

        tracing::debug!(%kind, id, removed, "deleted record");
        Ok(())
    }
}
