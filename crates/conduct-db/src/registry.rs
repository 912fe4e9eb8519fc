//! Typed service over a [`RecordStore`].
//!
//! `Registry` turns dynamic payloads into entity structs and back. The
//! per-kind operations live in `impl Registry` blocks under [`crate::repos`].

use conduct_core::enums::Kind;
use conduct_core::errors::CoreError;
use conduct_core::record::{Entity, Payload, Record};
use serde::Serialize;
use serde_json::Value;

use crate::error::StoreError;
use crate::store::{RecordStore, UpsertOutcome};

/// A stored record that does not decode into its entity shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Corruption {
    pub kind: Kind,
    pub id: String,
    pub reason: String,
}

pub struct Registry<S> {
    store: S,
}

impl<S: RecordStore> Registry<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Every record of `T`'s kind, decoded.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if any stored record does not fit `T`.
    pub async fn list_all<T: Entity>(&self) -> Result<Vec<T>, StoreError> {
        self.store
            .list(T::KIND)
            .await?
            .into_iter()
            .map(decode::<T>)
            .collect()
    }

    /// One record of `T`'s kind, decoded.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored record does not fit `T`.
    pub async fn find<T: Entity>(&self, id: &str) -> Result<Option<T>, StoreError> {
        self.store.get(T::KIND, id).await?.map(decode::<T>).transpose()
    }

    /// Write a complete entity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the entity cannot be encoded or written.
    pub async fn save<T: Entity>(&self, entity: &T) -> Result<UpsertOutcome, StoreError> {
        let payload = entity.to_payload()?;
        self.store.upsert(T::KIND, payload).await
    }

    /// Delete a record of `T`'s kind. Missing ids are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the delete fails.
    pub async fn remove<T: Entity>(&self, id: &str) -> Result<(), StoreError> {
        self.store.delete(T::KIND, id).await
    }

    /// Number of records in the child kind that reference `id`.
    ///
    /// Deletes never cascade; callers use this to warn before orphaning.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the child collection cannot be listed.
    pub async fn dependents(&self, kind: Kind, id: &str) -> Result<usize, StoreError> {
        let Some(child) = kind.child() else {
            return Ok(0);
        };
        let Some((_, link)) = child.parent_link() else {
            return Ok(0);
        };
        let count = self
            .store
            .list(child)
            .await?
            .iter()
            .filter(|payload| payload.get(link).and_then(Value::as_str) == Some(id))
            .count();
        Ok(count)
    }

    /// Decode every record of `kind` into a [`Record`] and collect those that
    /// fail, e.g. an incident whose status is not one of the known values.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the collection cannot be listed.
    pub async fn verify(&self, kind: Kind) -> Result<Vec<Corruption>, StoreError> {
        let mut found = Vec::new();
        for payload in self.store.list(kind).await? {
            let id = payload
                .get(Kind::PRIMARY_KEY)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            if let Err(err) = Record::from_payload(kind, payload) {
                found.push(Corruption {
                    kind,
                    id,
                    reason: err.to_string(),
                });
            }
        }
        if !found.is_empty() {
            tracing::warn!(%kind, count = found.len(), "found undecodable records");
        }
        Ok(found)
    }
}

fn decode<T: Entity>(payload: Payload) -> Result<T, StoreError> {
    let id = payload
        .get(Kind::PRIMARY_KEY)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    T::from_payload(payload).map_err(|err| match err {
        CoreError::InvalidRecord { kind, reason } => StoreError::Corrupt { kind, id, reason },
        other => StoreError::Core(other),
    })
}
