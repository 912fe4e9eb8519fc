//! The record store contract shared by every backend.

use std::fmt;

use conduct_core::enums::Kind;
use conduct_core::record::Payload;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;

/// Whether an upsert inserted a new record or modified an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteStatus {
    Created,
    Updated,
}

impl WriteStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`RecordStore::upsert`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertOutcome {
    pub status: WriteStatus,
    pub id: String,
}

/// Persistence for the four whitelisted collections.
///
/// Records are dynamic-shape payloads keyed by their `id` field. Reads return
/// the outbound shape (see [`crate::coerce::outbound`]); writes accept any
/// subset of the kind's columns and merge it into the stored record.
///
/// Implementations must make each single-record write atomic. Concurrent
/// writers to the same record resolve as last-write-wins.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// Every record of `kind`, in unspecified order.
    async fn list(&self, kind: Kind) -> Result<Vec<Payload>, StoreError>;

    /// The record of `kind` with this id, if any.
    async fn get(&self, kind: Kind, id: &str) -> Result<Option<Payload>, StoreError>;

    /// Insert the payload if its id is new, otherwise overwrite exactly the
    /// fields it carries.
    async fn upsert(&self, kind: Kind, payload: Payload) -> Result<UpsertOutcome, StoreError>;

    /// Remove the record if present. Deleting a missing id succeeds.
    async fn delete(&self, kind: Kind, id: &str) -> Result<(), StoreError>;

    /// Upsert an arbitrary JSON value, rejecting anything but an object.
    async fn upsert_value(&self, kind: Kind, value: Value) -> Result<UpsertOutcome, StoreError> {
        match value {
            Value::Object(payload) => self.upsert(kind, payload).await,
            other => Err(StoreError::MalformedPayload(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

impl<S: RecordStore> RecordStore for &S {
    async fn list(&self, kind: Kind) -> Result<Vec<Payload>, StoreError> {
        (**self).list(kind).await
    }

    async fn get(&self, kind: Kind, id: &str) -> Result<Option<Payload>, StoreError> {
        (**self).get(kind, id).await
    }

    async fn upsert(&self, kind: Kind, payload: Payload) -> Result<UpsertOutcome, StoreError> {
        (**self).upsert(kind, payload).await
    }

    async fn delete(&self, kind: Kind, id: &str) -> Result<(), StoreError> {
        (**self).delete(kind, id).await
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
