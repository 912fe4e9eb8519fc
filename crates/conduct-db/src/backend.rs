//! Store selection from configuration.

use conduct_config::DatabaseConfig;
use conduct_core::enums::Kind;
use conduct_core::record::Payload;

use crate::error::StoreError;
use crate::memory::MemoryStore;
use crate::sql::SqlStore;
use crate::store::{RecordStore, UpsertOutcome};

/// Either backend, chosen at runtime.
pub enum Backend {
    Sql(SqlStore),
    Memory(MemoryStore),
}

impl Backend {
    /// `in_memory` selects the map store; otherwise the libSQL file at
    /// `path` is opened (or created).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, StoreError> {
        if config.in_memory {
            tracing::debug!("using in-memory record store");
            return Ok(Self::Memory(MemoryStore::new()));
        }
        Ok(Self::Sql(SqlStore::open_local(&config.path).await?))
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sql(_) => "libsql",
            Self::Memory(_) => "memory",
        }
    }
}

impl RecordStore for Backend {
    async fn list(&self, kind: Kind) -> Result<Vec<Payload>, StoreError> {
        match self {
            Self::Sql(store) => store.list(kind).await,
            Self::Memory(store) => store.list(kind).await,
        }
    }

    async fn get(&self, kind: Kind, id: &str) -> Result<Option<Payload>, StoreError> {
        match self {
            Self::Sql(store) => store.get(kind, id).await,
            Self::Memory(store) => store.get(kind, id).await,
        }
    }

    async fn upsert(&self, kind: Kind, payload: Payload) -> Result<UpsertOutcome, StoreError> {
        match self {
            Self::Sql(store) => store.upsert(kind, payload).await,
            Self::Memory(store) => store.upsert(kind, payload).await,
        }
    }

    async fn delete(&self, kind: Kind, id: &str) -> Result<(), StoreError> {
        match self {
            Self::Sql(store) => store.delete(kind, id).await,
            Self::Memory(store) => store.delete(kind, id).await,
        }
    }
}
