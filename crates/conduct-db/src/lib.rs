//! # conduct-db
//!
//! Record storage for conduct.
//!
//! A [`RecordStore`] persists the four whitelisted record kinds as
//! dynamic-shape JSON objects keyed by `id`. Two backends implement it:
//! [`SqlStore`] over a local libSQL database (libSQL 0.9.29, a `SQLite` fork)
//! and [`MemoryStore`] for tests and throwaway sessions.
//!
//! On top of the generic store sit the [`api`] request/response envelope,
//! the typed [`Registry`] service, and demo [`seed`] data.

pub mod api;
pub mod backend;
pub mod coerce;
pub mod error;
pub mod memory;
mod migrations;
pub mod registry;
pub mod repos;
pub mod seed;
pub mod sql;
pub mod store;
mod test_support;

pub use backend::Backend;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use registry::{Corruption, Registry};
pub use sql::SqlStore;
pub use store::{RecordStore, UpsertOutcome, WriteStatus};
