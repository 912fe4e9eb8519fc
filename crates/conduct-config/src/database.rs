//! Record store location configuration.

use serde::{Deserialize, Serialize};

/// Special path understood by libSQL as a private in-memory database.
pub const MEMORY_PATH: &str = ":memory:";

fn default_path() -> String {
    String::from(".conduct/conduct.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path of the libSQL database file.
    #[serde(default = "default_path")]
    pub path: String,

    /// Keep all records in process memory instead of a file.
    #[serde(default)]
    pub in_memory: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            in_memory: false,
        }
    }
}

impl DatabaseConfig {
    /// The path to hand to the store, honoring `in_memory`.
    #[must_use]
    pub fn effective_path(&self) -> &str {
        if self.in_memory { MEMORY_PATH } else { &self.path }
    }

    #[must_use]
    pub fn is_memory(&self) -> bool {
        self.effective_path() == MEMORY_PATH
    }
}
