//! # conduct-config
//!
//! Layered configuration loading for conduct using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CONDUCT_*` prefix, `__` as separator)
//! 2. Project-level `.conduct/config.toml`
//! 3. User-level `~/.config/conduct/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CONDUCT_DATABASE__PATH` -> `database.path`,
//! `CONDUCT_REPORT__DEFAULT_LIMIT` -> `report.default_limit`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use conduct_config::ConductConfig;
//!
//! let config = ConductConfig::load_with_dotenv().expect("config");
//! println!("records live in {}", config.database.effective_path());
//! ```

mod database;
mod error;
mod report;

pub use database::{DatabaseConfig, MEMORY_PATH};
pub use error::ConfigError;
pub use report::ReportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding project-local state and configuration.
pub const PROJECT_DIR: &str = ".conduct";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConductConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl ConductConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source is malformed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source is malformed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = Path::new(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("CONDUCT_").split("__"))
    }

    /// Replace the database path, e.g. from a `--db` command-line flag.
    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database.path = path.into();
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() && !self.database.in_memory {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.report.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "report.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("conduct").join("config.toml"))
    }
}
