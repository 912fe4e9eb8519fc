use std::path::Path;

use anyhow::Context;
use conduct_config::ConductConfig;
use conduct_db::{Backend, Registry};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub registry: Registry<Backend>,
    pub config: ConductConfig,
}

impl AppContext {
    /// Open the configured record store, creating the database directory
    /// on first use.
    pub async fn init(config: ConductConfig) -> anyhow::Result<Self> {
        if !config.database.is_memory() {
            ensure_parent_dir(Path::new(&config.database.path))?;
        }

        let backend = Backend::open(&config.database)
            .await
            .with_context(|| {
                format!(
                    "failed to open record store at {}",
                    config.database.effective_path()
                )
            })?;
        tracing::debug!(
            backend = backend.name(),
            path = config.database.effective_path(),
            "record store ready"
        );

        Ok(Self {
            registry: Registry::new(backend),
            config,
        })
    }
}

fn ensure_parent_dir(db_path: &Path) -> anyhow::Result<()> {
    let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if !parent.is_dir() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}
