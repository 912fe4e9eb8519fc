//! Report view defaults.

use serde::{Deserialize, Serialize};

/// Default number of rows shown by list and report commands.
const fn default_limit() -> u32 {
    50
}

const fn default_newest_first() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Default result limit for list/report commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Sort incidents newest first unless told otherwise.
    #[serde(default = "default_newest_first")]
    pub newest_first: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            newest_first: default_newest_first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ReportConfig::default();
        assert_eq!(config.default_limit, 50);
        assert!(config.newest_first);
    }
}
