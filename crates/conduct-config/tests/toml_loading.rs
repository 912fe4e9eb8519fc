//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and working directory manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use conduct_config::ConductConfig;

fn isolate_user_config(jail: &mut Jail) {
    let dir = jail.directory().to_string_lossy().into_owned();
    jail.set_env("XDG_CONFIG_HOME", &dir);
    jail.set_env("HOME", &dir);
}

#[test]
fn loads_database_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/conduct/records.db"
in_memory = false
"#,
        )?;

        let config: ConductConfig = Figment::from(Serialized::defaults(ConductConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/conduct/records.db");
        assert!(!config.database.is_memory());
        Ok(())
    });
}

#[test]
fn loads_report_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[report]
default_limit = 200
newest_first = false
",
        )?;

        let config: ConductConfig = Figment::from(Serialized::defaults(ConductConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.report.default_limit, 200);
        assert!(!config.report.newest_first);
        assert_eq!(config.database.path, ".conduct/conduct.db");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir_all(".conduct").map_err(|e| e.to_string())?;
        jail.create_file(
            ".conduct/config.toml",
            r"
[database]
in_memory = true
",
        )?;

        let config = ConductConfig::load().expect("config loads");
        assert!(config.database.is_memory());
        Ok(())
    });
}

#[test]
fn invalid_limit_in_file_fails_validation() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir_all(".conduct").map_err(|e| e.to_string())?;
        jail.create_file(
            ".conduct/config.toml",
            r"
[report]
default_limit = 0
",
        )?;

        let result = ConductConfig::load();
        assert!(result.is_err());
        Ok(())
    });
}
