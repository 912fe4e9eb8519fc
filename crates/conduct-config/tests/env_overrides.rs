use figment::Jail;
use pretty_assertions::assert_eq;
use conduct_config::ConductConfig;

#[test]
fn env_overrides_database_path() {
    Jail::expect_with(|jail| {
        jail.set_env("CONDUCT_DATABASE__PATH", "/tmp/from-env.db");
        let config = ConductConfig::load().expect("config loads");
        assert_eq!(config.database.path, "/tmp/from-env.db");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(".conduct").map_err(|e| e.to_string())?;
        jail.create_file(
            ".conduct/config.toml",
            r"
[report]
default_limit = 10
",
        )?;
        jail.set_env("CONDUCT_REPORT__DEFAULT_LIMIT", "25");

        let config = ConductConfig::load().expect("config loads");
        assert_eq!(config.report.default_limit, 25);
        Ok(())
    });
}

#[test]
fn env_toggles_in_memory() {
    Jail::expect_with(|jail| {
        jail.set_env("CONDUCT_DATABASE__IN_MEMORY", "true");
        let config = ConductConfig::load().expect("config loads");
        assert!(config.database.is_memory());
        Ok(())
    });
}
