use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `cdt` binary.
#[derive(Debug, Parser)]
#[command(name = "cdt", version, about = "conduct - school incident records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file (overrides `database.path` from configuration)
    #[arg(long, global = true)]
    pub db: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            db: self.db.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{IncidentCommands, RecordCommands, YearCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "cdt", "--format", "table", "--limit", "10", "--verbose", "summary",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Summary));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["cdt", "months", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Months));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["cdt", "--format", "xml", "summary"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["cdt", "--db", "/tmp/school.db", "classes"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.db.as_deref(), Some("/tmp/school.db"));
    }

    #[test]
    fn report_filters_parse() {
        let cli = Cli::try_parse_from([
            "cdt",
            "report",
            "--search",
            "müller",
            "--status",
            "open",
            "--category",
            "THEFT",
            "--month",
            "2026-03",
            "--oldest-first",
        ])
        .expect("cli should parse");

        let Commands::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.search.as_deref(), Some("müller"));
        assert_eq!(args.status.as_deref(), Some("open"));
        assert_eq!(args.month.as_deref(), Some("2026-03"));
        assert!(args.oldest_first);
        assert!(!args.newest_first);
    }

    #[test]
    fn sort_direction_flags_conflict() {
        let parsed = Cli::try_parse_from(["cdt", "report", "--oldest-first", "--newest-first"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn entity_subcommands_parse() {
        let cli = Cli::try_parse_from(["cdt", "year", "add", "Jahrgang 5"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Year { action: YearCommands::Add { ref name } } if name == "Jahrgang 5"
        ));

        let cli = Cli::try_parse_from([
            "cdt",
            "incident",
            "update",
            "inc-1",
            "--status",
            "RESOLVED",
            "--parent-contacted",
            "true",
        ])
        .expect("cli should parse");
        let Commands::Incident {
            action: IncidentCommands::Update(args),
        } = cli.command
        else {
            panic!("expected incident update");
        };
        assert_eq!(args.id, "inc-1");
        assert_eq!(args.parent_contacted, Some(true));
    }

    #[test]
    fn record_put_takes_kind_and_body() {
        let cli = Cli::try_parse_from(["cdt", "record", "put", "students", r#"{"id":"stu-1"}"#])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Record { action: RecordCommands::Put { ref kind, .. } } if kind == "students"
        ));
    }
}
