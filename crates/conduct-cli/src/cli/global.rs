use clap::ValueEnum;

/// How command responses are printed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned columns; arrays of objects become one row per record.
    Table,
    /// Compact single-line JSON.
    Raw,
}

/// Flags accepted anywhere on the command line, resolved once in `main`.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    /// Cap on listed items; a subcommand's own `--limit` takes precedence.
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    /// Database file overriding `database.path`.
    pub db: Option<String>,
}

impl GlobalFlags {
    #[must_use]
    pub const fn wants_table(&self) -> bool {
        matches!(self.format, OutputFormat::Table)
    }
}
