use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ClassCommands, IncidentCommands, RecordCommands, StudentCommands, YearCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Year levels.
    Year {
        #[command(subcommand)]
        action: YearCommands,
    },
    /// School classes.
    Class {
        #[command(subcommand)]
        action: ClassCommands,
    },
    /// Students.
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Incidents.
    Incident {
        #[command(subcommand)]
        action: IncidentCommands,
    },
    /// Raw record store access by kind.
    Record {
        #[command(subcommand)]
        action: RecordCommands,
    },
    /// Filtered, enriched incident report.
    Report(ReportArgs),
    /// Months that have incidents, most recent first.
    Months,
    /// Classes in natural name order.
    Classes,
    /// Dashboard counts and recent incidents.
    Summary,
    /// Fill an empty database with demo data.
    Seed(SeedArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Case-insensitive text in student name or description
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Class id
    #[arg(long = "class")]
    pub class_id: Option<String>,
    /// Month key, e.g. 2026-03
    #[arg(long)]
    pub month: Option<String>,
    #[arg(long, conflicts_with = "newest_first")]
    pub oldest_first: bool,
    #[arg(long)]
    pub newest_first: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SeedArgs {
    /// Seed even if year levels already exist
    #[arg(long)]
    pub force: bool,
}
