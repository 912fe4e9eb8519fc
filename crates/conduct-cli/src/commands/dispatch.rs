use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Year { action } => commands::year::handle(&action, ctx, flags).await,
        Commands::Class { action } => commands::class::handle(&action, ctx, flags).await,
        Commands::Student { action } => commands::student::handle(&action, ctx, flags).await,
        Commands::Incident { action } => commands::incident::handle(&action, ctx, flags).await,
        Commands::Record { action } => commands::record::handle(&action, ctx, flags).await,
        Commands::Report(args) => commands::report::handle(&args, ctx, flags).await,
        Commands::Months => commands::report::months(ctx, flags).await,
        Commands::Classes => commands::report::classes(ctx, flags).await,
        Commands::Summary => commands::report::summary(ctx, flags).await,
        Commands::Seed(args) => commands::seed::handle(&args, ctx, flags).await,
    }
}
