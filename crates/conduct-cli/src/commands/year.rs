use anyhow::Context;
use conduct_core::enums::Kind;
use conduct_report::natural_cmp;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::YearCommands;
use crate::commands::shared::orphan::delete_with_warning;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cdt year`.
pub async fn handle(
    action: &YearCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        YearCommands::Add { name } => {
            let year = ctx.registry.create_year(name).await?;
            output(&year, flags.format)
        }
        YearCommands::List => {
            let mut years = ctx.registry.list_years().await?;
            years.sort_by(|a, b| natural_cmp(&a.name, &b.name));
            output(&years, flags.format)
        }
        YearCommands::Rename { id, name } => {
            let year = ctx
                .registry
                .rename_year(id, name)
                .await?
                .with_context(|| format!("year level '{id}' not found"))?;
            output(&year, flags.format)
        }
        YearCommands::Delete { id } => {
            let response = delete_with_warning(ctx, Kind::Years, id).await?;
            output(&response, flags.format)
        }
    }
}
