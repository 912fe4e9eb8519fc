use anyhow::{Context, bail};
use conduct_core::enums::Kind;
use conduct_report::sort_classes;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClassCommands;
use crate::commands::shared::orphan::delete_with_warning;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cdt class`.
pub async fn handle(
    action: &ClassCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ClassCommands::Add { year, name } => {
            if ctx.registry.get_year(year).await?.is_none() {
                bail!("year level '{year}' not found");
            }
            let class = ctx.registry.create_class(year, name).await?;
            output(&class, flags.format)
        }
        ClassCommands::List { year } => {
            let mut classes = match year {
                Some(year) => ctx.registry.classes_for_year(year).await?,
                None => ctx.registry.list_classes().await?,
            };
            sort_classes(&mut classes);
            output(&classes, flags.format)
        }
        ClassCommands::Rename { id, name } => {
            let class = ctx
                .registry
                .rename_class(id, name)
                .await?
                .with_context(|| format!("class '{id}' not found"))?;
            output(&class, flags.format)
        }
        ClassCommands::Delete { id } => {
            let response = delete_with_warning(ctx, Kind::Classes, id).await?;
            output(&response, flags.format)
        }
    }
}
