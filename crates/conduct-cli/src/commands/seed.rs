use conduct_db::seed::{SeedReport, seed};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SeedArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SeedResponse {
    seeded: bool,
    #[serde(flatten)]
    created: Option<SeedReport>,
}

/// Handle `cdt seed`.
pub async fn handle(args: &SeedArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let created = seed(&ctx.registry, args.force).await?;
    output(
        &SeedResponse {
            seeded: created.is_some(),
            created,
        },
        flags.format,
    )
}
