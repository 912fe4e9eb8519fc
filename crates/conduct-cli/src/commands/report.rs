use serde::Serialize;

use conduct_core::entities::SchoolClass;
use conduct_core::enums::{IncidentCategory, IncidentStatus};
use conduct_report::facet::month_key;
use conduct_report::{
    IncidentFilter, ReportQuery, SortOrder, load_sources, month_facets, month_label, summarize,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::commands::shared::parse::{non_blank, parse_enum};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MonthEntry {
    key: String,
    label: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassEntry {
    #[serde(flatten)]
    class: SchoolClass,
    year_level_name: String,
}

/// Handle `cdt report`.
pub async fn handle(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = build_query(args, ctx.config.report.newest_first)?;
    let limit = effective_limit(None, flags.limit, ctx.config.report.default_limit);

    let sources = load_sources(&ctx.registry).await?;
    let mut items = query.run(&sources);
    tracing::debug!(
        matched = items.len(),
        order = %query.order,
        "report computed"
    );
    truncate_to(&mut items, limit);

    output(&items, flags.format)
}

/// Handle `cdt months`.
pub async fn months(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sources = load_sources(&ctx.registry).await?;
    let entries = month_facets(&sources.enrich())
        .into_iter()
        .map(|key| MonthEntry {
            label: month_label(&key).unwrap_or_else(|| key.clone()),
            key,
        })
        .collect::<Vec<_>>();
    output(&entries, flags.format)
}

/// Handle `cdt classes`.
pub async fn classes(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sources = load_sources(&ctx.registry).await?;
    let entries = sources
        .sorted_classes()
        .into_iter()
        .map(|class| {
            let year_level_name = sources
                .years
                .iter()
                .find(|year| year.id == class.year_level_id)
                .map_or_else(|| conduct_report::UNKNOWN.to_string(), |year| year.name.clone());
            ClassEntry {
                class,
                year_level_name,
            }
        })
        .collect::<Vec<_>>();
    output(&entries, flags.format)
}

/// Handle `cdt summary`.
pub async fn summary(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let incidents = ctx.registry.list_incidents().await?;
    output(&summarize(&incidents), flags.format)
}

fn build_query(args: &ReportArgs, newest_first_default: bool) -> anyhow::Result<ReportQuery> {
    let month = non_blank(args.month.as_deref());
    if let Some(month) = &month {
        if month.len() != 7 || month_key(month).is_none() {
            anyhow::bail!("invalid month '{month}': expected YYYY-MM");
        }
    }

    let order = if args.oldest_first {
        SortOrder::OldestFirst
    } else if args.newest_first {
        SortOrder::NewestFirst
    } else {
        SortOrder::from_newest_first(newest_first_default)
    };

    Ok(ReportQuery {
        filter: IncidentFilter {
            search: non_blank(args.search.as_deref()),
            status: args
                .status
                .as_deref()
                .map(|raw| parse_enum::<IncidentStatus>(raw, "status"))
                .transpose()?,
            category: args
                .category
                .as_deref()
                .map(|raw| parse_enum::<IncidentCategory>(raw, "category"))
                .transpose()?,
            class_id: non_blank(args.class_id.as_deref()),
            month,
        },
        order,
    })
}
