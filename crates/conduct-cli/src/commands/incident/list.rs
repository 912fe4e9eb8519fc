use std::cmp::Reverse;

use conduct_core::entities::Incident;
use conduct_core::enums::IncidentStatus;
use conduct_report::timestamp_key;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    student: Option<&str>,
    status: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.report.default_limit);

    let mut incidents: Vec<Incident> = match student {
        Some(student) => ctx.registry.incidents_for_student(student).await?,
        None => ctx.registry.list_incidents().await?,
    };

    if let Some(status) = status {
        let status = parse_enum::<IncidentStatus>(status, "status")?;
        incidents.retain(|incident| incident.status == status);
    }

    incidents.sort_by_cached_key(|incident| Reverse(timestamp_key(&incident.date, &incident.time)));
    truncate_to(&mut incidents, limit);

    output(&incidents, flags.format)
}
