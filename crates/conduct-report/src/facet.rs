//! Month facet over incident dates.

use std::collections::BTreeSet;

use crate::enrich::EnrichedIncident;

const MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// The `YYYY-MM` prefix of a date, if it has a well-formed one.
#[must_use]
pub fn month_key(date: &str) -> Option<&str> {
    let key = date.get(..7)?;
    let bytes = key.as_bytes();
    let well_formed = bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..].iter().all(u8::is_ascii_digit);
    if !well_formed {
        return None;
    }
    let month: u8 = key[5..].parse().ok()?;
    (1..=12).contains(&month).then_some(key)
}

/// Distinct month keys present in `items`, most recent first.
#[must_use]
pub fn month_facets(items: &[EnrichedIncident]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| month_key(&item.incident.date))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .map(str::to_string)
        .collect()
}

/// German display label for a month key: `"2026-03"` becomes `"März 2026"`.
#[must_use]
pub fn month_label(key: &str) -> Option<String> {
    let key = month_key(key)?;
    let month: usize = key[5..].parse().ok()?;
    let name = MONTH_NAMES.get(month.checked_sub(1)?)?;
    Some(format!("{name} {}", &key[..4]))
}
