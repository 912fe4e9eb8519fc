//! Chronological ordering of incidents.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enrich::EnrichedIncident;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewestFirst => "newest_first",
            Self::OldestFirst => "oldest_first",
        }
    }

    #[must_use]
    pub const fn from_newest_first(newest_first: bool) -> Self {
        if newest_first {
            Self::NewestFirst
        } else {
            Self::OldestFirst
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest_first" | "desc" => Ok(Self::NewestFirst),
            "oldest_first" | "asc" => Ok(Self::OldestFirst),
            other => Err(format!("unknown sort order '{other}'")),
        }
    }
}

/// Milliseconds since the epoch for an incident's date and time.
///
/// The time is split on `:`; a missing or empty hour becomes `00` and is
/// zero-padded to two digits, a missing minute becomes `00`. An empty date or
/// any combination that does not parse yields 0, so such incidents sort as
/// the oldest.
#[must_use]
pub fn timestamp_key(date: &str, time: &str) -> i64 {
    if date.is_empty() {
        return 0;
    }
    let time = if time.is_empty() { "00:00" } else { time };
    let mut parts = time.split(':');
    let hours = parts.next().filter(|h| !h.is_empty()).unwrap_or("00");
    let minutes = parts.next().filter(|m| !m.is_empty()).unwrap_or("00");

    let key = format!("{date}T{hours:0>2}:{minutes}");
    NaiveDateTime::parse_from_str(&key, "%Y-%m-%dT%H:%M")
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0)
}

/// Stable in-place sort by [`timestamp_key`].
pub fn sort_incidents(items: &mut [EnrichedIncident], order: SortOrder) {
    match order {
        SortOrder::OldestFirst => {
            items.sort_by_cached_key(|i| timestamp_key(&i.incident.date, &i.incident.time));
        }
        SortOrder::NewestFirst => {
            items.sort_by_cached_key(|i| Reverse(timestamp_key(&i.incident.date, &i.incident.time)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich;
    use crate::test_support::incident;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn timed(entries: &[(&str, &str, &str)]) -> Vec<EnrichedIncident> {
        let incidents: Vec<_> = entries
            .iter()
            .map(|(id, date, time)| {
                let mut inc = incident(id, "stu-1");
                inc.date = (*date).to_string();
                inc.time = (*time).to_string();
                inc
            })
            .collect();
        enrich(&[], &[], &[], &incidents)
    }

    fn ids(items: &[EnrichedIncident]) -> Vec<&str> {
        items.iter().map(|i| i.incident.id.as_str()).collect()
    }

    #[rstest]
    #[case("2026-03-04", "09:15", "2026-03-04T09:15")]
    #[case("2026-03-04", "9:05", "2026-03-04T09:05")]
    #[case("2026-03-04", "", "2026-03-04T00:00")]
    #[case("2026-03-04", "14", "2026-03-04T14:00")]
    fn key_pads_missing_components(#[case] date: &str, #[case] time: &str, #[case] expected: &str) {
        let expected = NaiveDateTime::parse_from_str(expected, "%Y-%m-%dT%H:%M")
            .unwrap()
            .and_utc()
            .timestamp_millis();
        assert_eq!(timestamp_key(date, time), expected);
    }

    #[rstest]
    #[case("", "10:00")]
    #[case("irgendwann", "10:00")]
    #[case("2026-02-30", "10:00")]
    #[case("2026-03-04", "25:00")]
    fn unparseable_is_epoch_zero(#[case] date: &str, #[case] time: &str) {
        assert_eq!(timestamp_key(date, time), 0);
    }

    #[test]
    fn missing_time_sorts_as_midnight() {
        let mut items = timed(&[
            ("late", "2026-03-04", "08:30"),
            ("untimed", "2026-03-04", ""),
            ("midnight", "2026-03-04", "00:00"),
        ]);
        sort_incidents(&mut items, SortOrder::OldestFirst);
        // Equal keys keep their input order.
        assert_eq!(ids(&items), vec!["untimed", "midnight", "late"]);

        sort_incidents(&mut items, SortOrder::NewestFirst);
        assert_eq!(ids(&items), vec!["late", "untimed", "midnight"]);
    }

    #[test]
    fn undated_incidents_are_oldest() {
        let mut items = timed(&[
            ("undated", "", "12:00"),
            ("march", "2026-03-01", "08:00"),
            ("january", "2026-01-10", "08:00"),
        ]);
        sort_incidents(&mut items, SortOrder::NewestFirst);
        assert_eq!(ids(&items), vec!["march", "january", "undated"]);
    }

    #[test]
    fn order_parses_from_aliases() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::OldestFirst);
        assert_eq!("newest_first".parse::<SortOrder>().unwrap(), SortOrder::NewestFirst);
        assert!("sideways".parse::<SortOrder>().is_err());
    }
}
