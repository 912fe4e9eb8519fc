use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse an enum value by its wire name or German label.
///
/// Wire names are matched case-insensitively, with `-` or a space standing
/// in for `_`, so `in-progress` reads as `IN_PROGRESS`.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let trimmed = raw.trim();
    if let Ok(value) = serde_json::from_value(Value::String(trimmed.to_string())) {
        return Ok(value);
    }
    let normalized = trimmed.replace(['-', ' '], "_").to_uppercase();
    serde_json::from_value(Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Trimmed text, or `None` when blank.
pub fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
