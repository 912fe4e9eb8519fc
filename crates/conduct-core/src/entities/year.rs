use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A year level grouping classes, e.g. "Jahrgang 5".
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct YearLevel {
    pub id: String,
    #[serde(default)]
    pub name: String,
}
