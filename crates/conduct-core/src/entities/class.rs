use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A class within a year level, e.g. "5a".
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchoolClass {
    pub id: String,
    #[serde(default)]
    pub year_level_id: String,
    #[serde(default)]
    pub name: String,
}
