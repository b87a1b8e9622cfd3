use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored review of a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    pub component_id: String,
    pub user_id: String,
    /// Display name of the author, resolved by the server.
    #[serde(default)]
    pub user_name: Option<String>,
    pub comment: String,
    pub rating: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
