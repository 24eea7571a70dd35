use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimal user representation embedded in merge request payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicUser {
    pub id: u64,
    pub username: String,
    pub name: String,
    pub state: Option<String>,
    pub locked: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub avatar_url: Option<String>,
    pub web_url: Option<String>,
}
