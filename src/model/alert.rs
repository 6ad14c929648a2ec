//! Alert types.

use jiff::Timestamp;
use serde::Deserialize;

/// An Opsgenie alert, as returned by the list endpoint.
///
/// Only the fields this CLI renders; the API returns more.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Short numeric id, unique within the account. Handy for humans.
    pub tiny_id: String,
    pub message: String,
    /// "open", "closed", etc. Opaque to this client.
    pub status: String,
    pub acknowledged: bool,
    /// How many times the alert was raised (deduplication counter).
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: Timestamp,
}
