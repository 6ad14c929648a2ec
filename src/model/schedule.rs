//! Schedule and rotation types.

use jiff::Timestamp;
use serde::Deserialize;

/// An on-call schedule.
///
/// `rotations` is only populated when the list request asks for rotation
/// expansion; otherwise the API omits it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub timezone: String,
    pub enabled: bool,
    #[serde(default)]
    pub rotations: Vec<Rotation>,
}

/// A rotation within a schedule: a repeating assignment cycle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rotation {
    pub name: String,
    /// "daily", "weekly", or "hourly".
    #[serde(rename = "type")]
    pub kind: String,
    /// Cycle length in units of `kind` (e.g. 2 for a fortnightly rotation).
    #[serde(default = "default_length")]
    pub length: u32,
    pub start_date: Timestamp,
    /// Open-ended rotations have no end date.
    pub end_date: Option<Timestamp>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

fn default_length() -> u32 {
    1
}

/// A rotation participant: a user, team, or escalation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(rename = "type")]
    pub kind: String,
    /// Username for user participants, empty otherwise.
    #[serde(default)]
    pub username: String,
}
