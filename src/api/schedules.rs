//! Schedule listing, rotations, and the schedule timeline.
//!
//! The timeline endpoint is the one surface with logic behind it: its raw
//! periods are handed to [`crate::timeline::compact`] per rotation before
//! anything reaches the caller.

use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use jiff::civil::Date;
use serde::Deserialize;

use crate::model::{Rotation, Schedule};
use crate::timeline::{self, Identity, Period, RotationTimeline};

use super::{ApiClient, Result};

/// A timeline fetch window: a count of days, weeks, or months.
///
/// Parses from strings like `14days`, `2weeks`, `1months` (the unit is
/// always plural, matching the API's `intervalUnit` values).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub value: u32,
    pub unit: IntervalUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalUnit {
    Days,
    Weeks,
    Months,
}

impl IntervalUnit {
    fn as_str(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_str())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let unit = [IntervalUnit::Days, IntervalUnit::Weeks, IntervalUnit::Months]
            .into_iter()
            .find(|u| s.ends_with(u.as_str()))
            .ok_or_else(|| format!("'{s}' must end in days, weeks, or months"))?;

        let digits = &s[..s.len() - unit.as_str().len()];
        let value: u32 = digits
            .parse()
            .map_err(|_| format!("'{s}' must start with a number, like 14days"))?;

        Ok(Self { value, unit })
    }
}

#[derive(Deserialize)]
struct ListSchedulesResponse {
    data: Vec<Schedule>,
}

pub(super) fn list(client: &ApiClient, expand_rotations: bool) -> Result<Vec<Schedule>> {
    let mut request = client.get("/v2/schedules");
    if expand_rotations {
        request = request.query(&[("expand", "rotation")]);
    }

    let response: ListSchedulesResponse = client.fetch(request)?;
    Ok(response.data)
}

#[derive(Deserialize)]
struct ListRotationsResponse {
    data: Vec<Rotation>,
}

pub(super) fn list_rotations(client: &ApiClient, schedule_name: &str) -> Result<Vec<Rotation>> {
    let request = client
        .get(&format!("/v2/schedules/{schedule_name}/rotations"))
        .query(&[("scheduleIdentifierType", "name")]);

    let response: ListRotationsResponse = client.fetch(request)?;
    Ok(response.data)
}

// ── Timeline ──

/// Wire shape of the timeline response, pared down to the final timeline.
/// The endpoint also returns base and override timelines; the final one is
/// what's actually in effect.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelineResponse {
    data: TimelineData,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelineData {
    final_timeline: WireTimeline,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTimeline {
    #[serde(default)]
    rotations: Vec<WireRotation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRotation {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    periods: Vec<WirePeriod>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePeriod {
    start_date: Timestamp,
    end_date: Timestamp,
    recipient: WireRecipient,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecipient {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
}

pub(super) fn timeline(
    client: &ApiClient,
    schedule_name: &str,
    date: Date,
    interval: Interval,
) -> Result<Vec<RotationTimeline>> {
    let date_param = format!("{date}T00:00:00Z");
    let interval_value = interval.value.to_string();
    let request = client
        .get(&format!("/v2/schedules/{schedule_name}/timeline"))
        .query(&[
            ("identifierType", "name"),
            ("date", date_param.as_str()),
            ("interval", interval_value.as_str()),
            ("intervalUnit", interval.unit.as_str()),
        ]);

    let response: TimelineResponse = client.fetch(request)?;
    Ok(compact_wire_timeline(response.data.final_timeline))
}

/// Map wire rotations into the domain and compact each one's periods.
fn compact_wire_timeline(wire: WireTimeline) -> Vec<RotationTimeline> {
    timeline::compact_rotations(wire.rotations.into_iter().map(|rotation| {
        let id = Identity {
            name: rotation.name,
            id: rotation.id,
        };
        let periods = rotation
            .periods
            .into_iter()
            .map(|p| Period {
                start: p.start_date,
                end: p.end_date,
                on_call: Identity {
                    name: p.recipient.name,
                    id: p.recipient.id,
                },
            })
            .collect();
        (id, periods)
    }))
}
