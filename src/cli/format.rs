//! Output formatting for CLI display.
//!
//! One line per record, built here so the shapes are testable; the command
//! handlers in `cli.rs` only decide what to print and where.

use crate::model::{Alert, Participant, Rotation, Schedule};
use crate::timeline::{Identity, Period};

/// One alert as a display line: tiny id, status, priority, creation time,
/// message, then dedup count, tags, and owner when present.
pub(super) fn format_alert(alert: &Alert) -> String {
    let ack = if alert.acknowledged { " ack" } else { "" };
    let count = if alert.count > 1 {
        format!(" ×{}", alert.count)
    } else {
        String::new()
    };
    let tags = if alert.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", alert.tags.join(", "))
    };
    let owner = if alert.owner.is_empty() {
        String::new()
    } else {
        format!("  ({})", alert.owner)
    };
    format!(
        "#{:<4} [{}{}] {} {}  {}{}{}{}",
        alert.tiny_id, alert.status, ack, alert.priority, alert.created_at, alert.message, count,
        tags, owner
    )
}

/// One schedule as a display line.
pub(super) fn format_schedule(schedule: &Schedule) -> String {
    let disabled = if schedule.enabled { "" } else { " [disabled]" };
    let description = if schedule.description.is_empty() {
        String::new()
    } else {
        format!("  — {}", schedule.description)
    };
    format!(
        "{} ({}){}{}",
        schedule.name, schedule.timezone, disabled, description
    )
}

/// One rotation as a display line: name, cadence, window, participants.
pub(super) fn format_rotation(rotation: &Rotation) -> String {
    let cadence = if rotation.length == 1 {
        rotation.kind.clone()
    } else {
        format!("{}×{}", rotation.kind, rotation.length)
    };
    let until = match &rotation.end_date {
        Some(end) => format!(" until {end}"),
        None => String::new(),
    };
    format!(
        "{}  [{}] from {}{}  participants: {}",
        rotation.name,
        cadence,
        rotation.start_date,
        until,
        format_participants(&rotation.participants)
    )
}

fn format_participants(participants: &[Participant]) -> String {
    if participants.is_empty() {
        return "none".to_string();
    }
    participants
        .iter()
        .map(|p| {
            if p.username.is_empty() {
                // Teams and escalations have no username; show the kind.
                p.kind.clone()
            } else {
                p.username.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Header line for one rotation's timeline.
pub(super) fn format_rotation_header(rotation: &Identity) -> String {
    format!("{} ({})", rotation.name, rotation.id)
}

/// One compacted period as a display line.
pub(super) fn format_period(period: &Period) -> String {
    let who = if period.on_call.name.is_empty() {
        "(nobody)"
    } else {
        period.on_call.name.as_str()
    };
    format!("{} → {}  {}", period.start, period.end, who)
}
