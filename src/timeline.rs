//! Schedule timeline compaction.
//!
//! Opsgenie reports a rotation's timeline as one period per hand-off, so a
//! fortnight of a weekly rotation with two participants arrives as fourteen
//! daily slivers. Compaction merges runs of adjacent periods assigned to the
//! same on-callee into contiguous ranges, which is what a human wants to see.

use jiff::Timestamp;

/// A person, team, or rotation as Opsgenie identifies it.
///
/// Equality is structural on both fields. Two periods merge only when `name`
/// and `id` both match — a display-name change mid-rotation splits the run
/// even if the `id` is the same, matching upstream behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub id: String,
}

/// A contiguous interval with a single on-call assignee.
///
/// `end` is carried through exactly as upstream reports it; this module never
/// interprets whether the boundary is inclusive or exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub start: Timestamp,
    pub end: Timestamp,
    pub on_call: Identity,
}

/// One rotation's compacted timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationTimeline {
    pub rotation: Identity,
    pub periods: Vec<Period>,
}

/// Merge runs of adjacent periods with the same on-callee.
///
/// Single left-to-right pass: a record whose assignee equals the last output
/// period's assignee extends that period's `end`; anything else starts a new
/// period. The result is minimal — no two adjacent output periods share an
/// assignee — and covers exactly the same time as the input, since merging
/// only moves an `end` boundary.
///
/// Records must already be in start order, as the timeline endpoint delivers
/// them. Out-of-order input is neither detected nor repaired; the output for
/// such input is unspecified.
pub fn compact(records: impl IntoIterator<Item = Period>) -> Vec<Period> {
    let mut compacted: Vec<Period> = Vec::new();
    for record in records {
        match compacted.last_mut() {
            Some(last) if last.on_call == record.on_call => last.end = record.end,
            _ => compacted.push(record),
        }
    }
    compacted
}

/// Compact every rotation's periods independently.
///
/// Rotations never merge with each other; output order follows input order.
pub fn compact_rotations(
    rotations: impl IntoIterator<Item = (Identity, Vec<Period>)>,
) -> Vec<RotationTimeline> {
    rotations
        .into_iter()
        .map(|(rotation, periods)| RotationTimeline {
            rotation,
            periods: compact(periods),
        })
        .collect()
}
