//! Domain types for the Opsgenie surfaces the CLI queries.
//!
//! Timeline types live in [`crate::timeline`] next to the compaction logic.

mod alert;
mod schedule;

pub use alert::Alert;
pub use schedule::{Participant, Rotation, Schedule};
