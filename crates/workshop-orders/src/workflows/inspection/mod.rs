//! Vehicle inspection checklist: a fixed catalog of rated components with
//! free-text notes and optional photographic evidence.

mod catalog;
mod snapshot;

pub use catalog::{Condition, InspectionElement};
pub use snapshot::{ChecklistError, ChecklistItem, ChecklistSnapshot};
