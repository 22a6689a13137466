//! Application service layer.
//!
//! The roster owns the single in-memory contact collection of an interactive
//! session and the business rules above the workbook layer: background load,
//! edit with revert, filtering and sorting, import merging, and save with a
//! change summary.

mod roster;

pub use roster::{ChangeSummary, ImportSummary, Roster, RosterStats, SortKey};
