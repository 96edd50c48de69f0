//! Domain layer: grouping, reconciliation and validation
//!
//! Everything here is pure and deterministic. No I/O, no shared state.

pub mod blacklist;
pub mod grouping;
pub mod reconcile;
pub mod validate;

pub use blacklist::Blacklist;
pub use grouping::{group_backward, group_forward, Grouping, GroupingKind};
pub use reconcile::{reconcile, Reconciler, Reconciliation, RepairWindow, REPAIR_WINDOWS};
pub use validate::{check_coverage, validate_matrix};
