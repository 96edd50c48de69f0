//! Reconciliation of the forward and backward groupings
//!
//! The backward grouping is ordered by the original text and the forward
//! grouping by the translation. Both describe the same alignment, but they
//! disagree wherever links are partial or cross each other locally. The
//! reconciler walks both with independent cursors. Entries that are
//! unaligned on the opposite side are emitted as they are. Otherwise it
//! looks for the smallest pair of windows, one per grouping and each at
//! most five entries long, whose contents describe the same sentences,
//! and emits them as one group.

use super::grouping::GroupingKind;
use crate::error::{AlignmentError, Result, Stage, Violation};
use crate::types::{Group, SentenceId, Side};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Additional entries taken beyond the current one on each grouping
///
/// A window of `extra_backward = 1` spans two backward entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepairWindow {
    /// Extra entries from the backward (original-ordered) grouping
    pub extra_backward: usize,
    /// Extra entries from the forward (translation-ordered) grouping
    pub extra_forward: usize,
}

impl RepairWindow {
    const fn new(extra_backward: usize, extra_forward: usize) -> Self {
        Self {
            extra_backward,
            extra_forward,
        }
    }

    /// Total number of extra entries
    pub fn extension(&self) -> usize {
        self.extra_backward + self.extra_forward
    }
}

/// Largest number of extra entries taken from one grouping
pub const MAX_EXTRA_ENTRIES: usize = 4;

/// Repair windows in probing order: smaller total extension first, and
/// for equal totals the backward grouping is extended before the forward
/// one. The order decides which of several valid repairs is taken.
pub const REPAIR_WINDOWS: [RepairWindow; 25] = [
    RepairWindow::new(0, 0),
    RepairWindow::new(1, 0),
    RepairWindow::new(0, 1),
    RepairWindow::new(2, 0),
    RepairWindow::new(1, 1),
    RepairWindow::new(0, 2),
    RepairWindow::new(3, 0),
    RepairWindow::new(2, 1),
    RepairWindow::new(1, 2),
    RepairWindow::new(0, 3),
    RepairWindow::new(4, 0),
    RepairWindow::new(3, 1),
    RepairWindow::new(2, 2),
    RepairWindow::new(1, 3),
    RepairWindow::new(0, 4),
    RepairWindow::new(4, 1),
    RepairWindow::new(3, 2),
    RepairWindow::new(2, 3),
    RepairWindow::new(1, 4),
    RepairWindow::new(4, 2),
    RepairWindow::new(3, 3),
    RepairWindow::new(2, 4),
    RepairWindow::new(4, 3),
    RepairWindow::new(3, 4),
    RepairWindow::new(4, 4),
];

/// Groups emitted by the reconciler together with the windows it used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Emitted groups in order
    pub groups: Vec<Group>,
    /// Window used for each repaired group, in emission order
    pub repairs: Vec<RepairWindow>,
}

/// Reconcile a backward and a forward grouping into one group list
///
/// The result is not validated here; callers check coverage of both
/// sequences afterwards.
pub fn reconcile(backward: &[Group], forward: &[Group]) -> Result<Reconciliation> {
    Reconciler::new(backward, forward).run()
}

/// Cursor state for one reconciliation
#[derive(Debug)]
pub struct Reconciler<'a> {
    backward: &'a [Group],
    forward: &'a [Group],
    backward_position: usize,
    forward_position: usize,
    groups: Vec<Group>,
    repairs: Vec<RepairWindow>,
}

impl<'a> Reconciler<'a> {
    /// Start with both cursors at the first entry
    pub fn new(backward: &'a [Group], forward: &'a [Group]) -> Self {
        Self {
            backward,
            forward,
            backward_position: 0,
            forward_position: 0,
            groups: Vec::with_capacity(backward.len().max(forward.len())),
            repairs: Vec::new(),
        }
    }

    /// Run until both groupings are consumed
    pub fn run(mut self) -> Result<Reconciliation> {
        loop {
            self.drain_unaligned();

            let (backward, forward) = (self.backward, self.forward);

            match (
                backward.get(self.backward_position),
                forward.get(self.forward_position),
            ) {
                (None, None) => break,
                (Some(_), Some(_)) => self.repair()?,
                (None, Some(pending)) => {
                    return Err(self.cursor_mismatch(GroupingKind::Backward, pending))
                }
                (Some(pending), None) => {
                    return Err(self.cursor_mismatch(GroupingKind::Forward, pending))
                }
            }
        }

        log::debug!(
            "reconciled {} groups with {} repairs",
            self.groups.len(),
            self.repairs.len()
        );

        Ok(Reconciliation {
            groups: self.groups,
            repairs: self.repairs,
        })
    }

    /// Emit entries that carry no alignment on the opposite side
    fn drain_unaligned(&mut self) {
        let (backward, forward) = (self.backward, self.forward);

        while let Some(entry) = backward.get(self.backward_position) {
            if !entry.translation.is_empty() {
                break;
            }
            log::trace!("unaligned original entry {entry}");
            self.groups.push(entry.clone());
            self.backward_position += 1;
        }

        while let Some(entry) = forward.get(self.forward_position) {
            if !entry.original.is_empty() {
                break;
            }
            log::trace!("unaligned translation entry {entry}");
            self.groups.push(entry.clone());
            self.forward_position += 1;
        }
    }

    /// Find the first window that reconciles and emit its group
    fn repair(&mut self) -> Result<()> {
        for window in REPAIR_WINDOWS {
            if let Some(group) = self.try_window(window) {
                log::trace!(
                    "window ({}, {}) at backward {}, forward {} -> {group}",
                    window.extra_backward,
                    window.extra_forward,
                    self.backward_position,
                    self.forward_position
                );
                self.groups.push(group);
                self.repairs.push(window);
                self.backward_position += window.extra_backward + 1;
                self.forward_position += window.extra_forward + 1;
                return Ok(());
            }
        }

        let backward_entry = self.backward[self.backward_position].clone();
        let forward_entry = self.forward[self.forward_position].clone();
        log::warn!(
            "no repair window matched at backward entry {} ({backward_entry}), forward entry {} ({forward_entry})",
            self.backward_position,
            self.forward_position
        );

        Err(AlignmentError::IrreparableAlignmentGap {
            backward_position: self.backward_position,
            forward_position: self.forward_position,
            backward_entry,
            forward_entry,
        })
    }

    /// Evaluate one window; `None` if it runs past either grouping or the
    /// two sides disagree
    fn try_window(&self, window: RepairWindow) -> Option<Group> {
        let backward = self
            .backward
            .get(self.backward_position..self.backward_position + window.extra_backward + 1)?;
        let forward = self
            .forward
            .get(self.forward_position..self.forward_position + window.extra_forward + 1)?;

        let o1 = concat(backward, Side::Original);
        let t1 = concat(backward, Side::Translation);
        let o2 = concat(forward, Side::Original);
        let t2 = concat(forward, Side::Translation);

        // Sentences folded into the window only by adjacency
        let u1: BTreeSet<SentenceId> = backward
            .iter()
            .filter(|e| e.translation.is_empty())
            .flat_map(|e| e.original.iter().copied())
            .collect();
        let u2: BTreeSet<SentenceId> = forward
            .iter()
            .filter(|e| e.original.is_empty())
            .flat_map(|e| e.translation.iter().copied())
            .collect();

        // The backward side is deduplicated only through the subtraction
        // and the forward side explicitly; both are kept as is.
        let originals_agree = without(sorted(o1.clone()), &u1) == deduped(sorted(o2));
        let translations_agree = deduped(sorted(t1)) == without(sorted(t2.clone()), &u2);

        (originals_agree && translations_agree).then(|| Group::new(o1, t2))
    }

    fn cursor_mismatch(&self, exhausted: GroupingKind, pending: &Group) -> AlignmentError {
        log::error!(
            "{exhausted} grouping exhausted at backward entry {}, forward entry {}",
            self.backward_position,
            self.forward_position
        );
        AlignmentError::violation(
            Stage::Reconciliation,
            Violation::CursorMismatch {
                exhausted,
                backward_position: self.backward_position,
                forward_position: self.forward_position,
                pending: pending.clone(),
            },
        )
    }
}

fn concat(entries: &[Group], side: Side) -> Vec<SentenceId> {
    entries
        .iter()
        .flat_map(|e| e.ids(side).iter().copied())
        .collect()
}

fn sorted(mut ids: Vec<SentenceId>) -> Vec<SentenceId> {
    ids.sort_unstable();
    ids
}

fn deduped(mut ids: Vec<SentenceId>) -> Vec<SentenceId> {
    ids.dedup();
    ids
}

fn without(ids: Vec<SentenceId>, removed: &BTreeSet<SentenceId>) -> Vec<SentenceId> {
    ids.into_iter().filter(|id| !removed.contains(id)).collect()
}
