//! Alignment error types (deterministic only)
//!
//! Every error halts the current text pair. Recomputing the same input
//! reproduces the same error, so none of these are retryable.

use crate::domain::grouping::GroupingKind;
use crate::types::{Group, SentenceId, Side};
use std::fmt;
use thiserror::Error;

/// Fatal errors raised while aligning one text pair
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    /// No repair window could reconcile the two groupings
    #[error(
        "irreparable alignment gap at backward entry {backward_position}, \
         forward entry {forward_position}: {backward_entry} vs {forward_entry}"
    )]
    IrreparableAlignmentGap {
        /// Cursor position in the backward (original-ordered) grouping
        backward_position: usize,
        /// Cursor position in the forward (translation-ordered) grouping
        forward_position: usize,
        /// Unreconciled entry of the backward grouping
        backward_entry: Group,
        /// Unreconciled entry of the forward grouping
        forward_entry: Group,
    },

    /// A coverage or ordering postcondition failed
    #[error("invariant violation after {stage}: {violation}")]
    InvariantViolation {
        /// Pipeline stage whose output broke the invariant
        stage: Stage,
        /// What exactly went wrong
        violation: Violation,
    },

    /// The text pair is malformed
    #[error("invalid {side} text: {problem}")]
    InvalidInput {
        /// Text containing the problem
        side: Side,
        /// The problem found
        problem: InputProblem,
    },
}

impl AlignmentError {
    /// Every value [`AlignmentError::kind`] can return, with a short description
    pub const KINDS: [(&'static str, &'static str); 3] = [
        (
            "irreparable_alignment_gap",
            "no repair window reconciles the two groupings",
        ),
        (
            "invariant_violation",
            "a stage output does not cover its sequence exactly once, in order",
        ),
        (
            "invalid_input",
            "duplicate sentence ids or links to unknown sentences",
        ),
    ];

    /// Shorthand for an invariant violation
    pub fn violation(stage: Stage, violation: Violation) -> Self {
        AlignmentError::InvariantViolation { stage, violation }
    }

    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            AlignmentError::IrreparableAlignmentGap { .. } => "irreparable_alignment_gap",
            AlignmentError::InvariantViolation { .. } => "invariant_violation",
            AlignmentError::InvalidInput { .. } => "invalid_input",
        }
    }
}

/// Pipeline stage checked by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Output of one of the two groupers
    Grouping(GroupingKind),
    /// Output of the reconciler
    Reconciliation,
    /// A matrix read back from storage
    Stored,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Grouping(kind) => write!(f, "{kind} grouping"),
            Stage::Reconciliation => f.write_str("reconciliation"),
            Stage::Stored => f.write_str("stored matrix"),
        }
    }
}

/// Details of a broken invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Concatenated ids on one side diverge from the text sequence
    Coverage {
        /// Side whose ids diverge
        side: Side,
        /// Index of the first diverging id
        position: usize,
        /// Id the text has at that position (`None` past its end)
        expected: Option<SentenceId>,
        /// Id the groups have at that position (`None` past their end)
        found: Option<SentenceId>,
    },

    /// A group with no ids on either side
    EmptyGroup {
        /// Index of the group
        position: usize,
    },

    /// One grouping ran out of entries while the other still had some
    CursorMismatch {
        /// Grouping that was exhausted first
        exhausted: GroupingKind,
        /// Backward cursor position at the time
        backward_position: usize,
        /// Forward cursor position at the time
        forward_position: usize,
        /// First entry still pending on the other grouping
        pending: Group,
    },
}

fn fmt_optional_id(id: &Option<SentenceId>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => "end of sequence".to_string(),
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Coverage {
                side,
                position,
                expected,
                found,
            } => write!(
                f,
                "{side} ids diverge at position {position}: expected {}, found {}",
                fmt_optional_id(expected),
                fmt_optional_id(found)
            ),
            Violation::EmptyGroup { position } => {
                write!(f, "group {position} has no sentences on either side")
            }
            Violation::CursorMismatch {
                exhausted,
                backward_position,
                forward_position,
                pending,
            } => write!(
                f,
                "{exhausted} grouping exhausted at backward entry {backward_position}, \
                 forward entry {forward_position}; pending {pending}"
            ),
        }
    }
}

/// Problems in a text pair detected before grouping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputProblem {
    /// The same sentence id occurs twice in one text
    DuplicateId(SentenceId),
    /// A sentence links to an id that does not exist in the other text
    DanglingLink {
        /// Linking sentence
        from: SentenceId,
        /// Missing target
        to: SentenceId,
    },
}

impl fmt::Display for InputProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputProblem::DuplicateId(id) => write!(f, "sentence id {id} occurs more than once"),
            InputProblem::DanglingLink { from, to } => {
                write!(f, "sentence {from} links to unknown sentence {to}")
            }
        }
    }
}

/// Result type for alignment operations
pub type Result<T> = std::result::Result<T, AlignmentError>;
