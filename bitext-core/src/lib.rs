//! Sentence alignment for bitexts with noisy sentence links
//!
//! Two texts, an original and its translation, are segmented into
//! sentences. Token-level cross-references give each sentence a set of
//! linked sentences in the other text. These links are partial and
//! sometimes contradictory, so grouping them from either side gives two
//! different answers. This crate turns them into one gap-free,
//! order-preserving list of aligned groups.
//!
//! # Architecture
//!
//! - **Grouping**: the forward grouper walks the translation, the backward
//!   grouper walks the original; both chunk neighbours with overlapping
//!   links.
//! - **Reconciliation**: two cursors walk the groupings and repair local
//!   disagreements with a bounded window search.
//! - **Validation**: each stage's output must cover its sequence exactly
//!   once, in order.
//!
//! # Example
//!
//! ```rust
//! use bitext_core::{compute_matrix, Blacklist, Group, SentenceId, SentenceLinks, Text};
//!
//! let original = Text::new(
//!     "greek",
//!     vec![
//!         SentenceLinks::new(1u64, [10u64]),
//!         SentenceLinks::new(2u64, [10u64, 11]),
//!     ],
//! );
//! let translation = Text::new(
//!     "gothic",
//!     vec![
//!         SentenceLinks::new(10u64, [1u64, 2]),
//!         SentenceLinks::new(11u64, [2u64]),
//!     ],
//! );
//!
//! let matrix = compute_matrix(&original, &translation, &Blacklist::new()).unwrap();
//! assert_eq!(
//!     matrix.groups(),
//!     &[Group::new(
//!         vec![SentenceId(1), SentenceId(2)],
//!         vec![SentenceId(10), SentenceId(11)],
//!     )]
//! );
//! ```

pub mod api;
pub mod domain;
pub mod error;
pub mod types;

pub use api::tsv::{self, TsvError};
pub use api::{align, check_input, check_matrix, compute_matrix, Alignment, TextPair};
pub use domain::{Blacklist, Grouping, GroupingKind, RepairWindow};
pub use error::{AlignmentError, InputProblem, Result, Stage, Violation};
pub use types::{Group, Matrix, MatrixSummary, SentenceId, SentenceLinks, Side, Text};
