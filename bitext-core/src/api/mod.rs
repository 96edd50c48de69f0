//! Public entry points for aligning one text pair

pub mod pair;
pub mod tsv;

use crate::domain::{
    group_backward, group_forward, reconcile, validate_matrix, Blacklist, Grouping, RepairWindow,
};
use crate::error::{AlignmentError, InputProblem, Result, Stage};
use crate::types::{Group, Matrix, SentenceId, Side, Text};
use std::collections::BTreeSet;

pub use pair::TextPair;

/// Full result of aligning a text pair
///
/// Besides the matrix this keeps both intermediate groupings, which are
/// what one inspects when upstream link data has to be corrected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Final validated matrix
    pub matrix: Matrix,
    /// Grouping of translation sentences, in translation order
    pub forward: Grouping,
    /// Grouping of original sentences, in original order
    pub backward: Grouping,
    /// Repair window used for each aligned group
    pub repairs: Vec<RepairWindow>,
}

/// Compute the validated matrix for a text pair
pub fn compute_matrix(original: &Text, translation: &Text, blacklist: &Blacklist) -> Result<Matrix> {
    align(original, translation, blacklist).map(|alignment| alignment.matrix)
}

/// Run the whole pipeline and keep the intermediate groupings
pub fn align(original: &Text, translation: &Text, blacklist: &Blacklist) -> Result<Alignment> {
    let original = blacklist.filter(original);
    let translation = blacklist.filter(translation);

    check_input(&original, &translation)?;

    let backward = group_backward(&original)?;
    let forward = group_forward(&translation)?;
    log::trace!(
        "{} backward and {} forward entries for {} / {}",
        backward.len(),
        forward.len(),
        original.id,
        translation.id
    );

    let reconciliation = reconcile(&backward, &forward)?;
    let matrix = validate_matrix(
        &original.sentence_ids(),
        &translation.sentence_ids(),
        reconciliation.groups,
        Stage::Reconciliation,
    )?;

    Ok(Alignment {
        matrix,
        forward,
        backward,
        repairs: reconciliation.repairs,
    })
}

/// Check a previously written matrix against the texts it claims to cover
pub fn check_matrix(original: &Text, translation: &Text, groups: Vec<Group>) -> Result<Matrix> {
    validate_matrix(
        &original.sentence_ids(),
        &translation.sentence_ids(),
        groups,
        Stage::Stored,
    )
}

/// Reject duplicate ids within a text and links to ids missing from the
/// other text
pub fn check_input(original: &Text, translation: &Text) -> Result<()> {
    let original_ids = unique_ids(original, Side::Original)?;
    let translation_ids = unique_ids(translation, Side::Translation)?;

    check_links(original, &translation_ids, Side::Original)?;
    check_links(translation, &original_ids, Side::Translation)?;
    Ok(())
}

fn unique_ids(text: &Text, side: Side) -> Result<BTreeSet<SentenceId>> {
    let mut ids = BTreeSet::new();
    for sentence in &text.sentences {
        if !ids.insert(sentence.id) {
            return Err(AlignmentError::InvalidInput {
                side,
                problem: InputProblem::DuplicateId(sentence.id),
            });
        }
    }
    Ok(ids)
}

fn check_links(text: &Text, targets: &BTreeSet<SentenceId>, side: Side) -> Result<()> {
    for sentence in &text.sentences {
        if let Some(&missing) = sentence.links.iter().find(|id| !targets.contains(*id)) {
            return Err(AlignmentError::InvalidInput {
                side,
                problem: InputProblem::DanglingLink {
                    from: sentence.id,
                    to: missing,
                },
            });
        }
    }
    Ok(())
}
