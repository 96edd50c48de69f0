//! Coverage and ordering checks for groupings and matrices

use crate::error::{AlignmentError, Result, Stage, Violation};
use crate::types::{Group, Matrix, SentenceId, Side};

/// Check that the ids of `side`, concatenated over `groups`, reproduce
/// `expected` exactly.
pub fn check_coverage(
    expected: &[SentenceId],
    groups: &[Group],
    side: Side,
    stage: Stage,
) -> Result<()> {
    let mut found = groups.iter().flat_map(|g| g.ids(side).iter().copied());

    for (position, &want) in expected.iter().enumerate() {
        match found.next() {
            Some(got) if got == want => {}
            got => {
                return Err(AlignmentError::violation(
                    stage,
                    Violation::Coverage {
                        side,
                        position,
                        expected: Some(want),
                        found: got,
                    },
                ))
            }
        }
    }

    if let Some(extra) = found.next() {
        return Err(AlignmentError::violation(
            stage,
            Violation::Coverage {
                side,
                position: expected.len(),
                expected: None,
                found: Some(extra),
            },
        ));
    }

    Ok(())
}

/// Check that no group is empty on both sides
pub fn check_non_empty(groups: &[Group], stage: Stage) -> Result<()> {
    match groups.iter().position(Group::is_empty) {
        Some(position) => Err(AlignmentError::violation(
            stage,
            Violation::EmptyGroup { position },
        )),
        None => Ok(()),
    }
}

/// Validate a complete group list against both sequences and wrap it as a
/// [`Matrix`]
pub fn validate_matrix(
    original: &[SentenceId],
    translation: &[SentenceId],
    groups: Vec<Group>,
    stage: Stage,
) -> Result<Matrix> {
    check_non_empty(&groups, stage)?;
    check_coverage(original, &groups, Side::Original, stage)?;
    check_coverage(translation, &groups, Side::Translation, stage)?;
    Ok(Matrix::from_groups(groups))
}
