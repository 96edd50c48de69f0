//! End-to-end alignment scenarios
//!
//! Each test builds both texts with their link sets and runs the whole
//! pipeline: blacklist, both groupers, reconciliation and validation.

use bitext_core::{
    align, compute_matrix, AlignmentError, Blacklist, Group, RepairWindow, SentenceId,
    SentenceLinks, Text,
};

fn ids(raw: &[u64]) -> Vec<SentenceId> {
    raw.iter().copied().map(SentenceId).collect()
}

fn group(original: &[u64], translation: &[u64]) -> Group {
    Group::new(ids(original), ids(translation))
}

fn text(id: &str, sentences: &[(u64, &[u64])]) -> Text {
    Text::new(
        id,
        sentences
            .iter()
            .map(|&(sentence, links)| SentenceLinks::new(sentence, links.iter().copied()))
            .collect(),
    )
}

fn window(extra_backward: usize, extra_forward: usize) -> RepairWindow {
    RepairWindow {
        extra_backward,
        extra_forward,
    }
}

#[test]
fn test_one_to_one_alignment() {
    let original = text("o", &[(1, &[10]), (2, &[11]), (3, &[12])]);
    let translation = text("t", &[(10, &[1]), (11, &[2]), (12, &[3])]);

    let matrix = compute_matrix(&original, &translation, &Blacklist::new()).unwrap();
    assert_eq!(
        matrix.groups(),
        &[group(&[1], &[10]), group(&[2], &[11]), group(&[3], &[12])]
    );
}

#[test]
fn test_all_unaligned_is_drained_without_repairs() {
    let original = text("o", &[(1, &[]), (2, &[]), (3, &[])]);
    let translation = text("t", &[(10, &[]), (11, &[])]);

    let alignment = align(&original, &translation, &Blacklist::new()).unwrap();
    assert!(alignment.repairs.is_empty());
    assert_eq!(
        alignment.matrix.groups(),
        &[
            group(&[1], &[]),
            group(&[2], &[]),
            group(&[3], &[]),
            group(&[], &[10]),
            group(&[], &[11]),
        ]
    );
}

#[test]
fn test_merge_case_resolves_at_smallest_window() {
    let original = text("o", &[(1, &[10]), (2, &[10, 11])]);
    let translation = text("t", &[(10, &[1, 2]), (11, &[2])]);

    let alignment = align(&original, &translation, &Blacklist::new()).unwrap();

    assert_eq!(alignment.backward, vec![group(&[1, 2], &[10, 11])]);
    assert_eq!(alignment.forward, vec![group(&[1, 2], &[10, 11])]);
    assert_eq!(alignment.matrix.groups(), &[group(&[1, 2], &[10, 11])]);
    assert_eq!(alignment.repairs, vec![window(0, 0)]);
}

#[test]
fn test_crossed_pair_is_repaired() {
    // 1 <-> 11 and 2 <-> 10: each grouping has two singleton entries
    let original = text("o", &[(1, &[11]), (2, &[10])]);
    let translation = text("t", &[(10, &[2]), (11, &[1])]);

    let alignment = align(&original, &translation, &Blacklist::new()).unwrap();
    assert_eq!(alignment.matrix.groups(), &[group(&[1, 2], &[10, 11])]);
    assert_eq!(alignment.repairs, vec![window(1, 1)]);
}

#[test]
fn test_smallest_qualifying_window_wins() {
    // The crossed pair is followed by an aligned pair. Window (2, 2) would
    // also match, but (1, 1) comes first and leaves 3 <-> 12 on its own.
    let original = text("o", &[(1, &[11]), (2, &[10]), (3, &[12])]);
    let translation = text("t", &[(10, &[2]), (11, &[1]), (12, &[3])]);

    let alignment = align(&original, &translation, &Blacklist::new()).unwrap();
    assert_eq!(
        alignment.matrix.groups(),
        &[group(&[1, 2], &[10, 11]), group(&[3], &[12])]
    );
    assert_eq!(alignment.repairs, vec![window(1, 1), window(0, 0)]);
}

#[test]
fn test_one_original_many_translations() {
    let original = text("o", &[(1, &[10, 11]), (2, &[12])]);
    let translation = text("t", &[(10, &[1]), (11, &[1]), (12, &[2])]);

    let alignment = align(&original, &translation, &Blacklist::new()).unwrap();
    assert_eq!(alignment.forward[0], group(&[1], &[10, 11]));
    assert_eq!(
        alignment.matrix.groups(),
        &[group(&[1], &[10, 11]), group(&[2], &[12])]
    );
    assert_eq!(alignment.repairs, vec![window(0, 0), window(0, 0)]);
}

#[test]
fn test_split_original_against_merged_translation() {
    // Original 2 links only 11, but translation 11 claims originals 2 and 3
    let original = text("o", &[(1, &[10]), (2, &[11]), (3, &[12])]);
    let translation = text("t", &[(10, &[1]), (11, &[2, 3]), (12, &[3])]);

    let alignment = align(&original, &translation, &Blacklist::new()).unwrap();
    assert_eq!(
        alignment.matrix.groups(),
        &[group(&[1], &[10]), group(&[2, 3], &[11, 12])]
    );
    assert_eq!(alignment.repairs, vec![window(0, 0), window(1, 0)]);
}

#[test]
fn test_unaligned_sentences_inside_alignment() {
    let original = text("o", &[(1, &[10]), (2, &[]), (3, &[12])]);
    let translation = text("t", &[(10, &[1]), (11, &[]), (12, &[3])]);

    let matrix = compute_matrix(&original, &translation, &Blacklist::new()).unwrap();
    assert_eq!(
        matrix.groups(),
        &[
            group(&[1], &[10]),
            group(&[2], &[]),
            group(&[], &[11]),
            group(&[3], &[12]),
        ]
    );
}

#[test]
fn test_irreconcilable_links_raise_gap() {
    // Original 1 claims translation 10, which claims original 2 instead
    let original = text("o", &[(1, &[10]), (2, &[])]);
    let translation = text("t", &[(10, &[2])]);

    let error = compute_matrix(&original, &translation, &Blacklist::new()).unwrap_err();
    assert_eq!(
        error,
        AlignmentError::IrreparableAlignmentGap {
            backward_position: 0,
            forward_position: 0,
            backward_entry: group(&[1], &[10]),
            forward_entry: group(&[2], &[10]),
        }
    );
}

#[test]
fn test_reversed_text_exceeds_every_window() {
    // Ten originals linked to the translation in reverse order: no window of
    // at most five entries per side covers matching sentence sets.
    let n = 10u64;
    let original: Vec<(u64, Vec<u64>)> = (1..=n).map(|i| (i, vec![100 + i])).collect();
    let translation: Vec<(u64, Vec<u64>)> = (1..=n).map(|i| (100 + i, vec![n + 1 - i])).collect();

    let to_text = |id: &str, sentences: &[(u64, Vec<u64>)]| {
        Text::new(
            id,
            sentences
                .iter()
                .map(|(sentence, links)| SentenceLinks::new(*sentence, links.iter().copied()))
                .collect(),
        )
    };

    let result = compute_matrix(
        &to_text("o", &original),
        &to_text("t", &translation),
        &Blacklist::new(),
    );

    match result {
        Err(AlignmentError::IrreparableAlignmentGap {
            backward_position,
            forward_position,
            ..
        }) => {
            assert_eq!(backward_position, 0);
            assert_eq!(forward_position, 0);
        }
        other => panic!("expected alignment gap, got {other:?}"),
    }
}

#[test]
fn test_gap_after_aligned_prefix_returns_no_matrix() {
    let original = text("o", &[(1, &[10]), (2, &[11]), (3, &[])]);
    let translation = text("t", &[(10, &[1]), (11, &[3])]);

    // Translation 11 claims original 3, which links nothing back, so the
    // reconciler cannot match [2] against [3].
    let error = compute_matrix(&original, &translation, &Blacklist::new()).unwrap_err();
    match error {
        AlignmentError::IrreparableAlignmentGap {
            backward_position,
            forward_position,
            backward_entry,
            forward_entry,
        } => {
            assert_eq!(backward_position, 1);
            assert_eq!(forward_position, 1);
            assert_eq!(backward_entry, group(&[2], &[11]));
            assert_eq!(forward_entry, group(&[3], &[11]));
        }
        other => panic!("expected alignment gap, got {other:?}"),
    }
}

#[test]
fn test_blacklist_unaligns_sentence() {
    let original = text("o", &[(1, &[10]), (47183, &[11]), (2, &[12])]);
    let translation = text("t", &[(10, &[1]), (11, &[47183]), (12, &[2])]);
    let blacklist: Blacklist = [47183u64].into_iter().collect();

    let matrix = compute_matrix(&original, &translation, &blacklist).unwrap();
    assert_eq!(
        matrix.groups(),
        &[
            group(&[1], &[10]),
            group(&[47183], &[]),
            group(&[], &[11]),
            group(&[2], &[12]),
        ]
    );
}

#[test]
fn test_identical_input_gives_identical_output() {
    let original = text("o", &[(1, &[11]), (2, &[10]), (3, &[]), (4, &[12, 13])]);
    let translation = text("t", &[(10, &[2]), (11, &[1]), (12, &[4]), (13, &[4])]);

    let first = align(&original, &translation, &Blacklist::new()).unwrap();
    let second = align(&original, &translation, &Blacklist::new()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_texts() {
    let matrix = compute_matrix(&text("o", &[]), &text("t", &[]), &Blacklist::new()).unwrap();
    assert!(matrix.is_empty());
}
