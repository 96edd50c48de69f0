//! Forward and backward grouping of linked sentences
//!
//! Each grouper walks one text in order and chunks neighbouring sentences
//! whose link sets overlap. The forward grouper walks the translation and
//! yields entries in translation order; the backward grouper walks the
//! original and yields entries in original order. Only neighbouring
//! sentences are compared, so two sentences linked to the same counterpart
//! but separated by a non-overlapping one end up in different entries.

use super::validate::check_coverage;
use crate::error::{Result, Stage};
use crate::types::{Group, SentenceId, SentenceLinks, Side, Text};
use std::collections::BTreeSet;
use std::fmt;

/// Entries produced by one grouper, in the walked text's order
pub type Grouping = Vec<Group>;

/// Which text a grouper walks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupingKind {
    /// Walks the translation, collecting linked originals
    Forward,
    /// Walks the original, collecting linked translations
    Backward,
}

impl GroupingKind {
    /// Side whose sentences are walked
    pub fn walked_side(self) -> Side {
        match self {
            GroupingKind::Forward => Side::Translation,
            GroupingKind::Backward => Side::Original,
        }
    }
}

impl fmt::Display for GroupingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupingKind::Forward => f.write_str("forward"),
            GroupingKind::Backward => f.write_str("backward"),
        }
    }
}

/// Group translation sentences that share linked originals
pub fn group_forward(translation: &Text) -> Result<Grouping> {
    group(translation, GroupingKind::Forward)
}

/// Group original sentences that share linked translations
pub fn group_backward(original: &Text) -> Result<Grouping> {
    group(original, GroupingKind::Backward)
}

fn group(text: &Text, kind: GroupingKind) -> Result<Grouping> {
    let grouping: Grouping = chunk_overlapping(&text.sentences)
        .into_iter()
        .map(|chunk| chunk.into_group(kind))
        .collect();

    check_coverage(
        &text.sentence_ids(),
        &grouping,
        kind.walked_side(),
        Stage::Grouping(kind),
    )?;

    Ok(grouping)
}

/// Sentences of the walked text merged into one entry
#[derive(Debug, Default)]
struct Chunk {
    walked: Vec<SentenceId>,
    linked: Vec<SentenceId>,
    seen: BTreeSet<SentenceId>,
}

impl Chunk {
    fn push(&mut self, sentence: &SentenceLinks) {
        self.walked.push(sentence.id);
        for &id in &sentence.links {
            if self.seen.insert(id) {
                self.linked.push(id);
            }
        }
    }

    fn into_group(self, kind: GroupingKind) -> Group {
        match kind {
            GroupingKind::Forward => Group::new(self.linked, self.walked),
            GroupingKind::Backward => Group::new(self.walked, self.linked),
        }
    }
}

fn chunk_overlapping(sentences: &[SentenceLinks]) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut previous: Option<&SentenceLinks> = None;

    for sentence in sentences {
        let overlaps = previous.is_some_and(|prev| !prev.links.is_disjoint(&sentence.links));

        match chunks.last_mut() {
            Some(chunk) if overlaps => chunk.push(sentence),
            _ => {
                let mut chunk = Chunk::default();
                chunk.push(sentence);
                chunks.push(chunk);
            }
        }

        previous = Some(sentence);
    }

    chunks
}
