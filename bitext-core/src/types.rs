//! Type definitions shared across the alignment pipeline
//!
//! Sentences are identified by opaque numeric ids that are unique within
//! their own text. A [`Group`] pairs an ordered run of original sentences
//! with an ordered run of translation sentences; the full ordered list of
//! groups for a text pair is a [`Matrix`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a sentence within one text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentenceId(pub u64);

impl From<u64> for SentenceId {
    fn from(id: u64) -> Self {
        SentenceId(id)
    }
}

impl FromStr for SentenceId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(SentenceId)
    }
}

impl fmt::Display for SentenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two texts of a bitext
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The original text
    Original,
    /// The translation of the original
    Translation,
}

impl Side {
    /// The opposite side
    pub fn other(self) -> Self {
        match self {
            Side::Original => Side::Translation,
            Side::Translation => Side::Original,
        }
    }

    /// Lowercase name used in messages and file headers
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Original => "original",
            Side::Translation => "translation",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Input Types
// ============================================================================

/// A sentence together with the ids it is linked to in the other text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceLinks {
    /// Sentence id, unique within its text
    pub id: SentenceId,
    /// Linked sentence ids in the other text (empty when unaligned)
    #[serde(default)]
    pub links: BTreeSet<SentenceId>,
}

impl SentenceLinks {
    /// Create a sentence with the given links
    pub fn new<I, L>(id: impl Into<SentenceId>, links: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<SentenceId>,
    {
        Self {
            id: id.into(),
            links: links.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a sentence without any links
    pub fn unaligned(id: impl Into<SentenceId>) -> Self {
        Self {
            id: id.into(),
            links: BTreeSet::new(),
        }
    }

    /// Whether the sentence has no links at all
    pub fn is_unaligned(&self) -> bool {
        self.links.is_empty()
    }
}

/// One text of a bitext: its identifier and its sentences in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// Identifier of the text (e.g. a treebank source id)
    pub id: String,
    /// Sentences in text order
    pub sentences: Vec<SentenceLinks>,
}

impl Text {
    /// Create a text from its sentences
    pub fn new(id: impl Into<String>, sentences: Vec<SentenceLinks>) -> Self {
        Self {
            id: id.into(),
            sentences,
        }
    }

    /// Sentence ids in text order
    pub fn sentence_ids(&self) -> Vec<SentenceId> {
        self.sentences.iter().map(|s| s.id).collect()
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the text has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

// ============================================================================
// Output Types
// ============================================================================

/// An aligned chunk: original sentences and the translation sentences
/// that correspond to them
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group {
    /// Original sentence ids in original order
    pub original: Vec<SentenceId>,
    /// Translation sentence ids in translation order
    pub translation: Vec<SentenceId>,
}

impl Group {
    /// Create a group from both sides
    pub fn new(original: Vec<SentenceId>, translation: Vec<SentenceId>) -> Self {
        Self {
            original,
            translation,
        }
    }

    /// Ids on the given side
    pub fn ids(&self, side: Side) -> &[SentenceId] {
        match side {
            Side::Original => &self.original,
            Side::Translation => &self.translation,
        }
    }

    /// True when one side is empty (a pure insertion)
    pub fn is_unaligned(&self) -> bool {
        self.original.is_empty() || self.translation.is_empty()
    }

    /// True when both sides are empty, which no valid matrix contains
    pub fn is_empty(&self) -> bool {
        self.original.is_empty() && self.translation.is_empty()
    }
}

fn write_ids(f: &mut fmt::Formatter<'_>, ids: &[SentenceId]) -> fmt::Result {
    f.write_str("[")?;
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{id}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("original ")?;
        write_ids(f, &self.original)?;
        f.write_str(" / translation ")?;
        write_ids(f, &self.translation)
    }
}

/// Ordered list of groups covering both texts of a pair
///
/// A matrix is only built by the reconciler, which has already checked that
/// every original and every translation sentence occurs exactly once and in
/// text order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    groups: Vec<Group>,
}

impl Matrix {
    pub(crate) fn from_groups(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Groups in order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Consume the matrix and return its groups
    pub fn into_groups(self) -> Vec<Group> {
        self.groups
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the matrix has no groups (both texts empty)
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over groups
    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// All ids on one side, concatenated in group order
    pub fn ids(&self, side: Side) -> Vec<SentenceId> {
        self.groups
            .iter()
            .flat_map(|g| g.ids(side).iter().copied())
            .collect()
    }

    /// Summary counts over the groups
    pub fn summary(&self) -> MatrixSummary {
        let mut summary = MatrixSummary {
            groups: self.groups.len(),
            ..MatrixSummary::default()
        };

        for group in &self.groups {
            match (group.original.len(), group.translation.len()) {
                (0, n) => summary.unaligned_translations += n,
                (n, 0) => summary.unaligned_originals += n,
                (1, 1) => summary.one_to_one += 1,
                _ => summary.merged += 1,
            }
        }

        summary
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Counts describing the shape of a matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixSummary {
    /// Total number of groups
    pub groups: usize,
    /// Groups pairing exactly one original with one translation sentence
    pub one_to_one: usize,
    /// Aligned groups with more than one sentence on some side
    pub merged: usize,
    /// Original sentences without a translation counterpart
    pub unaligned_originals: usize,
    /// Translation sentences without an original counterpart
    pub unaligned_translations: usize,
}
