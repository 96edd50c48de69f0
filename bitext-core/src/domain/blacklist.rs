//! Sentences excluded from alignment
//!
//! Blacklisted sentences (lacunae, doubtful passages) stay in their text but
//! are treated as unaligned: their own links are dropped and no other
//! sentence may link to them.

use crate::types::{SentenceId, SentenceLinks, Text};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of sentence ids whose links are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blacklist {
    ids: BTreeSet<SentenceId>,
}

impl Blacklist {
    /// An empty blacklist
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is blacklisted
    pub fn contains(&self, id: SentenceId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of blacklisted ids
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is blacklisted
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Add all ids of `other`
    pub fn merge(&mut self, other: &Blacklist) {
        self.ids.extend(other.ids.iter().copied());
    }

    /// Copy of `text` with blacklisted links removed
    pub fn filter(&self, text: &Text) -> Text {
        if self.is_empty() {
            return text.clone();
        }

        let sentences = text
            .sentences
            .iter()
            .map(|sentence| {
                let links = if self.contains(sentence.id) {
                    BTreeSet::new()
                } else {
                    sentence
                        .links
                        .iter()
                        .copied()
                        .filter(|id| !self.contains(*id))
                        .collect()
                };
                SentenceLinks {
                    id: sentence.id,
                    links,
                }
            })
            .collect();

        Text::new(text.id.clone(), sentences)
    }
}

impl<I: Into<SentenceId>> FromIterator<I> for Blacklist {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<I: Into<SentenceId>> Extend<I> for Blacklist {
    fn extend<T: IntoIterator<Item = I>>(&mut self, iter: T) {
        self.ids.extend(iter.into_iter().map(Into::into));
    }
}
