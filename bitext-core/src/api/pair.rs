//! Text pairs as supplied by the upstream link builder

use super::{align, Alignment};
use crate::domain::Blacklist;
use crate::error::Result;
use crate::types::Text;
use serde::{Deserialize, Serialize};

/// An original text, its translation and pair-specific blacklisted ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPair {
    /// Optional prefix for output names (e.g. treebank and release)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// The original text with links into the translation
    pub original: Text,
    /// The translation with links into the original
    pub translation: Text,
    /// Ids to ignore for this pair only
    #[serde(default, skip_serializing_if = "Blacklist::is_empty")]
    pub blacklist: Blacklist,
}

impl TextPair {
    /// Create a pair without label or blacklist
    pub fn new(original: Text, translation: Text) -> Self {
        Self {
            label: None,
            original,
            translation,
            blacklist: Blacklist::new(),
        }
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the pair-specific blacklist
    pub fn with_blacklist(mut self, blacklist: Blacklist) -> Self {
        self.blacklist = blacklist;
        self
    }

    /// Name used for output files: `{label}-{original}-{translation}`
    ///
    /// Path separators and control characters are replaced by `_`, so the
    /// name is always a single file name component.
    pub fn name(&self) -> String {
        let name = match &self.label {
            Some(label) => format!("{label}-{}-{}", self.original.id, self.translation.id),
            None => format!("{}-{}", self.original.id, self.translation.id),
        };
        name.chars()
            .map(|c| match c {
                '/' | '\\' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect()
    }

    /// Align the pair, combining its own blacklist with `extra`
    pub fn align(&self, extra: &Blacklist) -> Result<Alignment> {
        if extra.is_empty() {
            return align(&self.original, &self.translation, &self.blacklist);
        }

        let mut blacklist = self.blacklist.clone();
        blacklist.merge(extra);
        align(&self.original, &self.translation, &blacklist)
    }
}
