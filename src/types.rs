//! Fragment model produced by the segmenting parser

use crate::classifier::LineCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A maximal run of consecutive lines sharing one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Joined lines, without leading or trailing newlines
    pub content: String,

    /// Category shared by every line in the run
    pub category: LineCategory,
}

impl Fragment {
    /// Build a fragment, trimming leading and trailing newline runs
    #[must_use]
    pub fn new(content: impl Into<String>, category: LineCategory) -> Self {
        let content = content.into();
        Self {
            content: content.trim_matches('\n').to_string(),
            category,
        }
    }

    /// Anything other than body text is hidden from the visible projection
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.category.is_hidden()
    }

    #[must_use]
    pub const fn is_signature(&self) -> bool {
        self.category.is_signature()
    }

    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.category.is_quoted()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// An email body split into ordered fragments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEmail {
    /// Fragments in document order
    pub fragments: Vec<Fragment>,
}

impl ParsedEmail {
    #[must_use]
    pub const fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    #[must_use]
    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }

    /// Text of all non-hidden fragments
    #[must_use]
    pub fn visible_text(&self) -> String {
        join_fragments(self.fragments.iter().filter(|f| !f.is_hidden()))
    }

    /// Text of quoted fragments only
    #[must_use]
    pub fn quoted_text(&self) -> String {
        join_fragments(self.fragments.iter().filter(|f| f.is_quoted()))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fragments.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

// Trailing tildes are left behind by upstream truncation markers
fn join_fragments<'a>(fragments: impl Iterator<Item = &'a Fragment>) -> String {
    let joined = fragments
        .map(|f| f.content.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    joined.trim_end_matches('~').to_string()
}
