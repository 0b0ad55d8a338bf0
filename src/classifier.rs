//! Line classification

use crate::patterns::{PatternRule, RuleSets};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Category assigned to a single line of an email body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCategory {
    /// Human-authored content
    #[default]
    Body,
    /// Quoted reply, attribution line or forwarded-message divider
    Quote,
    /// Machine-appended tagline or legal boilerplate
    AutoSignature,
    /// Unsubscribe and subscription-management boilerplate
    MailingListFooter,
}

impl LineCategory {
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        !matches!(self, Self::Body)
    }

    #[must_use]
    pub const fn is_signature(self) -> bool {
        matches!(self, Self::AutoSignature)
    }

    #[must_use]
    pub const fn is_quoted(self) -> bool {
        matches!(self, Self::Quote)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Quote => "quote",
            Self::AutoSignature => "auto_signature",
            Self::MailingListFooter => "mailing_list_footer",
        }
    }
}

impl fmt::Display for LineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Assigns a [`LineCategory`] to lines using a strict priority cascade:
/// quote rules, then auto-signature rules, then (when enabled) mailing-list
/// footer rules. Anything left over is body text.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    rules: RuleSets,
    detect_footers: bool,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(RuleSets::default(), true)
    }
}

impl LineClassifier {
    #[must_use]
    pub const fn new(rules: RuleSets, detect_footers: bool) -> Self {
        Self {
            rules,
            detect_footers,
        }
    }

    /// Classify a line. Surrounding whitespace is ignored.
    #[must_use]
    pub fn classify(&self, line: &str) -> LineCategory {
        self.explain(line)
            .map_or(LineCategory::Body, |(category, rule)| {
                trace!("Classified line as {}: {}", category, rule.description());
                category
            })
    }

    /// Category and the rule that fired, or `None` for body text
    #[must_use]
    pub fn explain(&self, line: &str) -> Option<(LineCategory, &PatternRule)> {
        let line = line.trim();

        self.rules
            .quote
            .find(line)
            .map(|rule| (LineCategory::Quote, rule))
            .or_else(|| {
                self.rules
                    .auto_signature
                    .find(line)
                    .map(|rule| (LineCategory::AutoSignature, rule))
            })
            .or_else(|| {
                if self.detect_footers {
                    self.rules
                        .mailing_list_footer
                        .find(line)
                        .map(|rule| (LineCategory::MailingListFooter, rule))
                } else {
                    None
                }
            })
    }

    #[must_use]
    pub const fn detects_footers(&self) -> bool {
        self.detect_footers
    }

    #[must_use]
    pub const fn rules(&self) -> &RuleSets {
        &self.rules
    }
}
