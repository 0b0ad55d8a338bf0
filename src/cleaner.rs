//! Truncating cleaner
//!
//! Keeps everything above the first quoted, auto-generated or footer line and
//! drops the rest. Human sign-offs such as "Thanks, John" are body text and
//! survive.

use crate::classifier::{LineCategory, LineClassifier};
use crate::patterns::{RuleSets, SIGNATURE_DELIMITER, strip_artifacts};
use std::sync::LazyLock;
use tracing::debug;

static DEFAULT_CLEANER: LazyLock<Cleaner> = LazyLock::new(Cleaner::default);

/// Remove quoted replies, auto-signatures and mailing-list footers using the
/// built-in rules. `None` and empty input both yield an empty string.
///
/// ```rust
/// use email_body_parser::clean_text;
///
/// assert_eq!(clean_text("Hi\n\n> quoted"), "Hi");
/// assert_eq!(clean_text(None::<&str>), "");
/// ```
#[must_use]
pub fn clean_text<'a>(text: impl Into<Option<&'a str>>) -> String {
    DEFAULT_CLEANER.clean(text)
}

/// Truncating cleaner over a configurable set of rules.
/// Footer detection is always on.
#[derive(Debug, Clone)]
pub struct Cleaner {
    classifier: LineClassifier,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::with_rules(RuleSets::default())
    }
}

impl Cleaner {
    #[must_use]
    pub const fn with_rules(rules: RuleSets) -> Self {
        Self {
            classifier: LineClassifier::new(rules, true),
        }
    }

    #[must_use]
    pub fn clean<'a>(&self, text: impl Into<Option<&'a str>>) -> String {
        let Some(text) = text.into().filter(|t| !t.is_empty()) else {
            return String::new();
        };

        let stripped = strip_artifacts(text);
        let lines: Vec<&str> = stripped.split('\n').collect();
        let end = self.truncation_point(&lines);

        trim_trailing_blanks(&lines[..end]).join("\n")
    }

    /// Index of the first line to drop (exclusive end of the kept prefix)
    fn truncation_point(&self, lines: &[&str]) -> usize {
        for (idx, line) in lines.iter().enumerate() {
            let Some((category, rule)) = self.classifier.explain(line) else {
                continue;
            };

            // A "--" right above a footer belongs to the footer block
            if category == LineCategory::MailingListFooter
                && idx > 0
                && lines[idx - 1].trim() == SIGNATURE_DELIMITER
            {
                debug!(
                    "Truncating at signature delimiter on line {} before footer: {}",
                    idx - 1,
                    rule.description()
                );
                return idx - 1;
            }

            debug!("Truncating at line {idx} ({category}): {}", rule.description());
            return idx;
        }

        lines.len()
    }
}

fn trim_trailing_blanks<'a, 'b>(lines: &'b [&'a str]) -> &'b [&'a str] {
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |idx| idx + 1);
    &lines[..end]
}
