//! Segmenting parser

use crate::classifier::{LineCategory, LineClassifier};
use crate::options::ParserOptions;
use crate::patterns::{RuleSets, strip_artifacts};
use crate::types::{Fragment, ParsedEmail};
use tracing::debug;

/// Splits an email body into typed fragments: body, quoted reply,
/// auto-signature and mailing-list footer.
#[derive(Debug, Clone)]
pub struct EmailBodyParser {
    options: ParserOptions,
    classifier: LineClassifier,
}

impl Default for EmailBodyParser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl EmailBodyParser {
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self::with_rules(options, RuleSets::default())
    }

    /// Parser using caller-supplied rule sets instead of the built-in ones
    #[must_use]
    pub const fn with_rules(options: ParserOptions, rules: RuleSets) -> Self {
        Self {
            classifier: LineClassifier::new(rules, options.remove_mailing_list_footers),
            options,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse email text into categorized fragments.
    /// `None` and empty input yield no fragments.
    #[must_use]
    pub fn parse<'a>(&self, input: impl Into<Option<&'a str>>) -> ParsedEmail {
        let Some(input) = input.into().filter(|s| !s.is_empty()) else {
            return ParsedEmail::default();
        };

        let text = strip_artifacts(&input.replace("\r\n", "\n"));

        let mut segmenter = Segmenter::default();
        for line in text.split('\n') {
            segmenter.push(line, self.classifier.classify(line));
        }

        let parsed = ParsedEmail::new(segmenter.finish());
        debug!("Parsed email body into {} fragments", parsed.len());
        parsed
    }

    /// Shorthand for `parse(input).visible_text()`
    #[must_use]
    pub fn extract_visible_text<'a>(&self, input: impl Into<Option<&'a str>>) -> String {
        self.parse(input).visible_text()
    }

    /// Shorthand for `parse(input).quoted_text()`
    #[must_use]
    pub fn extract_quoted_text<'a>(&self, input: impl Into<Option<&'a str>>) -> String {
        self.parse(input).quoted_text()
    }
}

/// Accumulates consecutive same-category lines
#[derive(Default)]
struct Segmenter<'a> {
    buffer: Vec<&'a str>,
    category: LineCategory,
    fragments: Vec<Fragment>,
}

impl<'a> Segmenter<'a> {
    fn push(&mut self, line: &'a str, category: LineCategory) {
        if category != self.category && !self.buffer.is_empty() {
            self.flush();
        }
        self.category = category;
        self.buffer.push(line);
    }

    fn flush(&mut self) {
        self.fragments
            .push(Fragment::new(self.buffer.join("\n"), self.category));
        self.buffer.clear();
    }

    fn finish(mut self) -> Vec<Fragment> {
        if !self.buffer.is_empty() {
            self.flush();
        }
        self.fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segmenter_groups_runs() {
        let mut segmenter = Segmenter::default();
        segmenter.push("a", LineCategory::Body);
        segmenter.push("b", LineCategory::Body);
        segmenter.push("> c", LineCategory::Quote);
        segmenter.push("d", LineCategory::Body);

        let fragments = segmenter.finish();
        let contents: Vec<&str> = fragments.iter().map(|f| f.content.as_str()).collect();
        assert_eq!(contents, ["a\nb", "> c", "d"]);
    }

    #[test]
    fn segmenter_without_lines_is_empty() {
        assert!(Segmenter::default().finish().is_empty());
    }
}
