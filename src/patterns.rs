//! Pattern tables used to classify email body lines
//!
//! Each category is an ordered [`RuleSet`]. Order matters: the first rule that
//! matches a line decides which rule is reported, and several rules overlap
//! (an underscore divider also looks like a header separator, for instance).

use crate::error::{ParseError, Result};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// RFC 3676 signature delimiter, compared against trimmed lines
pub const SIGNATURE_DELIMITER: &str = "--";

/// A single line detector with documentation metadata
#[derive(Debug, Clone)]
pub struct PatternRule {
    pattern: Regex,
    description: Cow<'static, str>,
    example: Cow<'static, str>,
}

impl PatternRule {
    /// Compile a rule from a regular expression string
    pub fn new(
        pattern: &str,
        description: impl Into<Cow<'static, str>>,
        example: impl Into<Cow<'static, str>>,
    ) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| ParseError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self::from_regex(regex, description, example))
    }

    /// Wrap an already compiled regular expression
    #[must_use]
    pub fn from_regex(
        pattern: Regex,
        description: impl Into<Cow<'static, str>>,
        example: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            pattern,
            description: description.into(),
            example: example.into(),
        }
    }

    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    /// Source of the underlying regular expression
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Sample text this rule is meant to catch (documentation only)
    #[must_use]
    pub fn example(&self) -> &str {
        &self.example
    }
}

/// Named, ordered collection of rules for one line category
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: Cow<'static, str>,
    rules: Vec<PatternRule>,
}

impl RuleSet {
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        rules: impl IntoIterator<Item = PatternRule>,
    ) -> Self {
        Self {
            name: name.into(),
            rules: rules.into_iter().collect(),
        }
    }

    /// A rule set that never matches
    #[must_use]
    pub fn empty(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, [])
    }

    /// Return this set extended with one more rule, evaluated last
    #[must_use]
    pub fn with_rule(mut self, rule: PatternRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// First rule matching the line, in declaration order
    #[must_use]
    pub fn find(&self, line: &str) -> Option<&PatternRule> {
        self.rules.iter().find(|rule| rule.is_match(line))
    }

    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        self.find(line).is_some()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Rules in evaluation order
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, PatternRule> {
        self.rules.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a PatternRule;
    type IntoIter = std::slice::Iter<'a, PatternRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// The three line rule sets used by the classifier
#[derive(Debug, Clone)]
pub struct RuleSets {
    pub quote: RuleSet,
    pub auto_signature: RuleSet,
    pub mailing_list_footer: RuleSet,
}

impl Default for RuleSets {
    fn default() -> Self {
        Self {
            quote: QUOTE_PATTERNS.clone(),
            auto_signature: AUTO_SIGNATURE_PATTERNS.clone(),
            mailing_list_footer: MAILING_LIST_PATTERNS.clone(),
        }
    }
}

// (pattern, description, example)
type BuiltinRule = (&'static str, &'static str, &'static str);

const QUOTE_RULES: &[BuiltinRule] = &[
    (r"^>+", "Traditional quote prefix", "> previous message text"),
    (
        r"(?i)^On\s.+\swrote:$",
        "Reply attribution line",
        "On March 17, 2025, John Smith wrote:",
    ),
    (
        r"(?i)^-*\s*Original Message\s*-*$",
        "Forwarded message header",
        "-----Original Message-----",
    ),
    (
        r"(?i)^From:.+Sent:.+$",
        "Email metadata header",
        "From: sender@mail.com Sent: Monday 3:00 PM",
    ),
    // Unanchored on purpose: compressed Outlook exports glue these headers
    // onto the end of other text. Can over-match prose naming all four fields.
    (
        r"(?i)From:.+Date:.+To:.+Subject:",
        "Concatenated email headers",
        "From: a@b.comDate: Jan 1To: c@d.comSubject: Hi",
    ),
    (r"^_{8,}$", "Underscore divider", "________________"),
    (
        r"^[\x{200B}-\x{200F}\x{202A}-\x{202E}]",
        "Unicode control character divider",
        "\u{200B}From: sender@mail.com",
    ),
];

const AUTO_SIGNATURE_RULES: &[BuiltinRule] = &[
    (r"^--$", "RFC signature delimiter", "--"),
    (
        r"(?i)^Sent from my\s",
        "Mobile device tagline",
        "Sent from my iPhone",
    ),
    (
        r"(?i)^Get Outlook for\s",
        "Email client promotion",
        "Get Outlook for Android",
    ),
    (
        r"(?i)^Sent (via|with)\s",
        "Third-party app tagline",
        "Sent via Superhuman",
    ),
    (
        r"(?i)BOOK A MEETING",
        "Calendar booking link",
        "BOOK A MEETING: https://example.com/book",
    ),
    (r"^=+$", "Equals sign divider", "========"),
    (
        r"(?i)^(CONFIDENTIAL|DISCLAIMER|NOTICE):",
        "Legal notice header",
        "CONFIDENTIAL: This email...",
    ),
    (
        r"(?i)confidential.*intended.*recipient",
        "Legal boilerplate text",
        "...confidential and intended solely for the recipient...",
    ),
];

const MAILING_LIST_RULES: &[BuiltinRule] = &[
    (
        r"(?i)^You received this (message|email) because",
        "Mailing list attribution",
        "You received this message because you are subscribed...",
    ),
    (
        r"(?i)^To (unsubscribe|stop receiving)",
        "Unsubscribe instruction",
        "To unsubscribe, click here",
    ),
    (
        r"(?i)^To view this (discussion|thread)",
        "Web view link",
        "To view this discussion online...",
    ),
    (
        r"(?i)^(Manage|Update) your (subscription|preferences)",
        "Preferences link",
        "Manage your subscription settings",
    ),
    (
        r"(?i)^This email was sent to\s",
        "Recipient notice",
        "This email was sent to user@example.com",
    ),
    (
        r"(?i)^(Click|Tap) here to unsubscribe",
        "Unsubscribe CTA",
        "Click here to unsubscribe",
    ),
    (
        r"(?i)^If you (no longer|don't) (wish|want) to receive",
        "Opt-out notice",
        "If you no longer wish to receive these emails...",
    ),
];

// Matches never cross a newline, so stripping cannot merge two lines.
const ARTIFACT_RULES: &[BuiltinRule] = &[
    (
        r"(?i)\[image:[^\]\n]*\]",
        "Inline image reference",
        "[image: photo.jpg]",
    ),
    (r"(?i)\[Image\]", "Generic image tag", "[Image]"),
    (
        r"(?i)\[cid:[^\]\n]*\]",
        "Content-ID reference",
        "[cid:img001@domain.com]",
    ),
];

fn compile(name: &'static str, rules: &[BuiltinRule]) -> RuleSet {
    RuleSet::new(
        name,
        rules.iter().map(|&(pattern, description, example)| {
            PatternRule::from_regex(Regex::new(pattern).unwrap(), description, example)
        }),
    )
}

/// Detectors for quoted or forwarded content
pub static QUOTE_PATTERNS: LazyLock<RuleSet> =
    LazyLock::new(|| compile("quote", QUOTE_RULES));

/// Detectors for machine-appended signatures (not human sign-offs)
pub static AUTO_SIGNATURE_PATTERNS: LazyLock<RuleSet> =
    LazyLock::new(|| compile("auto_signature", AUTO_SIGNATURE_RULES));

/// Detectors for mailing list and newsletter footers
pub static MAILING_LIST_PATTERNS: LazyLock<RuleSet> =
    LazyLock::new(|| compile("mailing_list_footer", MAILING_LIST_RULES));

/// Inline placeholders removed before classification
pub static ARTIFACT_PATTERNS: LazyLock<RuleSet> =
    LazyLock::new(|| compile("artifact", ARTIFACT_RULES));

/// Remove image and content-id placeholders from the text.
///
/// Repeats until no placeholder is left: removing one tag can join the text
/// around it into another (`[i[Image]mage: a.png]`).
#[must_use]
pub fn strip_artifacts(text: &str) -> String {
    let mut result = text.to_string();
    while ARTIFACT_PATTERNS.is_match(&result) {
        result = ARTIFACT_PATTERNS.iter().fold(result, |acc, rule| {
            rule.pattern.replace_all(&acc, "").into_owned()
        });
    }
    result
}
