// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Body Parser
//!
//! Extracts the human-written part of a plain-text email body by classifying
//! each line as body text, quoted reply, auto-generated signature or
//! mailing-list footer.
//!
//! # Features
//!
//! - Truncating cleaner that keeps everything above the first automated line
//! - Segmenting parser that splits a body into typed fragments
//! - Ordered, inspectable rule tables that callers can extend or replace
//! - Human sign-offs ("Best regards, Jane") are kept as body text
//!
//! # Example
//!
//! ```rust
//! use email_body_parser::{EmailBodyParser, clean_text};
//!
//! let raw = "Sounds good!\n\nOn Mon, Mar 17, 2025 at 1:29 PM John wrote:\n> Lunch?";
//! assert_eq!(clean_text(raw), "Sounds good!");
//!
//! let parsed = EmailBodyParser::default().parse(raw);
//! assert_eq!(parsed.visible_text(), "Sounds good!");
//! assert!(parsed.quoted_text().starts_with("On Mon"));
//! ```

mod classifier;
mod cleaner;
mod error;
mod options;
mod parser;
mod patterns;
mod types;

pub use classifier::{LineCategory, LineClassifier};
pub use cleaner::{Cleaner, clean_text};
pub use error::{ParseError, Result};
pub use options::ParserOptions;
pub use parser::EmailBodyParser;
pub use patterns::{
    ARTIFACT_PATTERNS, AUTO_SIGNATURE_PATTERNS, MAILING_LIST_PATTERNS, PatternRule,
    QUOTE_PATTERNS, RuleSet, RuleSets, SIGNATURE_DELIMITER, strip_artifacts,
};
pub use types::{Fragment, ParsedEmail};
