//! Parser configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Options for [`EmailBodyParser`](crate::EmailBodyParser)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Reserved. Signature lines always get their own fragment.
    #[serde(alias = "keepSignatures")]
    pub keep_signatures: bool,

    /// Reserved. Disclaimers are covered by the auto-signature rules.
    #[serde(alias = "removeDisclaimers")]
    pub remove_disclaimers: bool,

    /// Classify mailing-list footers; when off, footer lines are body text
    #[serde(alias = "removeMailingListFooters")]
    pub remove_mailing_list_footers: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            keep_signatures: true,
            remove_disclaimers: true,
            remove_mailing_list_footers: true,
        }
    }
}

impl ParserOptions {
    /// Read options from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
