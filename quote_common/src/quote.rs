//! Quote payload returned by the quote API.
//!
//! The service answers with a JSON object carrying more fields than we use
//! (`_id`, `tags`, `length`, ...). Only `content` and `author` are required;
//! everything else is ignored.
use std::fmt;

use serde::Deserialize;

use crate::result::Result;

/// A single quotation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    /// Quotation text.
    pub content: String,
    /// Who said or wrote it.
    pub author: String,
}

impl Quote {
    /// Decode a response body into a `Quote`.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Quote> {
        let quote = serde_json::from_slice(bytes)?;
        Ok(quote)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.content, self.author)
    }
}
