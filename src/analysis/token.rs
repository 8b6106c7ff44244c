//! Token types for text analysis.
//!
//! # Examples
//!
//! ```
//! use medsyn::analysis::token::Token;
//!
//! let token = Token::with_offsets("stroke", 1, 6, 12);
//! assert_eq!(token.text, "stroke");
//! assert_eq!(token.position, 1);
//! assert_eq!(token.len_utf16(), 6);
//! ```

use serde::{Deserialize, Serialize};

/// A single whitespace-delimited unit of a query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Length of the token text in UTF-16 code units.
    ///
    /// Token length rules count UTF-16 units, the way the web client that
    /// consumes expansions measures strings. A BMP letter such as `é` counts
    /// as 1, a character outside the BMP such as an emoji counts as 2.
    pub fn len_utf16(&self) -> usize {
        self.text.encode_utf16().count()
    }
}

/// A stream of tokens flowing through the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;
