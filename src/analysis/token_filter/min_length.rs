//! Minimum length filter implementation.
//!
//! Single characters left in a query (stray letters, punctuation remnants)
//! are noise for synonym lookup, so the query pipeline drops them before
//! expansion.
//!
//! # Examples
//!
//! ```
//! use medsyn::analysis::token_filter::Filter;
//! use medsyn::analysis::token_filter::min_length::MinLengthFilter;
//! use medsyn::analysis::token::Token;
//!
//! let filter = MinLengthFilter::new(2);
//! let tokens = vec![Token::new("a", 0), Token::new("mi", 1), Token::new("b", 2)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "mi");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default minimum token length: tokens of one character are discarded.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 2;

/// A filter that removes tokens shorter than `min_length` UTF-16 code units.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_length: usize,
}

impl MinLengthFilter {
    /// Create a new filter keeping tokens of at least `min_length` units.
    pub fn new(min_length: usize) -> Self {
        MinLengthFilter { min_length }
    }
}

impl Default for MinLengthFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TOKEN_LENGTH)
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_length = self.min_length;
        Ok(Box::new(
            tokens.filter(move |token| token.len_utf16() >= min_length),
        ))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}
