//! Token filter implementations for token transformation.
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`min_length::MinLengthFilter`] - Drops tokens shorter than a minimum
//!
//! # Examples
//!
//! ```
//! use medsyn::analysis::token_filter::Filter;
//! use medsyn::analysis::token_filter::lowercase::LowercaseFilter;
//! use medsyn::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Chest", 0), Token::new("PAIN", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "chest");
//! assert_eq!(filtered[1].text, "pain");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod lowercase;
pub mod min_length;

pub use lowercase::LowercaseFilter;
pub use min_length::MinLengthFilter;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}
