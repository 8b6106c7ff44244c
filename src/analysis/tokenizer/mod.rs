//! Tokenizer implementations for text analysis.
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on runs of whitespace
//!
//! # Examples
//!
//! ```
//! use medsyn::analysis::tokenizer::Tokenizer;
//! use medsyn::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("chest pain").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a single tokenizer can serve
/// concurrent expansions.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
