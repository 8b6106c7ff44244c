//! Text analysis for query expansion.
//!
//! A query passes through a small pipeline before any table lookup:
//! lowercasing, whitespace tokenization, and removal of tokens that are too
//! short to be worth expanding.

pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
