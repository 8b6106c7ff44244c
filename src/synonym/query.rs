//! Whole-query expansion.
//!
//! A query is lowercased, split on whitespace, stripped of single-character
//! tokens, and every remaining token is expanded on its own. Multi-word table
//! entries are never reconstructed from adjacent tokens.

use std::collections::HashSet;
use std::sync::LazyLock;

use ahash::RandomState;
use log::{trace, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::token_filter::{Filter, LowercaseFilter, MinLengthFilter};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::config::ExpansionConfig;
use crate::error::Result;

use super::table::SynonymTable;
use super::term::TermExpander;

static DEFAULT_QUERY_EXPANDER: LazyLock<QueryExpander<'static>> =
    LazyLock::new(QueryExpander::default);

/// Expansion of a single query token, before merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenExpansion {
    /// The normalized token.
    pub token: String,
    /// Position of the token in the query, counting discarded tokens.
    pub position: usize,
    /// Byte offset where the token starts in the query.
    pub start_offset: usize,
    /// Byte offset where the token ends in the query.
    pub end_offset: usize,
    /// Whether the token has a table entry.
    pub matched: bool,
    /// The token followed by its synonyms.
    pub expansions: Vec<String>,
}

/// Expands free-text queries into a deduplicated term list.
///
/// # Examples
///
/// ```
/// use medsyn::synonym::QueryExpander;
///
/// let expander = QueryExpander::default();
/// let terms = expander.expand("a MI b");
///
/// assert_eq!(terms[0], "mi");
/// assert!(terms.contains(&"stemi".to_string()));
/// assert!(!terms.contains(&"a".to_string()));
/// ```
pub struct QueryExpander<'a> {
    term_expander: TermExpander<'a>,
    tokenizer: Box<dyn Tokenizer>,
    filters: Vec<Box<dyn Filter>>,
}

impl Default for QueryExpander<'static> {
    fn default() -> Self {
        Self::new(TermExpander::default(), &ExpansionConfig::default())
    }
}

impl<'a> QueryExpander<'a> {
    /// Create a query expander using the given term expander and config.
    pub fn new(term_expander: TermExpander<'a>, config: &ExpansionConfig) -> Self {
        Self {
            term_expander,
            tokenizer: Box::new(WhitespaceTokenizer::new()),
            filters: vec![
                Box::new(LowercaseFilter::new()),
                Box::new(MinLengthFilter::new(config.min_token_length)),
            ],
        }
    }

    /// Create a query expander over a table with the default config.
    pub fn with_table(table: &'a SynonymTable) -> Self {
        Self::new(TermExpander::new(table), &ExpansionConfig::default())
    }

    fn analyze(&self, query: &str) -> Result<Vec<Token>> {
        let mut stream = self.tokenizer.tokenize(query)?;
        for filter in &self.filters {
            stream = filter.filter(stream)?;
        }
        Ok(stream.collect())
    }

    /// Tokens of the query that will be expanded.
    pub fn tokens(&self, query: &str) -> Vec<Token> {
        self.analyze(query).unwrap_or_else(|e| {
            warn!("Failed to analyze query {query:?}: {e}");
            Vec::new()
        })
    }

    /// Expand a query.
    ///
    /// The result holds every expansion of every kept token, each string once,
    /// in first-seen order. Empty or blank input yields an empty list.
    pub fn expand(&self, query: &str) -> Vec<String> {
        let mut seen: HashSet<String, RandomState> = HashSet::default();
        let mut expanded = Vec::new();

        for token in self.tokens(query) {
            for term in self.term_expander.expand(&token.text) {
                if !seen.contains(&term) {
                    seen.insert(term.clone());
                    expanded.push(term);
                }
            }
        }

        trace!("Expanded query {query:?} into {} terms", expanded.len());
        expanded
    }

    /// Per-token expansions, without merging.
    pub fn explain(&self, query: &str) -> Vec<TokenExpansion> {
        let table = self.term_expander.table();

        self.tokens(query)
            .into_iter()
            .map(|token| {
                let expansions = self.term_expander.expand(&token.text);
                TokenExpansion {
                    matched: table.contains(&expansions[0]),
                    token: token.text,
                    position: token.position,
                    start_offset: token.start_offset,
                    end_offset: token.end_offset,
                    expansions,
                }
            })
            .collect()
    }

    /// Expand many queries in parallel. Results are in input order.
    pub fn expand_batch<S>(&self, queries: &[S]) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        queries
            .par_iter()
            .map(|query| self.expand(query.as_ref()))
            .collect()
    }
}

/// Expand a query against the bundled table with the default config.
pub fn expand_query(query: &str) -> Vec<String> {
    DEFAULT_QUERY_EXPANDER.expand(query)
}
