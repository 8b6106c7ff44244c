//! # medsyn
//!
//! Lexical query expansion for medical search. A term or query is expanded
//! into itself plus every clinically equivalent synonym and abbreviation
//! from a synonym table, so that downstream matching can treat them as one.
//!
//! ```
//! use medsyn::{expand_query, expand_term};
//!
//! assert_eq!(expand_term("unknownterm"), vec!["unknownterm"]);
//!
//! let terms = expand_query("chest pain and mi");
//! assert!(terms.contains(&"myocardial infarction".to_string()));
//! ```
//!
//! ## Features
//!
//! - Bundled table of medical synonyms, loaded once and shared read-only
//! - Single-term and whole-query expansion with first-seen deduplication
//! - Custom tables and configuration from JSON files
//! - Table statistics and clique consistency audits

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod synonym;

pub use synonym::{
    MEDICAL_SYNONYMS, QueryExpander, SynonymTable, TermExpander, expand_query, expand_term,
};

pub mod prelude {
    pub use crate::config::ExpansionConfig;
    pub use crate::error::{MedsynError, Result};
    pub use crate::synonym::{
        MEDICAL_SYNONYMS, QueryExpander, SynonymTable, TermExpander, TokenExpansion,
        expand_query, expand_term,
    };
}
