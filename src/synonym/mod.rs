//! Medical synonym expansion.
//!
//! Three layers, leaf to root:
//! - [`SynonymTable`]: immutable mapping from a canonical lowercase term to
//!   its synonyms and abbreviations. The bundled table is
//!   [`MEDICAL_SYNONYMS`].
//! - [`TermExpander`]: resolves one term against a table.
//! - [`QueryExpander`]: tokenizes free text, expands every token and merges
//!   the results into one deduplicated, first-seen ordered list.
//!
//! # Example
//!
//! ```
//! use medsyn::synonym::{expand_query, expand_term};
//!
//! let terms = expand_term("MI");
//! assert_eq!(terms[0], "mi");
//! assert!(terms.contains(&"heart attack".to_string()));
//!
//! let terms = expand_query("chest pain and mi");
//! assert_eq!(&terms[..2], ["chest", "pain"]);
//! ```

mod query;
mod table;
mod term;

pub use query::{QueryExpander, TokenExpansion, expand_query};
pub use table::{
    AuditFinding, FindingKind, MEDICAL_SYNONYMS, SynonymTable, TableStats,
    normalize_term,
};
pub use term::{TermExpander, expand_term};
