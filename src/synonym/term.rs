//! Single-term expansion.

use rayon::prelude::*;

use super::table::{MEDICAL_SYNONYMS, SynonymTable, normalize_term};

/// Expands one term into itself plus its synonyms.
///
/// The term is trimmed and lowercased before lookup. A term with an entry
/// expands to `[term, synonyms...]` in stored order; a term without one
/// expands to `[term]`. Expansion never fails.
///
/// # Examples
///
/// ```
/// use medsyn::synonym::{SynonymTable, TermExpander};
///
/// let table = SynonymTable::from_entries(vec![("cva", vec!["stroke"])]).unwrap();
/// let expander = TermExpander::new(&table);
///
/// assert_eq!(expander.expand(" CVA "), vec!["cva", "stroke"]);
/// assert_eq!(expander.expand("Fever"), vec!["fever"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TermExpander<'a> {
    table: &'a SynonymTable,
}

impl Default for TermExpander<'static> {
    fn default() -> Self {
        Self::new(&MEDICAL_SYNONYMS)
    }
}

impl<'a> TermExpander<'a> {
    /// Create an expander over the given table.
    pub fn new(table: &'a SynonymTable) -> Self {
        Self { table }
    }

    /// The table this expander reads from.
    pub fn table(&self) -> &'a SynonymTable {
        self.table
    }

    /// Expand a single term.
    ///
    /// Multi-word terms are looked up as a whole, so `"heart attack"` reaches
    /// its entry here even though query expansion never would.
    pub fn expand(&self, term: &str) -> Vec<String> {
        let key = normalize_term(term);

        match self.table.get(&key) {
            Some(synonyms) => {
                let mut expanded = Vec::with_capacity(synonyms.len() + 1);
                expanded.push(key);
                expanded.extend(synonyms.iter().cloned());
                expanded
            }
            None => vec![key],
        }
    }

    /// Expand many terms in parallel. Results are in input order.
    pub fn expand_batch<S>(&self, terms: &[S]) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        terms
            .par_iter()
            .map(|term| self.expand(term.as_ref()))
            .collect()
    }
}

/// Expand a term against the bundled [`MEDICAL_SYNONYMS`] table.
pub fn expand_term(term: &str) -> Vec<String> {
    TermExpander::default().expand(term)
}
