//! Configuration for query expansion.
//!
//! Configuration is optional: the defaults reproduce the standard behavior
//! over the bundled table. A JSON file can override individual fields.
//!
//! ```json
//! {
//!   "min_token_length": 2,
//!   "table_path": "data/search/medical-synonyms.json"
//! }
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::min_length::DEFAULT_MIN_TOKEN_LENGTH;
use crate::error::{MedsynError, Result};
use crate::synonym::{MEDICAL_SYNONYMS, SynonymTable};

/// Configuration for [`QueryExpander`](crate::synonym::QueryExpander).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpansionConfig {
    /// Query tokens with fewer characters than this are not expanded.
    pub min_token_length: usize,

    /// Synonym table to load instead of the bundled one.
    pub table_path: Option<PathBuf>,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            table_path: None,
        }
    }
}

impl ExpansionConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MedsynError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            MedsynError::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.min_token_length == 0 {
            return Err(MedsynError::config(
                "min_token_length must be at least 1",
            ));
        }
        Ok(())
    }

    /// Set the minimum token length.
    pub fn with_min_token_length(mut self, min_token_length: usize) -> Self {
        self.min_token_length = min_token_length;
        self
    }

    /// Set the synonym table path.
    pub fn with_table_path<P: Into<PathBuf>>(mut self, table_path: P) -> Self {
        self.table_path = Some(table_path.into());
        self
    }

    /// Load the configured synonym table.
    ///
    /// Without a `table_path` this borrows the bundled table.
    pub fn load_table(&self) -> Result<Cow<'static, SynonymTable>> {
        match &self.table_path {
            Some(path) => {
                let table = SynonymTable::load_from_file(path)?;
                info!(
                    "Loaded {} synonym entries from {}",
                    table.len(),
                    path.display()
                );
                Ok(Cow::Owned(table))
            }
            None => Ok(Cow::Borrowed(LazyLock::force(&MEDICAL_SYNONYMS))),
        }
    }
}
