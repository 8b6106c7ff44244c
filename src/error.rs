//! Error types for the medsyn library.
//!
//! Expansion itself never fails: a term without a table entry expands to
//! itself. Errors only come from loading synonym tables and configuration,
//! and from the command line front end.
//!
//! # Examples
//!
//! ```
//! use medsyn::error::{MedsynError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MedsynError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for medsyn operations.
#[derive(Error, Debug)]
pub enum MedsynError {
    /// I/O errors (reading tables, config files, query files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed synonym table (empty keys, colliding keys, wrong shape)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid configuration values
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument passed by a caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with MedsynError.
pub type Result<T> = std::result::Result<T, MedsynError>;

impl MedsynError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        MedsynError::Dictionary(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MedsynError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        MedsynError::InvalidArgument(msg.into())
    }
}
