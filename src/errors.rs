//! Errors
//!
//! Custom error types used throughout the `booltree` crate.
use thiserror::Error;

use std::io;


/// Errors that can occur while reading a sample or growing a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Unable to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A line of a data file could not be parsed.
    /// The line number is 1-indexed.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// Line number (1-indexed) of the offending line.
        line: usize,
        /// What went wrong.
        message: String,
    },
    /// The dataset or an instance violates a shape invariant.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Unable to (de)serialize a tree.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Unable to convert a data frame into a sample.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}


/// Result type of this crate.
pub type Result<T> = std::result::Result<T, TreeError>;
