//! Error types for the translation run.
//!
//! One error type per stage:
//!
//! - [`MappingError`] - loading a row or column mapping file
//! - [`TableError`] - reading the input table
//! - [`WriteError`] - writing the output table
//! - [`TranslateError`] - top-level run errors
//!
//! Malformed mapping lines and short data rows are not errors; they are
//! handled where they are found and never reach these types.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Mapping Errors
// =============================================================================

/// Errors while loading a mapping file.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The mapping file could not be opened.
    #[error("Cannot open mapping file '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A read failed part-way through the mapping file.
    #[error("Cannot read mapping file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Table Errors
// =============================================================================

/// Errors while reading the input table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The input file could not be opened.
    #[error("Cannot open input file '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A read failed part-way through the input.
    #[error("Cannot read line {line} of input '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// The input has no header line.
    #[error("Input is empty, no header line found")]
    EmptyInput,
}

// =============================================================================
// Write Errors
// =============================================================================

/// Errors while writing the output table.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The output file could not be created.
    #[error("Cannot create output file '{}': {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing failed.
    #[error("Cannot write output file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Translate Errors (top-level)
// =============================================================================

/// Top-level run errors.
///
/// Returned by [`crate::transform::pipeline::translate_files`]; wraps every
/// stage error so `?` works across stage boundaries.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Row or column mapping could not be loaded.
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    /// Input table could not be read.
    #[error("Input error: {0}")]
    Table(#[from] TableError),

    /// Output table could not be written.
    #[error("Output error: {0}")]
    Write(#[from] WriteError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;

/// Result type for table reading operations.
pub type TableResult<T> = Result<T, TableError>;

/// Result type for output operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for a whole run.
pub type TranslateResult<T> = Result<T, TranslateError>;
