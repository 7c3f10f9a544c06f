//! # tsv-translator - filter and rename tab-separated tables
//!
//! Reads a tab-separated table, keeps the rows whose key appears in a row
//! mapping and the columns whose header appears in a column mapping, renames
//! the surviving row keys and headers, and writes the result as a new
//! tab-separated file.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │  Row map    │────▶│             │
//! ├─────────────┤     │   Filter /  │     ┌─────────────┐     ┌─────────────┐
//! │  Column map │────▶│   Rename    │────▶│   Writer    │────▶│ Output TSV  │
//! ├─────────────┤     │             │     └─────────────┘     └─────────────┘
//! │  Input TSV  │────▶│             │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use tsv_translator::{write_tsv, Mapping, Translator};
//!
//! let rows: Mapping = [("ID2", "OURID2")].into_iter().collect();
//! let columns: Mapping = [("COL0", "OURID"), ("COL2", "OURCOL2")].into_iter().collect();
//!
//! let table = Translator::new(rows, columns)
//!     .translate("COL0\tCOL1\tCOL2\nID1\ta\tb\nID2\tc\td\n".as_bytes())
//!     .unwrap();
//!
//! let mut out = Vec::new();
//! write_tsv(&table, &mut out).unwrap();
//! assert_eq!(out, b"OURID\tOURCOL2\t\nOURID2\td\t\n");
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per stage
//! - [`parser`] - Line reading and tab splitting
//! - [`mapping`] - Mapping file loader
//! - [`transform`] - Filter/rename engine and run pipeline
//! - [`writer`] - Tab-separated output
//! - [`logging`] - Subscriber setup for the binary

// Core modules
pub mod error;
pub mod parser;

// Loading
pub mod mapping;

// Transformation
pub mod transform;

// Output
pub mod writer;

// Diagnostics
pub mod logging;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    MappingError,
    TableError,
    WriteError,
    TranslateError,
    TranslateResult,
};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{lines, split_fields, TAB};

// =============================================================================
// Re-exports - Mapping
// =============================================================================

pub use mapping::Mapping;

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{
    ColumnSelection,
    Row,
    Table,
    Translator,
    translate_files,
    TranslateOptions,
    TranslateReport,
};

// =============================================================================
// Re-exports - Writer
// =============================================================================

pub use writer::{write_tsv, write_tsv_file};
