//! Transformation module.
//!
//! - Table: in-memory output rows
//! - Filter: row/column filtering and renaming
//! - Pipeline: full run from mapping files to output file

pub mod filter;
pub mod pipeline;
pub mod table;

pub use filter::{ColumnSelection, Translator};
pub use pipeline::*;
pub use table::{Row, Table};
