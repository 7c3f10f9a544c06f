//! Filter/rename engine.
//!
//! ```text
//! input header  ──▶ ColumnSelection (kept indices + renamed header)
//! input rows    ──▶ row key lookup ──▶ projected cells ──▶ Table
//! ```
//!
//! A row survives when its first cell is a key of the row mapping; a column
//! survives when its header cell is a key of the column mapping. Kept
//! columns stay in input order. Only headers and row keys are renamed,
//! every other kept cell passes through untouched.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use super::table::{Row, Table};
use crate::error::{MappingResult, TableError, TableResult};
use crate::mapping::Mapping;
use crate::parser::{lines, split_fields};

/// Name used in read errors when the input is not a file.
const UNNAMED_INPUT: &str = "<input>";

/// Columns kept from the input, computed once from its header line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSelection {
    indices: Vec<usize>,
    header: Row,
}

impl ColumnSelection {
    /// Pick the header cells found in `columns`, in input order.
    pub fn from_header(header: &[&str], columns: &Mapping) -> Self {
        let mut selection = Self::default();

        for (i, cell) in header.iter().enumerate() {
            if let Some(renamed) = columns.get(cell) {
                selection.indices.push(i);
                selection.header.push(renamed.to_string());
            }
        }

        selection
    }

    /// Kept input positions, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Renamed header cells, one per kept index.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Project a data row onto the kept columns.
    ///
    /// Column 0 always renders `row_label`, whatever the column mapping
    /// says. Kept positions past the end of `cells` are skipped, so a short
    /// row gives a short output row.
    pub fn project(&self, cells: &[&str], row_label: &str) -> Row {
        self.indices
            .iter()
            .filter_map(|&i| match i {
                0 => Some(row_label),
                _ => cells.get(i).copied(),
            })
            .map(str::to_string)
            .collect()
    }
}

/// Filters and renames a table using a row mapping and a column mapping.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    rows: Mapping,
    columns: Mapping,
}

impl Translator {
    pub fn new(rows: Mapping, columns: Mapping) -> Self {
        Self { rows, columns }
    }

    /// Load both mapping files, row mapping first.
    pub fn from_files(row_path: impl AsRef<Path>, column_path: impl AsRef<Path>) -> MappingResult<Self> {
        let rows = Mapping::from_file(row_path)?;
        let columns = Mapping::from_file(column_path)?;
        Ok(Self::new(rows, columns))
    }

    pub fn row_mapping(&self) -> &Mapping {
        &self.rows
    }

    pub fn column_mapping(&self) -> &Mapping {
        &self.columns
    }

    /// Dump both mappings at debug level.
    pub fn log_mappings(&self) {
        self.rows.log_entries("row");
        self.columns.log_entries("column");
    }

    /// Translate one split data row, or `None` if its key is not mapped.
    pub fn translate_row(&self, selection: &ColumnSelection, cells: &[&str]) -> Option<Row> {
        let key = cells.first()?;
        let label = self.rows.get(key)?;
        Some(selection.project(cells, label))
    }

    /// Translate a whole table read from `reader`.
    ///
    /// The first line is the header. Fails on an empty input or a read
    /// error; no partial table is returned. Read errors name the input as
    /// `<input>`; use [`Translator::translate_file`] to get the real path.
    pub fn translate<R: BufRead>(&self, reader: R) -> TableResult<Table> {
        self.translate_from(reader, Path::new(UNNAMED_INPUT))
    }

    /// Translate the table stored in `path`.
    pub fn translate_file(&self, path: impl AsRef<Path>) -> TableResult<Table> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.translate_from(BufReader::new(file), path)
    }

    fn translate_from<R: BufRead>(&self, reader: R, path: &Path) -> TableResult<Table> {
        let read_error = |line: usize, source| TableError::Read {
            path: path.to_path_buf(),
            line,
            source,
        };
        let mut lines = lines(reader);

        let header_line = lines
            .next()
            .ok_or(TableError::EmptyInput)?
            .map_err(|source| read_error(1, source))?;

        let selection = ColumnSelection::from_header(&split_fields(&header_line), &self.columns);
        debug!(kept = ?selection.indices(), "column selection");

        let mut table = Table::new(selection.header().to_vec());

        for (line_idx, line) in lines.enumerate() {
            let line_num = line_idx + 2; // +1 for 0-index, +1 for header
            let line = line.map_err(|source| read_error(line_num, source))?;

            match self.translate_row(&selection, &split_fields(&line)) {
                Some(row) => table.push(row),
                None => table.rows_dropped += 1,
            }
        }

        info!(
            columns = selection.indices().len(),
            rows = table.row_count(),
            dropped = table.rows_dropped,
            "translated table"
        );
        Ok(table)
    }
}
