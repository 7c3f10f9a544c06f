//! High-level API running a whole translation from four file paths.
//!
//! # Example
//!
//! ```rust,no_run
//! use tsv_translator::{translate_files, TranslateOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = TranslateOptions::new("rowmap.tsv", "colmap.tsv", "input.tsv", "translated.tsv");
//!     let report = translate_files(&options)?;
//!     println!("Wrote {} rows", report.rows_written);
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use tracing::info;

use super::filter::Translator;
use crate::error::TranslateResult;
use crate::writer::write_tsv_file;

/// Paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Row mapping file (`key<TAB>label`)
    pub row_map: PathBuf,

    /// Column mapping file (`header<TAB>label`)
    pub column_map: PathBuf,

    /// Input table
    pub input: PathBuf,

    /// Output table, created or overwritten
    pub output: PathBuf,
}

impl TranslateOptions {
    pub fn new(
        row_map: impl Into<PathBuf>,
        column_map: impl Into<PathBuf>,
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            row_map: row_map.into(),
            column_map: column_map.into(),
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateReport {
    /// Columns kept (length of the output header)
    pub columns_kept: usize,

    /// Data rows written, header excluded
    pub rows_written: usize,

    /// Input data rows left out because their key is not in the row mapping
    pub rows_dropped: usize,

    /// Where the table was written
    pub output: PathBuf,
}

/// Translate the input file into the output file.
///
/// 1. Loads the row and column mappings
/// 2. Filters and renames the input table in memory
/// 3. Writes the result
///
/// Any failure aborts the run. The output file is only created once the
/// table has been built, so a bad mapping or input path leaves it untouched.
pub fn translate_files(options: &TranslateOptions) -> TranslateResult<TranslateReport> {
    let translator = Translator::from_files(&options.row_map, &options.column_map)?;
    info!(
        rows = translator.row_mapping().len(),
        columns = translator.column_mapping().len(),
        "mappings loaded"
    );
    translator.log_mappings();

    let table = translator.translate_file(&options.input)?;
    write_tsv_file(&table, &options.output)?;

    let report = TranslateReport {
        columns_kept: table.header.len(),
        rows_written: table.row_count(),
        rows_dropped: table.rows_dropped,
        output: options.output.clone(),
    };
    info!(
        columns = report.columns_kept,
        rows = report.rows_written,
        dropped = report.rows_dropped,
        output = %report.output.display(),
        "translation complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MappingError, TableError, TranslateError};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn seed(dir: &Path) -> TranslateOptions {
        fs::write(dir.join("rowmap.tsv"), "ID2\tOURID2\nID3\tOURID3\n").unwrap();
        fs::write(dir.join("colmap.tsv"), "COL0\tOURID\nCOL1\tOURCOL1\nCOL3\tOURCOL3\n").unwrap();
        fs::write(
            dir.join("input.tsv"),
            "COL0\tCOL1\tCOL2\tCOL3\nID1\tA\tB\tC\nID2\tD\tE\tF\nID3\tG\tH\tI\n",
        )
        .unwrap();

        TranslateOptions::new(
            dir.join("rowmap.tsv"),
            dir.join("colmap.tsv"),
            dir.join("input.tsv"),
            dir.join("translated.tsv"),
        )
    }

    #[test]
    fn test_translate_files_end_to_end() {
        let dir = tempdir().unwrap();
        let options = seed(dir.path());

        let report = translate_files(&options).unwrap();

        assert_eq!(report.columns_kept, 3);
        assert_eq!(report.rows_written, 2);
        assert_eq!(report.rows_dropped, 1);
        assert_eq!(
            fs::read_to_string(&options.output).unwrap(),
            "OURID\tOURCOL1\tOURCOL3\t\nOURID2\tD\tF\t\nOURID3\tG\tI\t\n"
        );
    }

    #[test]
    fn test_translate_twice_byte_identical() {
        let dir = tempdir().unwrap();
        let options = seed(dir.path());

        translate_files(&options).unwrap();
        let first = fs::read(&options.output).unwrap();
        translate_files(&options).unwrap();
        let second = fs::read(&options.output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_input_creates_no_output() {
        let dir = tempdir().unwrap();
        let mut options = seed(dir.path());
        options.input = dir.path().join("missing.tsv");

        let err = translate_files(&options).unwrap_err();

        assert!(matches!(err, TranslateError::Table(TableError::Open { .. })));
        assert!(!options.output.exists());
    }

    #[test]
    fn test_missing_row_map_aborts() {
        let dir = tempdir().unwrap();
        let mut options = seed(dir.path());
        options.row_map = dir.path().join("missing_rows.tsv");

        let err = translate_files(&options).unwrap_err();

        assert!(matches!(err, TranslateError::Mapping(MappingError::Open { .. })));
        assert!(err.to_string().contains("missing_rows.tsv"));
        assert!(!options.output.exists());
    }

    #[test]
    fn test_unreadable_row_map_names_path() {
        let dir = tempdir().unwrap();
        let mut options = seed(dir.path());
        options.row_map = dir.path().join("rowmap_dir");
        fs::create_dir(&options.row_map).unwrap();

        let err = translate_files(&options).unwrap_err();

        assert!(matches!(err, TranslateError::Mapping(_)));
        assert!(err.to_string().contains("rowmap_dir"));
        assert!(!options.output.exists());
    }

    #[test]
    fn test_unreadable_input_names_path() {
        let dir = tempdir().unwrap();
        let mut options = seed(dir.path());
        options.input = dir.path().join("input_dir");
        fs::create_dir(&options.input).unwrap();

        let err = translate_files(&options).unwrap_err();

        assert!(matches!(err, TranslateError::Table(_)));
        assert!(err.to_string().contains("input_dir"));
        assert!(!options.output.exists());
    }

    #[test]
    fn test_missing_column_map_aborts() {
        let dir = tempdir().unwrap();
        let mut options = seed(dir.path());
        options.column_map = dir.path().join("missing_cols.tsv");

        let err = translate_files(&options).unwrap_err();
        assert!(matches!(err, TranslateError::Mapping(_)));
        assert!(!options.output.exists());
    }

    #[test]
    fn test_empty_input_creates_no_output() {
        let dir = tempdir().unwrap();
        let options = seed(dir.path());
        fs::write(&options.input, "").unwrap();

        let err = translate_files(&options).unwrap_err();
        assert!(matches!(err, TranslateError::Table(TableError::EmptyInput)));
        assert!(!options.output.exists());
    }
}
