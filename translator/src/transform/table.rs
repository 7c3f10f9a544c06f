//! In-memory output table.

/// One output row: ordered string cells.
pub type Row = Vec<String>;

/// Translated table, header first.
///
/// Data rows may be shorter than the header when the input row they came
/// from was short; they are never padded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Row,
    pub rows: Vec<Row>,
    /// Input data rows left out because their key is not mapped.
    pub rows_dropped: usize,
}

impl Table {
    pub fn new(header: Row) -> Self {
        Self {
            header,
            rows: Vec::new(),
            rows_dropped: 0,
        }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Number of data rows, header excluded.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Header followed by every data row, in output order.
    pub fn lines(&self) -> impl Iterator<Item = &Row> {
        std::iter::once(&self.header).chain(self.rows.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_header_first() {
        let mut table = Table::new(vec!["H".into()]);
        table.push(vec!["a".into()]);
        table.push(vec!["b".into()]);

        let firsts: Vec<&str> = table.lines().map(|r| r[0].as_str()).collect();
        assert_eq!(firsts, vec!["H", "a", "b"]);
        assert_eq!(table.row_count(), 2);
    }
}
