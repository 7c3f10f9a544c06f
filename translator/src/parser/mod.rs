//! Tab-separated line reading and field splitting.
//!
//! No quoting, no escaping: a field is whatever sits between two tabs.
//! Shared by the mapping loader and the filter engine.

use std::io::{self, BufRead};

/// Field delimiter for every file the tool reads or writes.
pub const TAB: char = '\t';

/// Split a line into fields on every tab.
///
/// Trailing empty fields are dropped, so `"a\tb\t\t"` yields `["a", "b"]`
/// and `"\t\t"` yields no fields at all. An empty line is the one
/// exception: it yields a single empty field.
///
/// # Example
/// ```
/// use tsv_translator::split_fields;
///
/// assert_eq!(split_fields("ID1\tA\t\tC"), vec!["ID1", "A", "", "C"]);
/// assert_eq!(split_fields("key\tvalue\t"), vec!["key", "value"]);
/// ```
pub fn split_fields(line: &str) -> Vec<&str> {
    if line.is_empty() {
        return vec![""];
    }

    let mut fields: Vec<&str> = line.split(TAB).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Iterator over the lines of a reader.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`; the terminator is not part of
/// the line. A last line without a terminator is still yielded. Invalid
/// UTF-8 is replaced rather than rejected.
pub struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
    /// Previous line ended with `\r`, so a leading `\n` belongs to it.
    after_cr: bool,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            after_cr: false,
        }
    }

    fn take_line(&self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        let mut read_any = false;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            };

            if self.after_cr {
                self.after_cr = false;
                if available.first() == Some(&b'\n') {
                    self.reader.consume(1);
                    continue;
                }
            }

            if available.is_empty() {
                break;
            }
            read_any = true;

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.after_cr = available[end] == b'\r';
                    self.buf.extend_from_slice(&available[..end]);
                    self.reader.consume(end + 1);
                    return Some(Ok(self.take_line()));
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }

        read_any.then(|| Ok(self.take_line()))
    }
}

/// Read the lines of a buffered reader.
pub fn lines<R: BufRead>(reader: R) -> Lines<R> {
    Lines::new(reader)
}
