//! Mapping loader.
//!
//! A mapping file holds one `key<TAB>value` pair per line. Lines that do not
//! split into exactly two fields are skipped without a word; a later line
//! with the same key overwrites an earlier one.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{MappingError, MappingResult};
use crate::parser::{lines, split_fields};

/// Exact-match, case-sensitive lookup from an input key to its output name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: HashMap<String, String>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a mapping from a file.
    ///
    /// Fails if the file cannot be opened or read. The handle is closed
    /// before returning on every path.
    pub fn from_file(path: impl AsRef<Path>) -> MappingResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| MappingError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mapping = Self::from_reader(BufReader::new(file)).map_err(|source| MappingError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), entries = mapping.len(), "loaded mapping");
        Ok(mapping)
    }

    /// Load a mapping from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut mapping = Self::new();

        for (line_idx, line) in lines(reader).enumerate() {
            let line = line?;
            match split_fields(&line).as_slice() {
                [key, value] => {
                    mapping.insert(*key, *value);
                }
                _ => debug!(line = line_idx + 1, "skipping malformed mapping line"),
            }
        }

        Ok(mapping)
    }

    /// Insert or overwrite an entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Dump every entry at debug level.
    pub fn log_entries(&self, label: &str) {
        debug!("{} mapping ({} entries)", label, self.len());
        for (key, value) in self.iter() {
            debug!("  {} => {}", key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}
