//! Table writer.
//!
//! Every cell is followed by a tab, including the last one on a line, and
//! every line ends with `\n`. Downstream consumers of the translated files
//! expect that trailing tab.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{WriteError, WriteResult};
use crate::parser::TAB;
use crate::transform::table::Table;

/// Serialize `table` to `writer`, header first.
pub fn write_tsv<W: Write>(table: &Table, writer: W) -> io::Result<()> {
    let mut out = BufWriter::new(writer);

    for row in table.lines() {
        for cell in row {
            write!(out, "{}{}", cell, TAB)?;
        }
        out.write_all(b"\n")?;
    }

    out.flush()
}

/// Create or overwrite `path` with the serialized table.
///
/// If writing fails after the file was created, the partial file is
/// removed before the error is returned. Anything at `path` that is not a
/// regular file (a device, a fifo, a symlink) is left in place.
pub fn write_tsv_file(table: &Table, path: impl AsRef<Path>) -> WriteResult<()> {
    write_tsv_with(table, path.as_ref(), |p| File::create(p))
}

fn write_tsv_with<W, F>(table: &Table, path: &Path, create: F) -> WriteResult<()>
where
    W: Write,
    F: FnOnce(&Path) -> io::Result<W>,
{
    let removable = match fs::symlink_metadata(path) {
        Ok(meta) => meta.is_file(),
        Err(_) => true,
    };

    let out = create(path).map_err(|source| WriteError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    if let Err(source) = write_tsv(table, out) {
        if removable {
            if let Err(e) = fs::remove_file(path) {
                warn!(path = %path.display(), "could not remove partial output: {}", e);
            }
        }
        return Err(WriteError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    info!(path = %path.display(), rows = table.row_count(), "wrote output");
    Ok(())
}
