use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Boxed static error type
pub type Err = Box<dyn std::error::Error + 'static>;

/// Writes the selected lines to `path`, newline-terminated, in the order
/// given by `indices`. Used by the corpus splitter, which emits the same
/// shuffled index list across several files.
pub fn write_indexed_lines(
  path: impl AsRef<Path>,
  lines: &[String],
  indices: &[usize],
) -> std::io::Result<()> {
  let mut out = BufWriter::new(File::create(path)?);
  for &idx in indices {
    writeln!(out, "{}", lines[idx])?;
  }
  out.flush()
}
