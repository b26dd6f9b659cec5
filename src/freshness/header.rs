//! First-line checks on generated units.
//!
//! An up-to-date mtime is not enough: the unit text also depends on the
//! logical path and the generator switches, which the first line records.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::SystemTime;

use super::is_output_fresh;

/// Read the first line of `path` without its line ending.
///
/// Returns `None` if the file cannot be opened or read.
pub fn read_header(path: &Path) -> Option<String> {
    let mut reader = BufReader::new(File::open(path).ok()?);
    let mut line = String::new();
    reader.read_line(&mut line).ok()?;
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Some(line)
}

/// Check that `output` can be kept as is.
///
/// True when it is at least as new as its source and starts with `header`.
pub fn is_unit_current(output: &Path, source_mtime: Option<SystemTime>, header: &str) -> bool {
    is_output_fresh(output, source_mtime) && read_header(output).as_deref() == Some(header)
}
