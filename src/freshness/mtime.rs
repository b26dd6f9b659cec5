//! Mtime-based freshness detection for generated units.
//!
//! A unit is rewritten only when it is missing or older than its source.
//! The translation engine itself never looks at timestamps.

use std::path::Path;
use std::time::SystemTime;

/// Check if output file is at least as new as the given source mtime
///
/// Returns `true` if the output exists and is not older than source_mtime,
/// meaning the output is fresh and translation can be skipped
///
/// # Arguments
///
/// * `output` - Path to the generated unit
/// * `source_mtime` - Modification time of the source file
pub fn is_output_fresh(output: &Path, source_mtime: Option<SystemTime>) -> bool {
    let Some(source_time) = source_mtime else {
        return false;
    };

    get_mtime(output)
        .map(|output_time| output_time >= source_time)
        .unwrap_or(false)
}

/// Get the modification time of a file
///
/// Returns `None` if the file doesn't exist or mtime cannot be read
pub fn get_mtime(path: &Path) -> Option<SystemTime> {
    path.metadata().and_then(|m| m.modified()).ok()
}
