//! Freshness detection: whether a generated unit still matches its asset.
//!
//! - `mtime` - timestamp comparison between an asset and its unit
//! - `header` - the unit's first line against the one this run would write

pub mod header;
pub mod mtime;

pub use header::{is_unit_current, read_header};
pub use mtime::{get_mtime, is_output_fresh};
