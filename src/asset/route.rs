//! Asset route type.

use std::path::PathBuf;

/// One input file and where its generated unit goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoute {
    /// Absolute or root-joined source path.
    pub source: PathBuf,
    /// Path relative to the input root, `/`-separated.
    pub logical: String,
}
