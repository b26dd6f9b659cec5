//! Asset scanning (pure, no side effects).

use std::io;
use std::path::{Component, Path};

use jwalk::WalkDir;

use super::AssetRoute;
use crate::error::{GenError, Result};

/// Recursively collect every embeddable file under `root`.
///
/// Hidden entries (name starting with `.`) are skipped, and hidden
/// directories are not descended into. Only regular files are returned,
/// sorted by logical path.
///
/// ```text
/// assets/
/// ├── .DS_Store          -> (hidden, skipped)
/// ├── 3d/model.obj       -> "3d/model.obj"
/// └── images/
///     └── logo.png       -> "images/logo.png"
/// ```
///
/// # Errors
///
/// Any unreadable directory aborts the scan: a partial asset list would
/// produce a registry that silently lacks files.
pub fn scan_assets(root: &Path) -> Result<Vec<AssetRoute>> {
    let meta = std::fs::metadata(root).map_err(GenError::io(root))?;
    if !meta.is_dir() {
        return Err(GenError::Io(
            root.to_path_buf(),
            io::Error::new(io::ErrorKind::NotADirectory, "input root is not a directory"),
        ));
    }

    let mut results = Vec::new();

    for entry in WalkDir::new(root).skip_hidden(true).sort(true) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(root).to_path_buf();
            GenError::Io(path, io::Error::other(err.to_string()))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let source = entry.path();
        let rel = source.strip_prefix(root).unwrap_or(&source);
        let logical = logical_path(rel).ok_or_else(|| GenError::NonUtf8Path(source.clone()))?;
        results.push(AssetRoute { source, logical });
    }

    results.sort_by(|a, b| a.logical.cmp(&b.logical));
    Ok(results)
}

/// Join the normal components of `rel` with `/`.
///
/// Returns `None` for non-UTF-8 components.
pub fn logical_path(rel: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            parts.push(part.to_str()?);
        }
    }
    Some(parts.join("/"))
}
