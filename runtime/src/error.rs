//! Accessor error types.

use thiserror::Error;

/// Errors returned by generated accessors.
#[derive(Debug, Error)]
pub enum Error {
    /// The embedded payload is not a valid gzip stream (corrupt or truncated).
    #[error("failed to decompress embedded asset `{path}`")]
    Decompress {
        path: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Logical path of the asset that failed.
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Decompress { path, .. } => path,
        }
    }
}
