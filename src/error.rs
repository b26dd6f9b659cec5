//! Generator error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// A run never skips a failing file: a registry that silently lacks an
/// asset is worse than a failed build.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("IO error at `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to compress `{path}`")]
    Compress {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{first}` and `{second}` both map to identifier `{ident}`")]
    Collision {
        ident: String,
        first: String,
        second: String,
    },

    #[error("`{path}` maps to `{ident}`, which is not a valid Rust identifier")]
    InvalidIdent { path: String, ident: String },

    #[error("`{path}` maps to reserved identifier `{ident}`")]
    ReservedIdent { path: String, ident: String },

    #[error("path `{0}` is not valid UTF-8")]
    NonUtf8Path(PathBuf),
}

impl GenError {
    /// Adapter for `map_err` that attaches the offending path.
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |err| Self::Io(path, err)
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
