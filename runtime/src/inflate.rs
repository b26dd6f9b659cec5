//! Gzip decoding for compressed payloads.

use std::io::Read;

use flate2::read::GzDecoder;
use once_cell::sync::OnceCell;

use crate::{Error, StaticBytes};

/// Per-asset cache of decompressed bytes used by zero-copy accessors.
pub type InflateCache = OnceCell<Box<[u8]>>;

/// Decompress `data` into a fresh buffer.
///
/// Fails on a corrupt or truncated stream rather than returning the bytes
/// decoded so far.
pub fn inflate(path: &'static str, data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::with_capacity(data.len().saturating_mul(2));
    decoder
        .read_to_end(&mut out)
        .map_err(|source| Error::Decompress { path, source })?;
    Ok(out)
}

/// Decompress `data` at most once and hand out the cached bytes.
///
/// Concurrent first calls block on the cache until one of them finishes;
/// a failed attempt leaves the cache empty so the error is reported again
/// on the next call.
pub fn inflate_cached(
    cache: &'static InflateCache,
    path: &'static str,
    data: &[u8],
) -> Result<StaticBytes, Error> {
    let bytes = cache.get_or_try_init(|| inflate(path, data).map(Vec::into_boxed_slice))?;
    Ok(StaticBytes::new(bytes))
}
