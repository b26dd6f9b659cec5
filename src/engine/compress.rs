//! Optional gzip compression of asset payloads.

use std::borrow::Cow;
use std::io::{self, Write};

use flate2::{Compression, GzBuilder};

/// Bytes to embed plus whether they are gzip-compressed.
///
/// Only [`compress`] constructs a payload, so the flag always describes
/// the bytes it travels with.
#[derive(Debug, Clone)]
pub struct Payload<'a> {
    bytes: Cow<'a, [u8]>,
    compressed: bool,
}

impl Payload<'_> {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `true` if the accessor must inflate the bytes before returning them.
    pub const fn is_compressed(&self) -> bool {
        self.compressed
    }
}

/// Compress `bytes` when `enabled`, otherwise pass them through.
///
/// Best-effort: tiny or already-compressed inputs can grow. The gzip header
/// carries no timestamp or file name, so equal input gives equal output.
pub fn compress(bytes: &[u8], enabled: bool) -> io::Result<Payload<'_>> {
    if !enabled {
        return Ok(Payload {
            bytes: Cow::Borrowed(bytes),
            compressed: false,
        });
    }

    let mut encoder = GzBuilder::new().write(
        Vec::with_capacity(bytes.len() / 2 + 32),
        Compression::default(),
    );
    encoder.write_all(bytes)?;
    let compressed = encoder.finish()?;

    Ok(Payload {
        bytes: Cow::Owned(compressed),
        compressed: true,
    })
}
