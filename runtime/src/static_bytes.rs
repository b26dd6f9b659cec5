//! Read-only buffer handed out by zero-copy accessors.
//!
//! Zero-copy accessors never copy: the bytes they return live in the
//! program's read-only data (or in a per-asset cache that is filled once and
//! never released). Writing through such a buffer would corrupt every later
//! read of the same asset, so this type exposes no mutable access at all.
//! Callers that need to modify the data must take a copy with
//! [`StaticBytes::to_vec`].
//!
//! ```compile_fail
//! let mut bytes = bindata_runtime::StaticBytes::new(b"abc");
//! bytes[0] = b'x';
//! ```
//!
//! ```compile_fail
//! let bytes = bindata_runtime::StaticBytes::new(b"abc");
//! let slice: &mut [u8] = &mut *bytes;
//! ```

use std::fmt;
use std::ops::Deref;

/// Immutable view of `'static` asset bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaticBytes(&'static [u8]);

impl StaticBytes {
    /// Wrap static bytes.
    #[inline]
    pub const fn new(bytes: &'static [u8]) -> Self {
        Self(bytes)
    }

    /// Borrow the bytes for the whole program lifetime.
    #[inline]
    pub const fn as_slice(&self) -> &'static [u8] {
        self.0
    }

    /// Copy into an owned, mutable buffer.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl Deref for StaticBytes {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.0
    }
}

impl AsRef<[u8]> for StaticBytes {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.0
    }
}

impl PartialEq<[u8]> for StaticBytes {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<&[u8]> for StaticBytes {
    fn eq(&self, other: &&[u8]) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Vec<u8>> for StaticBytes {
    fn eq(&self, other: &Vec<u8>) -> bool {
        self.0 == other.as_slice()
    }
}

impl fmt::Debug for StaticBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StaticBytes({} bytes)", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DATA: &[u8] = b"\x00\x01abc";

    #[test]
    fn test_static_bytes_aliases_source() {
        let bytes = StaticBytes::new(DATA);
        assert!(std::ptr::eq(bytes.as_slice(), DATA));
        assert_eq!(&*bytes, DATA);
        assert_eq!(bytes.len(), 5);
    }

    #[test]
    fn test_to_vec_is_independent_copy() {
        let bytes = StaticBytes::new(DATA);
        let mut copy = bytes.to_vec();
        copy[0] = 0xff;
        assert_eq!(bytes.as_slice()[0], 0x00);
        assert_eq!(StaticBytes::new(DATA), DATA);
    }

    #[test]
    fn test_debug_shows_length_only() {
        assert_eq!(format!("{:?}", StaticBytes::new(DATA)), "StaticBytes(5 bytes)");
    }
}
