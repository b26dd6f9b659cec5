//! Byte payload to Rust source literal.
//!
//! The payload is always emitted as a byte-string literal. [`Layout`]
//! decides how the accessor hands it out:
//!
//! | layout      | return type   | cost per call                 |
//! |-------------|---------------|-------------------------------|
//! | `SafeCopy`  | `Vec<u8>`     | one allocation + copy         |
//! | `ZeroCopy`  | `StaticBytes` | none (aliases static data)    |
//!
//! Zero-copy buffers share storage with the program's read-only data, so
//! `StaticBytes` offers no mutable access. Safe-copy stays the default for
//! callers that want to own and modify what they get back.

use std::fmt::Write;

/// Maximum literal characters per source line before wrapping.
const LINE_WIDTH: usize = 96;

/// Indentation after a `\`-newline continuation (skipped by the lexer).
const INDENT: &str = "    ";

/// Memory layout of the bytes returned by accessors. Global per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// Copy into a fresh `Vec<u8>` on every call.
    #[default]
    SafeCopy,
    /// Return a read-only view of static storage.
    ZeroCopy,
}

impl Layout {
    pub const fn from_zero_copy(zero_copy: bool) -> Self {
        if zero_copy { Self::ZeroCopy } else { Self::SafeCopy }
    }

    /// Name recorded in unit headers.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SafeCopy => "safe-copy",
            Self::ZeroCopy => "zero-copy",
        }
    }

    /// Type returned by accessors in this layout.
    pub const fn data_type(self) -> &'static str {
        match self {
            Self::SafeCopy => "::std::vec::Vec<u8>",
            Self::ZeroCopy => "::bindata_runtime::StaticBytes",
        }
    }

    /// Accessor body given `PATH`, `DATA` and (zero-copy + compressed) `CACHE`.
    fn body(self, compressed: bool) -> &'static str {
        match (self, compressed) {
            (Self::SafeCopy, false) => "Ok(DATA.to_vec())",
            (Self::SafeCopy, true) => "::bindata_runtime::inflate(PATH, DATA)",
            (Self::ZeroCopy, false) => "Ok(::bindata_runtime::StaticBytes::new(DATA))",
            (Self::ZeroCopy, true) => "::bindata_runtime::inflate_cached(&CACHE, PATH, DATA)",
        }
    }
}

/// Source fragments for one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    /// `b"..."` literal holding the (possibly compressed) bytes.
    pub literal: String,
    /// Accessor return type.
    pub data_type: &'static str,
    /// Accessor body expression.
    pub body: &'static str,
    /// Whether the accessor needs a `CACHE` static.
    pub needs_cache: bool,
}

/// Encode payload bytes for the given layout.
pub fn encode(bytes: &[u8], compressed: bool, layout: Layout) -> EncodedPayload {
    EncodedPayload {
        literal: byte_literal(bytes),
        data_type: layout.data_type(),
        body: layout.body(compressed),
        needs_cache: layout == Layout::ZeroCopy && compressed,
    }
}

/// Render `bytes` as a Rust byte-string literal.
///
/// Total over all inputs: printable ASCII is kept, `"` and `\` are
/// backslash-escaped, everything else becomes `\xNN`. Long literals wrap
/// with `\`-newline continuations; a space opening a continued line is
/// escaped since the lexer would drop it.
pub fn byte_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 + 3);
    out.push_str("b\"");

    let mut column = 0;
    for &byte in bytes {
        if column >= LINE_WIDTH {
            out.push_str("\\\n");
            out.push_str(INDENT);
            column = 0;
        }
        column += push_escaped(&mut out, byte, column == 0);
    }

    out.push('"');
    out
}

/// Append one escaped byte, returning the number of characters written.
fn push_escaped(out: &mut String, byte: u8, line_start: bool) -> usize {
    match byte {
        b'"' | b'\\' => {
            out.push('\\');
            out.push(byte as char);
            2
        }
        b' ' if !line_start => {
            out.push(' ');
            1
        }
        0x21..=0x7e => {
            out.push(byte as char);
            1
        }
        _ => {
            let _ = write!(out, "\\x{byte:02x}");
            4
        }
    }
}
