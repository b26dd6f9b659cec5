//! Accessor identifiers derived from logical asset paths.
//!
//! [`sanitize`] is the pure path-to-name mapping. [`Ident`] wraps its result
//! once it is known to be emittable as a Rust item name.

use std::borrow::Cow;

use crate::error::{GenError, Result};

/// Characters replaced with `_`.
const SEPARATORS: [char; 5] = ['/', '\\', ' ', '.', '-'];

/// Keywords that can still be used as `r#keyword`.
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

/// Names that cannot be emitted at all. `mod` would clash with the
/// registry unit's file name.
const RESERVED: &[&str] = &["_", "crate", "mod", "self", "super"];

/// Turn a logical path into an identifier.
///
/// Lower-cases the path, maps path separators, spaces, periods and hyphens
/// to `_`, and prefixes `_` when the result starts with a decimal digit. Any other
/// character passes through untouched.
///
/// Distinct paths can map to the same identifier (`a-b` and `a.b`); the
/// driver detects that before writing anything.
///
/// # Panics
///
/// Panics on an empty path.
pub fn sanitize(logical_path: &str) -> String {
    assert!(!logical_path.is_empty(), "cannot derive an identifier from an empty path");

    let name: String = logical_path
        .to_lowercase()
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { '_' } else { c })
        .collect();

    match name.chars().next() {
        Some(first) if first.is_ascii_digit() => format!("_{name}"),
        _ => name,
    }
}

/// A sanitized identifier that is safe to emit as a module and function name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ident(String);

impl Ident {
    /// Sanitize `logical_path` and check the result can be emitted.
    pub fn from_path(logical_path: &str) -> Result<Self> {
        let name = sanitize(logical_path);

        if !name.chars().all(is_ident_char) {
            return Err(GenError::InvalidIdent {
                path: logical_path.to_string(),
                ident: name,
            });
        }
        if RESERVED.contains(&name.as_str()) {
            return Err(GenError::ReservedIdent {
                path: logical_path.to_string(),
                ident: name,
            });
        }

        Ok(Self(name))
    }

    /// The plain sanitized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name as written in Rust source (`r#type` for keywords).
    pub fn rust(&self) -> Cow<'_, str> {
        if RAW_KEYWORDS.contains(&self.0.as_str()) {
            Cow::Owned(format!("r#{}", self.0))
        } else {
            Cow::Borrowed(&self.0)
        }
    }

    /// File name of the generated unit.
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.0)
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || (!c.is_ascii() && c.is_alphabetic())
}

/// Check a configured module name: a plain identifier, not a keyword.
pub fn is_valid_module_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RAW_KEYWORDS.contains(&name)
        && !RESERVED.contains(&name)
}
