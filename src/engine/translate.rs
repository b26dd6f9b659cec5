//! One asset in, one generated unit out.

use std::fmt::Write;

use super::compress::compress;
use super::encode::{Layout, encode};
use super::ident::Ident;
use super::{GenOptions, RegistryEntry};
use crate::error::{GenError, Result};

/// Generated source for a single asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub ident: Ident,
    pub logical_path: String,
    pub compressed: bool,
    pub source: String,
}

impl GeneratedUnit {
    /// Registration handed to the registry assembler.
    pub fn entry(&self) -> RegistryEntry {
        RegistryEntry {
            logical_path: self.logical_path.clone(),
            ident: self.ident.clone(),
        }
    }
}

/// Start of the first line of every generated asset unit.
pub const UNIT_MARKER: &str = "// Code generated by bindata";

/// First line of the unit generated for `logical_path` under `options`.
///
/// Carries the generator version, the logical path and both switches, so a
/// unit on disk whose first line differs was built for something else.
pub fn unit_header(logical_path: &str, options: GenOptions) -> String {
    format!(
        "{UNIT_MARKER} {} from {logical_path:?} ({}, {}). DO NOT EDIT.",
        env!("CARGO_PKG_VERSION"),
        if options.compress { "gzip" } else { "raw" },
        options.layout().name(),
    )
}

/// Translate an asset's bytes into a self-contained accessor unit.
///
/// The unit defines `PATH`, the `DATA` literal, the accessor function named
/// after the sanitized path, and an `ENTRY` constant registering
/// `PATH -> accessor`. The output depends only on the arguments, so the same
/// input always yields the same source.
pub fn translate(bytes: &[u8], logical_path: &str, options: GenOptions) -> Result<GeneratedUnit> {
    let ident = Ident::from_path(logical_path)?;
    let payload = compress(bytes, options.compress).map_err(|source| GenError::Compress {
        path: logical_path.to_string(),
        source,
    })?;
    let encoded = encode(payload.bytes(), payload.is_compressed(), options.layout());

    let name = ident.rust();
    let path_literal = format!("{logical_path:?}");
    let data_type = encoded.data_type;

    let mut source = String::with_capacity(encoded.literal.len() + 1024);
    source.push_str(&unit_header(logical_path, options));
    source.push('\n');
    source.push('\n');

    let _ = writeln!(source, "/// Logical path of this asset.");
    let _ = writeln!(source, "pub const PATH: &str = {path_literal};");
    source.push('\n');

    if payload.is_compressed() {
        let _ = writeln!(source, "/// Gzip-compressed contents ({} bytes uncompressed).", bytes.len());
    } else {
        let _ = writeln!(source, "/// Raw contents ({} bytes).", bytes.len());
    }
    let _ = writeln!(source, "static DATA: &[u8] = {};", encoded.literal);
    source.push('\n');

    if encoded.needs_cache {
        let _ = writeln!(source, "/// Decompressed contents, filled on first access.");
        let _ = writeln!(
            source,
            "static CACHE: ::bindata_runtime::InflateCache = ::bindata_runtime::InflateCache::new();"
        );
        source.push('\n');
    }

    let _ = writeln!(source, "/// Returns the contents of {path_literal}.");
    match options.layout() {
        Layout::SafeCopy => {
            let _ = writeln!(source, "///");
            let _ = writeln!(source, "/// Every call returns a fresh buffer the caller may modify.");
        }
        Layout::ZeroCopy => {
            let _ = writeln!(source, "///");
            let _ = writeln!(
                source,
                "/// The returned bytes alias static storage shared by every caller."
            );
            let _ = writeln!(
                source,
                "/// They are read-only; copy them with `to_vec()` before modifying."
            );
        }
    }
    if payload.is_compressed() {
        let _ = writeln!(source, "///");
        let _ = writeln!(source, "/// Fails if the embedded payload does not decompress.");
    }
    let _ = writeln!(
        source,
        "pub fn {name}() -> ::std::result::Result<{data_type}, ::bindata_runtime::Error> {{"
    );
    let _ = writeln!(source, "    {}", encoded.body);
    let _ = writeln!(source, "}}");
    source.push('\n');

    let _ = writeln!(source, "/// Registry entry for {path_literal}.");
    let _ = writeln!(
        source,
        "pub const ENTRY: ::bindata_runtime::Entry<{data_type}> = ::bindata_runtime::Entry::new(PATH, {name});"
    );

    Ok(GeneratedUnit {
        logical_path: logical_path.to_string(),
        compressed: payload.is_compressed(),
        source,
        ident,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::encode::tests::decode_literal;

    const LOGO: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\x01";

    fn options(compress: bool, zero_copy: bool) -> GenOptions {
        GenOptions { compress, zero_copy }
    }

    /// Pull the `DATA` literal back out of a unit.
    fn embedded_bytes(unit: &GeneratedUnit) -> Vec<u8> {
        let start = unit.source.find("static DATA: &[u8] = ").unwrap() + "static DATA: &[u8] = ".len();
        let end = start + unit.source[start..].find("\";\n").unwrap() + 1;
        decode_literal(&unit.source[start..end])
    }

    #[test]
    fn test_uncompressed_logo() {
        assert_eq!(LOGO.len(), 17);
        let unit = translate(LOGO, "images/logo.png", options(false, false)).unwrap();

        assert_eq!(unit.ident.as_str(), "images_logo_png");
        assert!(!unit.compressed);
        assert!(unit.source.contains("pub const PATH: &str = \"images/logo.png\";"));
        assert!(unit.source.contains(
            "pub fn images_logo_png() -> ::std::result::Result<::std::vec::Vec<u8>, ::bindata_runtime::Error> {"
        ));
        assert!(unit.source.contains("    Ok(DATA.to_vec())"));
        assert!(unit.source.contains("::bindata_runtime::Entry::new(PATH, images_logo_png);"));
        assert_eq!(embedded_bytes(&unit), LOGO);
    }

    #[test]
    fn test_compressed_roundtrip() {
        let unit = translate(LOGO, "images/logo.png", options(true, false)).unwrap();
        assert!(unit.compressed);
        assert!(unit.source.contains("::bindata_runtime::inflate(PATH, DATA)"));

        let restored = bindata_runtime::inflate("images/logo.png", &embedded_bytes(&unit)).unwrap();
        assert_eq!(restored, LOGO);
    }

    #[test]
    fn test_zero_copy_compressed_uses_cache() {
        let unit = translate(LOGO, "images/logo.png", options(true, true)).unwrap();
        assert!(unit.source.contains("static CACHE: ::bindata_runtime::InflateCache"));
        assert!(unit.source.contains("inflate_cached(&CACHE, PATH, DATA)"));
        assert!(unit.source.contains("read-only"));
        assert!(unit.source.contains("Entry<::bindata_runtime::StaticBytes>"));
    }

    #[test]
    fn test_zero_copy_uncompressed_aliases() {
        let unit = translate(LOGO, "images/logo.png", options(false, true)).unwrap();
        assert!(!unit.source.contains("CACHE"));
        assert!(unit.source.contains("Ok(::bindata_runtime::StaticBytes::new(DATA))"));
    }

    #[test]
    fn test_empty_asset_is_well_formed() {
        for compress in [false, true] {
            for zero_copy in [false, true] {
                let unit = translate(b"", "empty.txt", options(compress, zero_copy)).unwrap();
                assert!(unit.source.contains("pub fn empty_txt()"));
                assert!(unit.source.contains("pub const ENTRY"));
                if !compress {
                    assert!(unit.source.contains("static DATA: &[u8] = b\"\";"));
                }
            }
        }
    }

    #[test]
    fn test_translate_is_idempotent() {
        let bytes: Vec<u8> = (0..=255u8).cycle().take(3000).collect();
        for compress in [false, true] {
            for zero_copy in [false, true] {
                let a = translate(&bytes, "bin/blob.dat", options(compress, zero_copy)).unwrap();
                let b = translate(&bytes, "bin/blob.dat", options(compress, zero_copy)).unwrap();
                assert_eq!(a.source, b.source);
            }
        }
    }

    #[test]
    fn test_header_records_path_and_switches() {
        let unit = translate(b"x", "images/Logo.png", options(true, true)).unwrap();
        let header = unit_header("images/Logo.png", options(true, true));
        assert_eq!(unit.source.lines().next(), Some(header.as_str()));
        assert!(header.starts_with(UNIT_MARKER));
        assert!(header.contains("\"images/Logo.png\" (gzip, zero-copy)"));

        let others = [
            unit_header("images/logo.png", options(true, true)),
            unit_header("images/Logo.png", options(false, true)),
            unit_header("images/Logo.png", options(true, false)),
        ];
        assert!(others.iter().all(|other| *other != header));
    }

    #[test]
    fn test_keyword_path_uses_raw_ident() {
        let unit = translate(b"x", "fn", options(false, false)).unwrap();
        assert!(unit.source.contains("pub fn r#fn()"));
        assert!(unit.source.contains("Entry::new(PATH, r#fn);"));
        assert_eq!(unit.ident.file_name(), "fn.rs");
    }

    #[test]
    fn test_path_literal_is_escaped() {
        let unit = translate(b"x", "win\\style.css", options(false, false)).unwrap();
        assert_eq!(unit.ident.as_str(), "win_style_css");
        assert!(unit.source.contains(r#"pub const PATH: &str = "win\\style.css";"#));
    }

    #[test]
    fn test_invalid_identifier_is_rejected() {
        let err = translate(b"x", "a+b.txt", options(false, false)).unwrap_err();
        assert!(matches!(err, GenError::InvalidIdent { .. }));
    }

    #[test]
    fn test_entry_matches_unit() {
        let unit = translate(b"x", "3d/model.obj", options(true, false)).unwrap();
        let entry = unit.entry();
        assert_eq!(entry.logical_path, "3d/model.obj");
        assert_eq!(entry.ident.as_str(), "_3d_model_obj");
    }
}
