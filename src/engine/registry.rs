//! Registry unit: one lookup table per output directory.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use super::{Layout, RegistryEntry};
use crate::error::{GenError, Result};

/// File name of the registry unit inside the output directory.
pub const REGISTRY_FILE: &str = "mod.rs";

/// Render the registry unit for `entries`.
///
/// The unit pulls in every asset unit as a submodule and defines `init()`,
/// which builds the table by registering each unit's `ENTRY`. Entries are
/// sorted first, so the text depends only on the set of assets.
pub fn assemble_registry(module: &str, layout: Layout, entries: &[RegistryEntry]) -> String {
    let mut entries: Vec<&RegistryEntry> = entries.iter().collect();
    entries.sort_by(|a, b| a.logical_path.cmp(&b.logical_path));

    let mut out = String::with_capacity(512 + entries.len() * 96);
    let _ = writeln!(out, "// Code generated by bindata. DO NOT EDIT.");
    let _ = writeln!(out, "//");
    let _ = writeln!(out, "// Embedded assets: {}", entries.len());
    for entry in &entries {
        let _ = writeln!(out, "//   {:?} => {}", entry.logical_path, entry.ident);
    }
    out.push('\n');

    let _ = writeln!(out, "/// Name of the generated asset module.");
    let _ = writeln!(out, "pub const MODULE: &str = {module:?};");
    out.push('\n');
    let _ = writeln!(out, "/// Buffer type returned by every accessor in this module.");
    let _ = writeln!(out, "pub type Data = {};", layout.data_type());
    out.push('\n');

    for entry in &entries {
        let _ = writeln!(out, "pub mod {} {{", entry.ident.rust());
        let _ = writeln!(out, "    include!({:?});", entry.ident.file_name());
        let _ = writeln!(out, "}}");
        out.push('\n');
    }

    let _ = writeln!(out, "/// Build the lookup table from logical path to accessor.");
    let _ = writeln!(out, "///");
    let _ = writeln!(out, "/// Call once at program start and keep the returned registry.");
    let _ = writeln!(out, "pub fn init() -> ::bindata_runtime::Registry<Data> {{");
    if entries.is_empty() {
        let _ = writeln!(out, "    ::bindata_runtime::Registry::with_capacity(MODULE, 0)");
    } else {
        let _ = writeln!(
            out,
            "    let mut registry = ::bindata_runtime::Registry::with_capacity(MODULE, {});",
            entries.len()
        );
        for entry in &entries {
            let _ = writeln!(out, "    registry.register({}::ENTRY);", entry.ident.rust());
        }
        let _ = writeln!(out, "    registry");
    }
    let _ = writeln!(out, "}}");
    out
}

/// Write the registry unit unless an identical one is already present.
///
/// Returns `true` if the file was written.
pub fn write_registry(output_dir: &Path, contents: &str) -> Result<bool> {
    let path = output_dir.join(REGISTRY_FILE);
    match fs::read(&path) {
        Ok(existing) if existing == contents.as_bytes() => return Ok(false),
        Ok(_) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(GenError::Io(path, err)),
    }
    fs::write(&path, contents).map_err(GenError::io(&path))?;
    Ok(true)
}
