//! Generation run: scan the input root, translate stale assets, assemble the registry.
//!
//! ```text
//! scan ──► plan (identifiers, collisions) ──► filter stale ──► translate (parallel)
//!                                                                   │ join
//!       prune leftovers ◄── write mod.rs if changed ◄── assemble registry
//! ```
//!
//! Every asset is translated independently, so translation runs on the
//! rayon pool without locks. The registry is assembled only after all
//! workers have finished and always covers every scanned asset, including
//! those whose units were up to date.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::asset::{AssetRoute, scan_assets};
use crate::config::GenConfig;
use crate::engine::{
    GenOptions, Ident, REGISTRY_FILE, RegistryEntry, UNIT_MARKER, assemble_registry, translate,
    unit_header, write_registry,
};
use crate::error::{GenError, Result};
use crate::freshness::{get_mtime, is_unit_current, read_header};
use crate::logger::ProgressLine;
use crate::utils::plural_count;
use crate::{debug, log};

/// Outcome of a generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Assets found under the input root
    pub assets: usize,
    /// Units (re)written this run
    pub translated: usize,
    /// Units skipped because they were up to date
    pub skipped: usize,
    /// Whether `mod.rs` was written
    pub registry_written: bool,
    /// Leftover units and temporary files deleted
    pub removed: usize,
}

/// An asset together with its identifier and unit path.
#[derive(Debug)]
struct PlannedUnit {
    route: AssetRoute,
    ident: Ident,
    output: PathBuf,
}

/// Run the generator once.
///
/// # Errors
///
/// Aborts on the first unreadable input, unwritable output, invalid
/// identifier or identifier collision. Nothing is written when planning
/// fails; units already written by this run stay on disk, and `mod.rs` and
/// leftovers are only touched once every unit has been written.
///
/// A unit is kept only if it is at least as new as its asset and its first
/// line matches the one this run would emit, so changing `compress`,
/// `zero_copy` or the case of a path retranslates the affected units.
pub fn generate(config: &GenConfig) -> Result<GenerateReport> {
    let assets = scan_assets(&config.input)?;
    let planned = plan_units(assets, &config.output)?;

    fs::create_dir_all(&config.output).map_err(GenError::io(&config.output))?;

    let options = config.options();
    let stale: Vec<&PlannedUnit> = planned
        .iter()
        .filter(|unit| {
            config.force
                || !is_unit_current(
                    &unit.output,
                    get_mtime(&unit.route.source),
                    &unit_header(&unit.route.logical, options),
                )
        })
        .collect();
    let progress = (!config.quiet && !stale.is_empty())
        .then(|| ProgressLine::new(&[("assets", stale.len())]));

    stale.par_iter().try_for_each(|unit| {
        translate_file(unit, options)?;
        if let Some(progress) = &progress {
            progress.inc("assets");
        }
        Ok::<_, GenError>(())
    })?;

    if let Some(progress) = progress {
        progress.finish();
    }

    let entries: Vec<RegistryEntry> = planned
        .iter()
        .map(|unit| RegistryEntry {
            logical_path: unit.route.logical.clone(),
            ident: unit.ident.clone(),
        })
        .collect();
    let registry = assemble_registry(&config.module, options.layout(), &entries);
    let registry_written = write_registry(&config.output, &registry)?;
    let removed = prune_outputs(&config.output, &planned)?;

    let report = GenerateReport {
        assets: planned.len(),
        translated: stale.len(),
        skipped: planned.len() - stale.len(),
        registry_written,
        removed,
    };

    if !config.quiet {
        let mut summary = format!(
            "{} translated, {} up to date",
            plural_count(report.translated, "asset"),
            report.skipped
        );
        if registry_written {
            summary.push_str(", registry updated");
        }
        if removed > 0 {
            summary.push_str(&format!(", {} removed", plural_count(removed, "leftover")));
        }
        log!("generate"; "{summary}");
    }

    Ok(report)
}

/// Derive identifiers and unit paths, rejecting collisions before any write.
fn plan_units(assets: Vec<AssetRoute>, output_dir: &Path) -> Result<Vec<PlannedUnit>> {
    let mut seen: FxHashMap<String, String> = FxHashMap::default();
    let mut planned = Vec::with_capacity(assets.len());

    for route in assets {
        let ident = Ident::from_path(&route.logical)?;
        if let Some(first) = seen.insert(ident.as_str().to_string(), route.logical.clone()) {
            return Err(GenError::Collision {
                ident: ident.to_string(),
                first,
                second: route.logical,
            });
        }

        let output = output_dir.join(ident.file_name());
        planned.push(PlannedUnit {
            route,
            ident,
            output,
        });
    }

    Ok(planned)
}

/// Read one asset, translate it and write its unit.
///
/// Writes through a temporary file so an interrupted run never leaves a
/// truncated unit that looks up to date.
fn translate_file(unit: &PlannedUnit, options: GenOptions) -> Result<()> {
    debug!("translate"; "{}", unit.route.source.display());

    let bytes = fs::read(&unit.route.source).map_err(GenError::io(&unit.route.source))?;
    let generated = translate(&bytes, &unit.route.logical, options)?;

    let tmp = unit.output.with_extension("rs.tmp");
    fs::write(&tmp, generated.source).map_err(GenError::io(&tmp))?;
    fs::rename(&tmp, &unit.output).map_err(GenError::io(&unit.output))
}

/// Delete units of assets that no longer exist and `.rs.tmp` files left by
/// failed writes.
///
/// Only files whose first line carries the unit marker are deleted, so
/// hand-written sources in the output directory survive.
fn prune_outputs(output_dir: &Path, planned: &[PlannedUnit]) -> Result<usize> {
    let keep: FxHashSet<&Path> = planned.iter().map(|unit| unit.output.as_path()).collect();
    let entries = fs::read_dir(output_dir).map_err(GenError::io(output_dir))?;

    let mut removed = 0;
    for entry in entries {
        let path = entry.map_err(GenError::io(output_dir))?.path();
        if !path.is_file() || keep.contains(path.as_path()) || is_registry(&path) {
            continue;
        }

        let name = path.file_name().and_then(|name| name.to_str()).unwrap_or_default();
        let leftover = name.ends_with(".rs.tmp")
            || (name.ends_with(".rs")
                && read_header(&path).is_some_and(|line| line.starts_with(UNIT_MARKER)));
        if leftover {
            debug!("generate"; "removing {}", path.display());
            fs::remove_file(&path).map_err(GenError::io(&path))?;
            removed += 1;
        }
    }

    Ok(removed)
}

fn is_registry(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == REGISTRY_FILE)
}
