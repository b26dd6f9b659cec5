use std::env;
use std::path::PathBuf;

use bindata::GenConfig;

/// Output subdirectory and `(compress, zero_copy)` for each generated module.
const MODES: &[(&str, bool, bool)] = &[
    ("copy", true, false),
    ("raw", false, false),
    ("zero", true, true),
    ("zero_raw", false, true),
];

fn main() -> anyhow::Result<()> {
    println!("cargo:rerun-if-changed=assets");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    for &(name, compress, zero_copy) in MODES {
        let config = GenConfig::new("assets", out_dir.join(name))
            .with_module(name)
            .with_compress(compress)
            .with_zero_copy(zero_copy)
            .with_quiet(true);
        bindata::generate(&config)?;
    }
    Ok(())
}
