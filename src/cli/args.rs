//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Embed a directory of files into Rust source, one accessor per file
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Input directory, processed recursively (hidden entries are skipped)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Output directory for the generated units and `mod.rs`
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Name of the generated module (default: assets)
    #[arg(short = 'p', long)]
    pub module: Option<String>,

    /// Embed files as-is instead of gzip-compressing them
    #[arg(short, long)]
    pub uncompressed: bool,

    /// Return read-only views of static data instead of fresh copies.
    ///
    /// Accessors return `StaticBytes`, which cannot be mutated. Saves one
    /// allocation and copy per call.
    #[arg(short = 'm', long)]
    pub zero_copy: bool,

    /// Retranslate every file, ignoring timestamps
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file path; without it, bindata.toml is searched upward from cwd
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["bindata", "-d", "assets", "-o", "gen", "-p", "files", "-u", "-m"]);
        assert_eq!(cli.dir, Some(PathBuf::from("assets")));
        assert_eq!(cli.output, Some(PathBuf::from("gen")));
        assert_eq!(cli.module.as_deref(), Some("files"));
        assert!(cli.uncompressed);
        assert!(cli.zero_copy);
        assert!(!cli.force);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_parse_explicit_config() {
        let cli = Cli::parse_from(["bindata", "-C", "release.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("release.toml")));
    }

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
