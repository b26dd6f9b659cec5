//! Generator configuration: `bindata.toml` merged with command-line flags.
//!
//! # Sources
//!
//! | Source         | Precedence | Relative paths resolve against |
//! |----------------|------------|--------------------------------|
//! | CLI flags      | highest    | current directory              |
//! | `bindata.toml` | lower      | the config file's directory    |
//! | defaults       | lowest     | -                              |
//!
//! # Example
//!
//! ```toml
//! input = "assets"
//! output = "src/assets"
//! module = "assets"
//! compress = true
//! zero_copy = false
//! ```

mod error;
mod util;

pub use error::ConfigError;
pub use util::{find_config_file, resolve_against};

use crate::{cli::Cli, engine::GenOptions, engine::is_valid_module_name, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file searched for when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "bindata.toml";

/// Default generated module name.
pub const DEFAULT_MODULE: &str = "assets";

/// Contents of `bindata.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Input root directory
    pub input: Option<PathBuf>,
    /// Output directory for generated units
    pub output: Option<PathBuf>,
    /// Generated module name
    pub module: Option<String>,
    /// Gzip payloads (default: true)
    pub compress: Option<bool>,
    /// Read-only accessors over static data (default: false)
    pub zero_copy: Option<bool>,
}

impl FileConfig {
    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Load from file, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {} (ignored): {}", path.display(), ignored.join(", "));
        }

        Ok(config)
    }
}

/// Resolved configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    /// Input root directory
    pub input: PathBuf,
    /// Output directory (one unit per asset + `mod.rs`)
    pub output: PathBuf,
    /// Generated module name
    pub module: String,
    /// Gzip payloads
    pub compress: bool,
    /// Zero-copy accessors
    pub zero_copy: bool,
    /// Retranslate every asset regardless of timestamps
    pub force: bool,
    /// Suppress progress and summary output
    pub quiet: bool,
}

impl GenConfig {
    /// Configuration with defaults for everything but the two directories.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            module: DEFAULT_MODULE.to_string(),
            compress: true,
            zero_copy: false,
            force: false,
            quiet: false,
        }
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    pub const fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub const fn with_zero_copy(mut self, zero_copy: bool) -> Self {
        self.zero_copy = zero_copy;
        self
    }

    pub const fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Engine switches for this run.
    pub const fn options(&self) -> GenOptions {
        GenOptions {
            compress: self.compress,
            zero_copy: self.zero_copy,
        }
    }

    /// Load configuration from CLI arguments.
    ///
    /// An explicit `--config` file must exist. Otherwise `bindata.toml` is
    /// searched upward from cwd, and not finding one is fine as long as the
    /// CLI supplies input and output.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let (file, base) = match locate_config(&cwd, cli.config.as_deref())? {
            Some(path) => {
                crate::debug!("config"; "using {}", path.display());
                let base = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.clone());
                (FileConfig::from_path(&path)?, base)
            }
            None => (FileConfig::default(), cwd.clone()),
        };

        let config = Self::merge(file, &base, cli)?;
        config.validate()?;
        Ok(config)
    }

    /// Combine file values with CLI overrides.
    pub fn merge(file: FileConfig, base: &Path, cli: &Cli) -> Result<Self, ConfigError> {
        let input = cli
            .dir
            .clone()
            .or_else(|| file.input.map(|p| resolve_against(base, &p)))
            .ok_or(ConfigError::Missing("input"))?;
        let output = cli
            .output
            .clone()
            .or_else(|| file.output.map(|p| resolve_against(base, &p)))
            .ok_or(ConfigError::Missing("output"))?;

        let module = cli
            .module
            .clone()
            .or(file.module)
            .unwrap_or_else(|| DEFAULT_MODULE.to_string());

        Ok(Self::new(input, output)
            .with_module(module)
            .with_compress(!cli.uncompressed && file.compress.unwrap_or(true))
            .with_zero_copy(cli.zero_copy || file.zero_copy.unwrap_or(false))
            .with_force(cli.force))
    }

    /// Check paths and names before any file is touched.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.input.is_dir() {
            return Err(ConfigError::Validation(format!(
                "input `{}` is not a directory",
                self.input.display()
            )));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Missing("output"));
        }
        if same_dir(&self.input, &self.output) {
            return Err(ConfigError::Validation(format!(
                "output `{}` must differ from input",
                self.output.display()
            )));
        }
        if !is_valid_module_name(&self.module) {
            return Err(ConfigError::Validation(format!(
                "module `{}` is not a valid Rust identifier",
                self.module
            )));
        }
        Ok(())
    }
}

/// Pick the config file to read, if any.
fn locate_config(cwd: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    match explicit {
        Some(path) => {
            let path = resolve_against(cwd, path);
            if path.is_file() {
                Ok(Some(path))
            } else {
                Err(ConfigError::NotFound(path))
            }
        }
        None => Ok(find_config_file(cwd, Path::new(DEFAULT_CONFIG))),
    }
}

/// Compare directories, canonicalizing when both exist.
fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
