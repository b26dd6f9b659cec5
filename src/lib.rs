//! bindata - embed a directory of files into Rust source.
//!
//! Each input file becomes one generated unit exposing a zero-argument
//! accessor that returns the file's exact bytes, and a shared `mod.rs`
//! registry maps logical paths to those accessors. Generated code links
//! against the `bindata-runtime` crate.
//!
//! # Library use (build scripts)
//!
//! ```no_run
//! let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap());
//! let config = bindata::GenConfig::new("assets", out_dir.join("assets")).with_quiet(true);
//! bindata::generate(&config).expect("embed assets");
//! ```

pub mod asset;
pub mod cli;
pub mod config;
pub mod engine;
mod error;
pub mod freshness;
pub mod generator;
pub mod logger;
pub mod utils;

pub use config::GenConfig;
pub use error::{GenError, Result};
pub use generator::{GenerateReport, generate};
