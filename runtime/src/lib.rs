//! Runtime support for code generated by `bindata`.
//!
//! Every generated asset unit links against this crate. It provides:
//!
//! - [`Error`] - surfaced by accessors when an embedded payload is corrupt
//! - [`StaticBytes`] - read-only view returned in zero-copy mode
//! - [`Entry`] / [`Registry`] - logical path to accessor lookup
//! - [`inflate`] / [`inflate_cached`] - gzip decoding of compressed payloads
//!
//! # Usage
//!
//! ```ignore
//! mod assets; // generated `assets/mod.rs`
//!
//! let registry = assets::init();
//! let logo = registry.get("images/logo.png").expect("embedded")?;
//! ```

mod error;
mod inflate;
mod registry;
mod static_bytes;

pub use error::Error;
pub use inflate::{InflateCache, inflate, inflate_cached};
pub use registry::{Accessor, Entry, Registry};
pub use static_bytes::StaticBytes;
