//! Translation engine: asset bytes to generated Rust source.
//!
//! # Module Structure
//!
//! - `ident` - logical path to accessor identifier
//! - `compress` - optional gzip of the payload
//! - `encode` - byte-string literal and accessor layout
//! - `translate` - one generated unit per asset
//! - `registry` - the shared lookup table unit
//!
//! # Data Flow
//!
//! ```text
//! (bytes, logical path) ──► ident ───────────────┐
//!                      └──► compress ──► encode ─┴─► translate ──► GeneratedUnit
//!                                                                       │ entry()
//!                         [RegistryEntry, ...] ──► assemble_registry ◄──┘
//! ```

mod compress;
mod encode;
mod ident;
mod registry;
mod translate;

pub use compress::{Payload, compress};
pub use encode::{EncodedPayload, Layout, byte_literal, encode};
pub use ident::{Ident, is_valid_module_name, sanitize};
pub use registry::{REGISTRY_FILE, assemble_registry, write_registry};
pub use translate::{GeneratedUnit, UNIT_MARKER, translate, unit_header};

/// Engine switches, fixed for a whole generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenOptions {
    /// Gzip payloads and inflate them at access time.
    pub compress: bool,
    /// Hand out read-only views of static data instead of fresh copies.
    pub zero_copy: bool,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            compress: true,
            zero_copy: false,
        }
    }
}

impl GenOptions {
    pub const fn layout(self) -> Layout {
        Layout::from_zero_copy(self.zero_copy)
    }
}

/// `logical path -> accessor` registration collected by the registry assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub logical_path: String,
    pub ident: Ident,
}
