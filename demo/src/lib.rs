//! The `assets/` directory embedded once per accessor mode.

/// Compressed, a fresh buffer per call.
pub mod copy {
    include!(concat!(env!("OUT_DIR"), "/copy/mod.rs"));
}

/// Uncompressed, a fresh buffer per call.
pub mod raw {
    include!(concat!(env!("OUT_DIR"), "/raw/mod.rs"));
}

/// Compressed, inflated once into shared read-only storage.
pub mod zero {
    include!(concat!(env!("OUT_DIR"), "/zero/mod.rs"));
}

/// Uncompressed, read-only views of the static data.
pub mod zero_raw {
    include!(concat!(env!("OUT_DIR"), "/zero_raw/mod.rs"));
}
