//! Lookup table from logical asset path to accessor.
//!
//! Generated units each export one [`Entry`]; the generated `init()`
//! function builds a [`Registry`] from all of them. Nothing is registered
//! implicitly, the caller owns the returned table.

use std::collections::HashMap;
use std::fmt;

use crate::Error;

/// Zero-argument function returning an asset's bytes.
pub type Accessor<T> = fn() -> Result<T, Error>;

/// One `(logical path, accessor)` pair exported by a generated unit.
pub struct Entry<T> {
    path: &'static str,
    accessor: Accessor<T>,
}

impl<T> Entry<T> {
    pub const fn new(path: &'static str, accessor: Accessor<T>) -> Self {
        Self { path, accessor }
    }

    /// Logical path, relative to the embedded root with `/` separators.
    pub const fn path(&self) -> &'static str {
        self.path
    }

    pub const fn accessor(&self) -> Accessor<T> {
        self.accessor
    }

    /// Call the accessor.
    pub fn load(&self) -> Result<T, Error> {
        (self.accessor)()
    }
}

impl<T> Clone for Entry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Entry<T> {}

impl<T> fmt::Debug for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry").field("path", &self.path).finish()
    }
}

/// Mapping from logical path to accessor, built once by the generated `init()`.
pub struct Registry<T> {
    name: &'static str,
    entries: HashMap<&'static str, Accessor<T>>,
}

impl<T> Registry<T> {
    /// Create an empty registry for the generated module `name`.
    pub fn with_capacity(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Add an entry, returning the accessor previously stored under the same path.
    pub fn register(&mut self, entry: Entry<T>) -> Option<Accessor<T>> {
        self.entries.insert(entry.path, entry.accessor)
    }

    /// Name of the generated module this registry belongs to.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Load the asset stored under `path`.
    ///
    /// Returns `None` for unknown paths and `Some(Err(_))` when the embedded
    /// payload fails to decode.
    pub fn get(&self, path: &str) -> Option<Result<T, Error>> {
        self.entries.get(path).map(|accessor| accessor())
    }

    pub fn accessor(&self, path: &str) -> Option<Accessor<T>> {
        self.entries.get(path).copied()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered logical paths, sorted.
    pub fn paths(&self) -> Vec<&'static str> {
        let mut paths: Vec<_> = self.entries.keys().copied().collect();
        paths.sort_unstable();
        paths
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("paths", &self.paths())
            .finish()
    }
}
