//! Input discovery: which files get embedded, under which logical path.

mod route;
mod scan;

pub use route::AssetRoute;
pub use scan::{logical_path, scan_assets};
