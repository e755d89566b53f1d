//! Content loaders for reading arena data from files.
//!
//! RON for the roster, TOML for everything else. Each loader has a strict
//! `load` and, where a missing file has a sensible stand-in, a lenient
//! `load_or_default` that logs the substitution.

pub mod config;
pub mod factory;
pub mod info;
pub mod names;
pub mod roster;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use info::InfoLoader;
pub use names::NameLoader;
pub use roster::RosterLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
