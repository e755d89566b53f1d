//! Content factory for building the catalog from data files.

use std::path::{Path, PathBuf};

use arena_core::CombatantSpec;

use crate::catalog::{Catalog, NamePool};
use crate::loaders::{ConfigLoader, InfoLoader, LoadResult, NameLoader, RosterLoader};
use crate::presets::builtin_roster;
use crate::settings::ArenaSettings;

/// Content factory that loads all arena content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── info.toml
/// ├── names.toml
/// └── roster.ron
/// ```
///
/// Every file is optional: missing files fall back to built-in content.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const INFO_FILE: &'static str = "info.toml";
    pub const NAMES_FILE: &'static str = "names.toml";
    pub const ROSTER_FILE: &'static str = "roster.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle and display settings from `config.toml`.
    pub fn load_settings(&self) -> LoadResult<ArenaSettings> {
        ConfigLoader::load_or_default(&self.data_dir.join(Self::CONFIG_FILE))
    }

    /// Load presets from `roster.ron`, or the built-in roster.
    pub fn load_roster(&self) -> LoadResult<Vec<CombatantSpec>> {
        let path = self.data_dir.join(Self::ROSTER_FILE);
        if !path.exists() {
            tracing::info!(path = %path.display(), "roster file not found, using built-in presets");
            return Ok(builtin_roster());
        }
        RosterLoader::load(&path)
    }

    /// Load the name pool from `names.toml`, or the fallback names.
    pub fn load_names(&self) -> LoadResult<NamePool> {
        NameLoader::load_or_default(&self.data_dir.join(Self::NAMES_FILE))
    }

    /// Info screen text from `info.toml`, or a warning line.
    pub fn load_info(&self) -> String {
        InfoLoader::load_or_warning(&self.data_dir.join(Self::INFO_FILE))
    }

    /// Roster and name pool together.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        Ok(Catalog::new(self.load_roster()?, self.load_names()?))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
