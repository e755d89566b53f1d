//! Info screen text loader.

use std::path::Path;

use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};
use crate::presets::INFO_UNAVAILABLE;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InfoFile {
    game_info: InfoSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InfoSection {
    content: String,
}

/// Loader for the info screen from TOML files.
pub struct InfoLoader;

impl InfoLoader {
    /// Load `[game_info] content` from a TOML file.
    ///
    /// # Errors
    ///
    /// Unreadable or malformed files, or an empty `content`.
    pub fn load(path: &Path) -> LoadResult<String> {
        let content = read_file(path)?;
        let file: InfoFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse info TOML: {}", e))?;

        if file.game_info.content.trim().is_empty() {
            anyhow::bail!("Info file {} has no content", path.display());
        }
        Ok(file.game_info.content)
    }

    /// Info text, or [`INFO_UNAVAILABLE`] when it cannot be loaded.
    pub fn load_or_warning(path: &Path) -> String {
        match Self::load(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "info screen unavailable");
                INFO_UNAVAILABLE.to_owned()
            }
        }
    }
}
