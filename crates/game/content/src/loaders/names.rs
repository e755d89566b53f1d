//! Character name loader.

use std::path::Path;

use serde::Deserialize;

use crate::catalog::NamePool;
use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Deserialize)]
struct NamesFile {
    #[serde(default)]
    character_names: Vec<String>,
}

/// Loader for the character name pool from TOML files.
pub struct NameLoader;

impl NameLoader {
    /// Load the name pool.
    ///
    /// TOML format: `character_names = ["...", ...]`. Blank entries are
    /// dropped; a list that ends up empty is an error.
    pub fn load(path: &Path) -> LoadResult<NamePool> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<NamePool> {
        let file: NamesFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse names TOML: {}", e))?;

        let names: Vec<String> = file
            .character_names
            .into_iter()
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            anyhow::bail!("Character name list is empty");
        }

        Ok(NamePool::new(names))
    }

    /// Like [`load`](Self::load), but a missing file yields the built-in
    /// fallback names. Parse errors and empty lists are still errors.
    pub fn load_or_default(path: &Path) -> LoadResult<NamePool> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "name file not found, using fallback names");
            return Ok(NamePool::fallback());
        }
        let pool = Self::load(path)?;
        tracing::debug!(count = pool.all_names().len(), "loaded character names");
        Ok(pool)
    }
}
