//! Preset roster loader.

use std::path::Path;

use arena_core::{Combatant, CombatantSpec};

use crate::loaders::{LoadResult, read_file};

/// Loader for the preset roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load roster templates from a RON file.
    ///
    /// RON format: `Vec<CombatantSpec>`, one entry per preset. `name` is the
    /// preset label shown in the selection menu.
    ///
    /// Every template is checked by building a combatant from it, so a bad
    /// preset is reported here rather than when a player picks it.
    pub fn load(path: &Path) -> LoadResult<Vec<CombatantSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<CombatantSpec>> {
        let roster: Vec<CombatantSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        if roster.is_empty() {
            anyhow::bail!("Roster must contain at least one preset");
        }
        for (index, spec) in roster.iter().enumerate() {
            Combatant::new(spec.clone())
                .map_err(|e| anyhow::anyhow!("Invalid preset #{} '{}': {}", index + 1, spec.name, e))?;
        }

        Ok(roster)
    }
}
