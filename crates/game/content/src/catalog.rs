//! In-memory content catalog implementing the core oracles.

use arena_core::{
    CombatantSpec, NameOracle, RandomSource, RosterOracle, pick_name, pick_name_excluding,
    sample_names,
};

use crate::presets::{builtin_roster, fallback_names};

/// Pool of character names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamePool {
    names: Vec<String>,
}

impl NamePool {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// The built-in fallback list.
    pub fn fallback() -> Self {
        Self::new(fallback_names())
    }

    pub fn random_name(&self, rng: &mut dyn RandomSource) -> Option<&str> {
        pick_name(&self.names, rng)
    }

    pub fn random_name_excluding(&self, excluded: &str, rng: &mut dyn RandomSource) -> Option<&str> {
        pick_name_excluding(&self.names, excluded, rng)
    }

    pub fn random_names(
        &self,
        count: usize,
        allow_duplicates: bool,
        rng: &mut dyn RandomSource,
    ) -> Vec<String> {
        sample_names(&self.names, count, allow_duplicates, rng)
    }

    pub fn all_names(&self) -> &[String] {
        &self.names
    }
}

impl NameOracle for NamePool {
    fn names(&self) -> &[String] {
        &self.names
    }
}

/// Roster and name pool loaded for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    roster: Vec<CombatantSpec>,
    names: NamePool,
}

impl Catalog {
    pub fn new(roster: Vec<CombatantSpec>, names: NamePool) -> Self {
        Self { roster, names }
    }

    /// Stock presets with the fallback names.
    pub fn builtin() -> Self {
        Self::new(builtin_roster(), NamePool::fallback())
    }

    pub fn name_pool(&self) -> &NamePool {
        &self.names
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RosterOracle for Catalog {
    fn templates(&self) -> &[CombatantSpec] {
        &self.roster
    }
}

impl NameOracle for Catalog {
    fn names(&self) -> &[String] {
        self.names.all_names()
    }
}
