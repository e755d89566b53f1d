//! Preset roster oracle.
//!
//! A roster is an ordered list of [`CombatantSpec`] templates. The `name` of a
//! template is the preset label ("Swordsman", "Mage", ...); matchups copy the
//! stats and give the combatant its own name.

use crate::combatant::CombatantSpec;

/// Read-only access to the preset templates.
pub trait RosterOracle: Send + Sync {
    /// All templates, in display order.
    fn templates(&self) -> &[CombatantSpec];

    /// Template at a zero-based index.
    fn template(&self, index: usize) -> Option<&CombatantSpec> {
        self.templates().get(index)
    }

    fn len(&self) -> usize {
        self.templates().len()
    }

    fn is_empty(&self) -> bool {
        self.templates().is_empty()
    }
}

/// Roster backed by an owned list, for tests and embedded data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StaticRoster {
    templates: Vec<CombatantSpec>,
}

impl StaticRoster {
    pub fn new(templates: Vec<CombatantSpec>) -> Self {
        Self { templates }
    }

    pub fn into_inner(self) -> Vec<CombatantSpec> {
        self.templates
    }
}

impl From<Vec<CombatantSpec>> for StaticRoster {
    fn from(templates: Vec<CombatantSpec>) -> Self {
        Self::new(templates)
    }
}

impl RosterOracle for StaticRoster {
    fn templates(&self) -> &[CombatantSpec] {
        &self.templates
    }
}
