//! Built-in content used when data files are absent.

use arena_core::CombatantSpec;

/// The six stock presets: label, max health, attack, defense.
const PRESETS: [(&str, u32, u32, u32); 6] = [
    ("Swordsman", 100, 25, 8),
    ("Mage", 80, 35, 5),
    ("Archer", 90, 30, 6),
    ("Shield Guard", 120, 20, 12),
    ("Assassin", 70, 40, 4),
    ("Paladin", 110, 22, 10),
];

/// Names used when no name file can be found.
pub const FALLBACK_NAMES: [&str; 5] = [
    "Mysterious Warrior",
    "Brave Adventurer",
    "Shadow Assassin",
    "Holy Knight",
    "Elemental Mage",
];

/// Shown in place of the info screen when `info.toml` is missing or empty.
pub const INFO_UNAVAILABLE: &str = "Warning: failed to read the game info file";

/// The stock roster. Each preset's class equals its label.
pub fn builtin_roster() -> Vec<CombatantSpec> {
    PRESETS
        .iter()
        .map(|&(label, health, attack, defense)| {
            CombatantSpec::new(label, label, health, attack, defense)
        })
        .collect()
}

pub fn fallback_names() -> Vec<String> {
    FALLBACK_NAMES.iter().map(|&name| name.to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::Combatant;

    #[test]
    fn builtin_presets_are_valid_combatants() {
        let roster = builtin_roster();
        assert_eq!(roster.len(), 6);
        for spec in roster {
            assert!(Combatant::new(spec).is_ok());
        }
    }

    #[test]
    fn shield_guard_is_the_tank() {
        let roster = builtin_roster();
        let guard = &roster[3];
        assert_eq!(guard.name, "Shield Guard");
        assert_eq!((guard.max_health, guard.attack, guard.defense), (120, 20, 12));
    }
}
