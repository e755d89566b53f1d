//! Match setup from roster presets.
//!
//! Two ways to pick a pair of combatants: by preset index (players choosing)
//! or at random with names from the name pool. Both only build combatants;
//! starting the battle is up to the caller.

use crate::combatant::{Combatant, CombatantError, CombatantSpec};
use crate::env::{NameOracle, RandomSource, RosterOracle, pick_name, pick_name_excluding};
use crate::error::{ArenaError, ErrorSeverity};

/// Name used when the name pool is empty.
pub const FALLBACK_NAME: &str = "Challenger";

/// Rejected match setup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchupError {
    #[error("roster has no presets")]
    EmptyRoster,

    #[error("no preset at index {index} (roster has {len})")]
    UnknownPreset { index: usize, len: usize },

    #[error(transparent)]
    Combatant(#[from] CombatantError),
}

impl ArenaError for MatchupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyRoster => "MATCHUP_EMPTY_ROSTER",
            Self::UnknownPreset { .. } => "MATCHUP_UNKNOWN_PRESET",
            Self::Combatant(inner) => inner.error_code(),
        }
    }
}

/// Two combatants ready to be handed to a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matchup {
    pub first: Combatant,
    pub second: Combatant,
    /// Roster indices the combatants were built from.
    pub presets: [usize; 2],
}

impl Matchup {
    pub fn into_pair(self) -> (Combatant, Combatant) {
        (self.first, self.second)
    }
}

fn preset<'a>(roster: &'a dyn RosterOracle, index: usize) -> Result<&'a CombatantSpec, MatchupError> {
    roster.template(index).ok_or(MatchupError::UnknownPreset {
        index,
        len: roster.len(),
    })
}

/// Build the pair chosen by two players, named "Player 1" and "Player 2".
///
/// Indices are zero-based. The same preset may be picked twice.
pub fn select_matchup(
    roster: &dyn RosterOracle,
    first: usize,
    second: usize,
) -> Result<Matchup, MatchupError> {
    if roster.is_empty() {
        return Err(MatchupError::EmptyRoster);
    }

    let first_spec = preset(roster, first)?.renamed("Player 1");
    let second_spec = preset(roster, second)?.renamed("Player 2");

    Ok(Matchup {
        first: Combatant::new(first_spec)?,
        second: Combatant::new(second_spec)?,
        presets: [first, second],
    })
}

/// Two uniformly drawn presets (possibly the same one) with distinct names
/// from the pool.
///
/// Draw order: first preset, second preset, first name, second name.
pub fn random_matchup(
    roster: &dyn RosterOracle,
    names: &dyn NameOracle,
    rng: &mut dyn RandomSource,
) -> Result<Matchup, MatchupError> {
    if roster.is_empty() {
        return Err(MatchupError::EmptyRoster);
    }

    let first = rng.index(roster.len());
    let second = rng.index(roster.len());

    let pool = names.names();
    let first_name = pick_name(pool, rng).unwrap_or(FALLBACK_NAME).to_owned();
    let second_name = match pick_name_excluding(pool, &first_name, rng) {
        Some(name) => name.to_owned(),
        None => format!("{first_name} 2"),
    };

    Ok(Matchup {
        first: Combatant::new(preset(roster, first)?.renamed(first_name))?,
        second: Combatant::new(preset(roster, second)?.renamed(second_name))?,
        presets: [first, second],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, StaticRoster};

    struct Names(Vec<String>);

    impl NameOracle for Names {
        fn names(&self) -> &[String] {
            &self.0
        }
    }

    fn roster() -> StaticRoster {
        StaticRoster::new(vec![
            CombatantSpec::new("Swordsman", "Swordsman", 100, 25, 8),
            CombatantSpec::new("Mage", "Mage", 80, 35, 5).with_title("Archmage"),
            CombatantSpec::new("Archer", "Archer", 90, 30, 6),
        ])
    }

    #[test]
    fn select_copies_preset_stats_under_player_names() {
        let matchup = select_matchup(&roster(), 1, 1).unwrap();

        assert_eq!(matchup.first.name(), "Player 1");
        assert_eq!(matchup.second.name(), "Player 2");
        assert_eq!(matchup.first.class(), "Mage");
        assert_eq!(matchup.first.max_health(), 80);
        assert_eq!(matchup.second.attack(), 35);
        assert_eq!(matchup.first.full_name(), "Archmage Player 1 [Mage]");
        assert_eq!(matchup.presets, [1, 1]);
    }

    #[test]
    fn select_rejects_out_of_range_index() {
        let err = select_matchup(&roster(), 0, 3).unwrap_err();
        assert_eq!(err, MatchupError::UnknownPreset { index: 3, len: 3 });
        assert_eq!(err.error_code(), "MATCHUP_UNKNOWN_PRESET");
    }

    #[test]
    fn empty_roster_is_rejected() {
        let empty = StaticRoster::default();
        let names = Names(vec!["Ayla".into()]);
        let mut rng = PcgRng::new(0);

        assert_eq!(select_matchup(&empty, 0, 0), Err(MatchupError::EmptyRoster));
        assert_eq!(
            random_matchup(&empty, &names, &mut rng),
            Err(MatchupError::EmptyRoster)
        );
    }

    #[test]
    fn random_names_are_distinct() {
        let names = Names(vec!["Ayla".into(), "Bren".into(), "Cato".into()]);
        for seed in 0..100 {
            let mut rng = PcgRng::new(seed);
            let matchup = random_matchup(&roster(), &names, &mut rng).unwrap();
            assert_ne!(matchup.first.name(), matchup.second.name());
            assert!(matchup.presets.iter().all(|&i| i < 3));
        }
    }

    #[test]
    fn single_name_pool_gets_a_suffix() {
        let names = Names(vec!["Solo".into()]);
        let mut rng = PcgRng::new(5);
        let matchup = random_matchup(&roster(), &names, &mut rng).unwrap();
        assert_eq!(matchup.first.name(), "Solo");
        assert_eq!(matchup.second.name(), "Solo 2");
    }

    #[test]
    fn empty_name_pool_uses_fallback() {
        let names = Names(Vec::new());
        let mut rng = PcgRng::new(6);
        let (first, second) = random_matchup(&roster(), &names, &mut rng)
            .unwrap()
            .into_pair();
        assert_eq!(first.name(), FALLBACK_NAME);
        assert_eq!(second.name(), "Challenger 2");
    }

    #[test]
    fn same_seed_same_matchup() {
        let names = Names(vec!["Ayla".into(), "Bren".into(), "Cato".into(), "Dara".into()]);
        let a = random_matchup(&roster(), &names, &mut PcgRng::new(42)).unwrap();
        let b = random_matchup(&roster(), &names, &mut PcgRng::new(42)).unwrap();
        assert_eq!(a, b);
    }
}
