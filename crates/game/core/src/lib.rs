//! Deterministic 1-vs-1 combat resolution.
//!
//! `arena-core` holds the rules: combatant state, the damage model, turn
//! order, the round engine and the battle controller that turns rounds into
//! a report. It performs no I/O. Randomness comes in through
//! [`env::RandomSource`], observers are fed through [`events::BattleSink`],
//! and preset data is read through the oracles in [`env`].
pub mod battle;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod env;
pub mod error;
pub mod events;
pub mod matchup;

pub use battle::{
    Battle, BattleBuilder, BattleError, BattleOutcome, BattleReport, BattleSummary, RoundLogEntry,
    RoundPhase,
};
pub use combat::{
    ActionRecord, DamageRoll, FixedOrder, MINIMUM_DAMAGE, TurnOrderPolicy, UniformRandomOrder,
    calculate_damage, resolve_damage,
};
pub use combatant::{Combatant, CombatantError, CombatantSpec, CombatantStatus, Side};
pub use config::{BattleConfig, ConfigError, DamageParams};
pub use env::{
    MAX_NAME_ATTEMPTS, NameOracle, PcgRng, RandomSource, RosterOracle, StaticRoster, pick_name,
    pick_name_excluding, sample_names,
};
pub use error::{ArenaError, ErrorSeverity};
pub use events::{BattleEvent, BattleSink, NullSink, RecordingSink};
pub use matchup::{Matchup, MatchupError, random_matchup, select_matchup};
