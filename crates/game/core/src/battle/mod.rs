//! Battle controller.
//!
//! [`Battle`] is the aggregate root of a simulation. It owns both combatants,
//! the random source, the turn-order policy and the event sink for its whole
//! lifetime, so nothing outside can mutate a fight in progress. Rounds are
//! played through [`Battle::execute_round`] (see [`round`]) and the battle
//! becomes terminal on the first death or when the round cap is reached.
//!
//! ```
//! use arena_core::{Battle, BattleOutcome, Combatant, CombatantSpec};
//!
//! let knight = Combatant::new(CombatantSpec::new("Ayla", "Swordsman", 100, 25, 8))?;
//! let rogue = Combatant::new(CombatantSpec::new("Bren", "Assassin", 70, 40, 4))?;
//!
//! let mut battle = Battle::builder(knight, rogue).seed(7).build()?;
//! let report = battle.fight()?;
//!
//! assert!(report.total_rounds <= 50);
//! assert_eq!(report.outcome == BattleOutcome::Victory, report.winner.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod report;
pub mod round;

pub use report::{BattleOutcome, BattleReport, BattleSummary};
pub use round::{RoundLogEntry, RoundPhase};

use core::fmt;

use crate::combat::{TurnOrderPolicy, UniformRandomOrder};
use crate::combatant::{Combatant, Side};
use crate::config::{BattleConfig, ConfigError};
use crate::env::{PcgRng, RandomSource};
use crate::error::{ArenaError, ErrorSeverity};
use crate::events::{BattleEvent, BattleSink, NullSink};

/// Errors surfaced by the battle controller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    #[error("battle already ended after {rounds} rounds")]
    AlreadyEnded { rounds: u32 },

    #[error("max_rounds must be at least 1")]
    InvalidMaxRounds,

    #[error("both combatants are named '{name}'; names identify attackers in the log")]
    DuplicateName { name: String },

    #[error("invalid battle configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ArenaError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyEnded { .. } => ErrorSeverity::Misuse,
            Self::InvalidMaxRounds | Self::DuplicateName { .. } | Self::Config(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyEnded { .. } => "BATTLE_ALREADY_ENDED",
            Self::InvalidMaxRounds => "BATTLE_INVALID_MAX_ROUNDS",
            Self::DuplicateName { .. } => "BATTLE_DUPLICATE_NAME",
            Self::Config(inner) => inner.error_code(),
        }
    }
}

type BoxedRng = Box<dyn RandomSource + Send>;
type BoxedPolicy = Box<dyn TurnOrderPolicy + Send>;
type BoxedSink = Box<dyn BattleSink + Send>;

/// A 1-vs-1 battle.
pub struct Battle {
    combatants: [Combatant; 2],
    round_number: u32,
    log: Vec<RoundLogEntry>,
    winner: Option<Side>,
    ended: bool,
    config: BattleConfig,
    rng: BoxedRng,
    turn_order: BoxedPolicy,
    sink: BoxedSink,
}

impl fmt::Debug for Battle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Battle")
            .field("combatants", &self.combatants)
            .field("round_number", &self.round_number)
            .field("winner", &self.winner)
            .field("ended", &self.ended)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Battle {
    /// Start building a battle between two combatants.
    pub fn builder(first: Combatant, second: Combatant) -> BattleBuilder {
        BattleBuilder::new(first, second)
    }

    /// Default battle with a seeded [`PcgRng`], uniform turn order and no sink.
    pub fn new(first: Combatant, second: Combatant, seed: u64) -> Result<Self, BattleError> {
        Self::builder(first, second).seed(seed).build()
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn combatants(&self) -> &[Combatant; 2] {
        &self.combatants
    }

    /// Completed rounds so far.
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn log(&self) -> &[RoundLogEntry] {
        &self.log
    }

    pub fn winner_side(&self) -> Option<Side> {
        self.winner
    }

    pub fn winner(&self) -> Option<&Combatant> {
        self.winner.map(|side| self.combatant(side))
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Fight until the configured round cap.
    pub fn fight(&mut self) -> Result<BattleReport, BattleError> {
        self.fight_until_end(self.config.max_rounds)
    }

    /// Play rounds until someone dies or `round_number` reaches `max_rounds`.
    ///
    /// Reaching the cap is a normal outcome: the battle is marked ended and
    /// reported as [`BattleOutcome::Timeout`]. Calling this on a battle that
    /// already ended plays nothing and reports its final state, which lets a
    /// paced driver run rounds itself and classify at the end.
    ///
    /// # Errors
    ///
    /// [`BattleError::InvalidMaxRounds`] when `max_rounds` is zero.
    pub fn fight_until_end(&mut self, max_rounds: u32) -> Result<BattleReport, BattleError> {
        if max_rounds == 0 {
            return Err(BattleError::InvalidMaxRounds);
        }

        while !self.ended && self.round_number < max_rounds {
            self.execute_round()?;
        }

        if !self.ended {
            self.ended = true;
            self.emit_ended(BattleOutcome::Timeout);
        }

        Ok(self.report(max_rounds))
    }

    /// Build the report for the current state without playing any round.
    pub fn report(&self, max_rounds: u32) -> BattleReport {
        match self.winner {
            Some(side) => BattleReport {
                outcome: BattleOutcome::Victory,
                winner: Some(self.combatant(side).name().to_owned()),
                loser: Some(self.combatant(side.opponent()).name().to_owned()),
                total_rounds: self.round_number,
                max_rounds_reached: self.round_number >= max_rounds,
                log: self.log.clone(),
            },
            None => BattleReport {
                outcome: BattleOutcome::Timeout,
                winner: None,
                loser: None,
                total_rounds: self.round_number,
                max_rounds_reached: self.round_number >= max_rounds,
                log: self.log.clone(),
            },
        }
    }

    /// Total damage dealt by each combatant, round count, winner and status.
    ///
    /// Pure aggregation over the log; safe before the battle ends.
    pub fn battle_summary(&self) -> BattleSummary {
        let first = self.combatants[0].name();
        let mut dealt = [0u64; 2];

        for action in self.log.iter().flat_map(|entry| &entry.actions) {
            let side = if action.attacker == first {
                Side::First
            } else {
                Side::Second
            };
            dealt[side.index()] += u64::from(action.actual_damage);
        }

        BattleSummary {
            total_rounds: self.round_number,
            damage_dealt_by_combatant1: dealt[0],
            damage_dealt_by_combatant2: dealt[1],
            winner: self.winner().map(|c| c.name().to_owned()),
            ended: self.ended,
        }
    }

    fn emit_ended(&mut self, outcome: BattleOutcome) {
        let summary = self.battle_summary();
        self.sink.write(&BattleEvent::Ended { outcome, summary });
    }
}

/// Assembles a [`Battle`] with its collaborators.
///
/// Defaults: [`BattleConfig::default`], a [`PcgRng`] seeded with `0`,
/// [`UniformRandomOrder`] and [`NullSink`].
pub struct BattleBuilder {
    first: Combatant,
    second: Combatant,
    config: BattleConfig,
    seed: u64,
    rng: Option<BoxedRng>,
    turn_order: Option<BoxedPolicy>,
    sink: Option<BoxedSink>,
}

impl BattleBuilder {
    fn new(first: Combatant, second: Combatant) -> Self {
        Self {
            first,
            second,
            config: BattleConfig::default(),
            seed: 0,
            rng: None,
            turn_order: None,
            sink: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed for the default [`PcgRng`]. Ignored when [`rng`](Self::rng) is set.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn rng(mut self, rng: impl RandomSource + Send + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    #[must_use]
    pub fn turn_order(mut self, policy: impl TurnOrderPolicy + Send + 'static) -> Self {
        self.turn_order = Some(Box::new(policy));
        self
    }

    #[must_use]
    pub fn sink(mut self, sink: impl BattleSink + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Validate and build. Both combatants are reset to full health and a
    /// [`BattleEvent::Started`] is written to the sink.
    ///
    /// # Errors
    ///
    /// Invalid configuration, or both combatants sharing a name.
    pub fn build(self) -> Result<Battle, BattleError> {
        self.config.validate()?;
        if self.first.name() == self.second.name() {
            return Err(BattleError::DuplicateName {
                name: self.first.name().to_owned(),
            });
        }

        let mut combatants = [self.first, self.second];
        for combatant in &mut combatants {
            combatant.reset();
        }

        let rng: BoxedRng = match self.rng {
            Some(rng) => rng,
            None => Box::new(PcgRng::new(self.seed)),
        };
        let turn_order: BoxedPolicy = match self.turn_order {
            Some(policy) => policy,
            None => Box::new(UniformRandomOrder),
        };
        let sink: BoxedSink = match self.sink {
            Some(sink) => sink,
            None => Box::new(NullSink),
        };

        let mut battle = Battle {
            combatants,
            round_number: 0,
            log: Vec::new(),
            winner: None,
            ended: false,
            config: self.config,
            rng,
            turn_order,
            sink,
        };

        battle.sink.write(&BattleEvent::Started {
            first: battle.combatants[0].status(),
            second: battle.combatants[1].status(),
            max_rounds: battle.config.max_rounds,
        });

        Ok(battle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::FixedOrder;
    use crate::combatant::CombatantSpec;
    use crate::config::DamageParams;
    use crate::events::RecordingSink;

    fn combatant(name: &str, health: u32, attack: u32, defense: u32) -> Combatant {
        Combatant::new(CombatantSpec::new(name, "Test", health, attack, defense)).unwrap()
    }

    fn assert_log_invariants(battle: &Battle) {
        for (i, entry) in battle.log().iter().enumerate() {
            assert_eq!(entry.round as usize, i + 1);
            assert!(entry.actions.len() <= 2);
            for action in &entry.actions {
                assert!(action.actual_damage >= 1);
            }
        }
        for c in battle.combatants() {
            assert!(c.current_health() <= c.max_health());
            assert_eq!(c.is_alive(), c.current_health() > 0);
        }
        assert_eq!(battle.battle_summary().total_rounds, battle.round_number());
    }

    #[test]
    fn scenario_a_zero_attack_always_deals_one() {
        for seed in 0..200 {
            let mut battle = Battle::new(
                combatant("X", 10, 10, 0),
                combatant("Y", 10, 0, 0),
                seed,
            )
            .unwrap();
            let report = battle.fight().unwrap();

            assert_eq!(report.outcome, BattleOutcome::Victory);
            assert!(report.total_rounds <= 10);
            for action in report.log.iter().flat_map(|e| &e.actions) {
                if action.attacker == "Y" {
                    assert_eq!(action.actual_damage, 1);
                } else if action.is_critical {
                    assert!((12..=18).contains(&action.actual_damage));
                } else {
                    assert!((8..=12).contains(&action.actual_damage));
                }
            }
            assert_log_invariants(&battle);
        }
    }

    #[test]
    fn scenario_b_overwhelming_defense_caps_damage_at_one() {
        let mut battle = Battle::new(
            combatant("Pebble", 500, 5, 0),
            combatant("Wall", 500, 0, 100),
            3,
        )
        .unwrap();
        battle.fight_until_end(20).unwrap();

        let pebble_hits: Vec<u32> = battle
            .log()
            .iter()
            .flat_map(|e| &e.actions)
            .filter(|a| a.attacker == "Pebble")
            .map(|a| a.actual_damage)
            .collect();
        assert_eq!(pebble_hits.len(), 20);
        assert!(pebble_hits.iter().all(|&d| d == 1));
    }

    #[test]
    fn scenario_c_round_cap_times_out() {
        let mut battle = Battle::new(
            combatant("Left", 100, 1, 1),
            combatant("Right", 100, 1, 1),
            11,
        )
        .unwrap();
        let report = battle.fight_until_end(2).unwrap();

        assert_eq!(report.outcome, BattleOutcome::Timeout);
        assert_eq!(report.total_rounds, 2);
        assert!(report.max_rounds_reached);
        assert!(report.winner.is_none());
        assert!(report.loser.is_none());
        assert!(battle.combatant(Side::First).is_alive());
        assert!(battle.combatant(Side::Second).is_alive());
        assert!(battle.is_ended());
        assert_eq!(
            battle.execute_round().unwrap_err(),
            BattleError::AlreadyEnded { rounds: 2 }
        );
    }

    #[test]
    fn scenario_d_summary_matches_log() {
        let mut battle = Battle::new(
            combatant("Ayla", 100, 20, 5),
            combatant("Bren", 100, 20, 5),
            19,
        )
        .unwrap();
        for _ in 0..3 {
            battle.execute_round().unwrap();
        }

        let mut expected = [0u64; 2];
        for action in battle.log().iter().flat_map(|e| &e.actions) {
            let slot = usize::from(action.attacker != "Ayla");
            expected[slot] += u64::from(action.actual_damage);
        }

        let summary = battle.battle_summary();
        assert_eq!(summary.damage_dealt_by_combatant1, expected[0]);
        assert_eq!(summary.damage_dealt_by_combatant2, expected[1]);
        assert_eq!(summary.damage_dealt(Side::First), expected[0]);
        assert_eq!(summary.total_rounds, 3);
        assert!(!summary.ended);
        assert!(summary.winner.is_none());
        assert_eq!(summary, battle.battle_summary());
    }

    #[test]
    fn fight_never_exceeds_the_cap() {
        for cap in [1, 2, 5, 13] {
            for seed in 0..20 {
                let mut battle = Battle::new(
                    combatant("A", 300, 12, 3),
                    combatant("B", 300, 11, 4),
                    seed,
                )
                .unwrap();
                let report = battle.fight_until_end(cap).unwrap();
                assert!(report.total_rounds <= cap);
                assert_log_invariants(&battle);
            }
        }
    }

    #[test]
    fn finishing_round_ends_with_the_killing_blow() {
        for seed in 0..100 {
            let mut battle = Battle::new(
                combatant("Mage", 80, 35, 5),
                combatant("Guard", 120, 20, 12),
                seed,
            )
            .unwrap();
            let report = battle.fight().unwrap();
            if report.is_victory() {
                let last = report.log.last().unwrap();
                assert!(last.ended_battle());
                let killer = &last.actions.last().unwrap().attacker;
                assert_eq!(report.winner.as_ref(), Some(killer));
                assert_ne!(report.loser, report.winner);
            }
        }
    }

    #[test]
    fn same_seed_replays_identically() {
        let run = |seed| {
            let mut battle = Battle::new(
                combatant("Archer", 90, 30, 6),
                combatant("Paladin", 110, 22, 10),
                seed,
            )
            .unwrap();
            battle.fight().unwrap()
        };
        assert_eq!(run(1234), run(1234));
    }

    #[test]
    fn zero_cap_is_rejected() {
        let mut battle = Battle::new(combatant("A", 10, 1, 0), combatant("B", 10, 1, 0), 0).unwrap();
        let err = battle.fight_until_end(0).unwrap_err();
        assert_eq!(err, BattleError::InvalidMaxRounds);
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(battle.round_number(), 0);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Battle::new(combatant("Twin", 10, 1, 0), combatant("Twin", 10, 1, 0), 0)
            .unwrap_err();
        assert_eq!(err.error_code(), "BATTLE_DUPLICATE_NAME");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = Battle::builder(combatant("A", 10, 1, 0), combatant("B", 10, 1, 0))
            .config(BattleConfig::default().with_max_rounds(0))
            .build()
            .unwrap_err();
        assert_eq!(err, BattleError::Config(ConfigError::ZeroMaxRounds));
    }

    #[test]
    fn already_ended_is_a_misuse() {
        let err = BattleError::AlreadyEnded { rounds: 4 };
        assert_eq!(err.severity(), ErrorSeverity::Misuse);
        assert_eq!(err.to_string(), "battle already ended after 4 rounds");
    }

    #[test]
    fn build_resets_reused_combatants() {
        let mut veteran = combatant("Vet", 50, 10, 0);
        veteran.take_damage(45);
        let battle = Battle::new(veteran, combatant("Rookie", 50, 10, 0), 0).unwrap();
        assert_eq!(battle.combatant(Side::First).current_health(), 50);
    }

    #[test]
    fn fight_on_ended_battle_reports_without_playing() {
        let sink = RecordingSink::new();
        let mut battle = Battle::builder(combatant("A", 100, 100, 0), combatant("B", 10, 0, 0))
            .config(BattleConfig::default().with_damage(DamageParams::flat()))
            .turn_order(FixedOrder(Side::First))
            .sink(sink.clone())
            .build()
            .unwrap();

        let first = battle.fight().unwrap();
        let again = battle.fight().unwrap();
        assert_eq!(first, again);
        assert_eq!(first.total_rounds, 1);
        assert_eq!(first.winner.as_deref(), Some("A"));
        assert_eq!(first.loser.as_deref(), Some("B"));

        let ended = sink
            .events()
            .iter()
            .filter(|e| matches!(e, BattleEvent::Ended { .. }))
            .count();
        assert_eq!(ended, 1);
    }

    #[test]
    fn timeout_emits_a_single_end_event() {
        let sink = RecordingSink::new();
        let mut battle = Battle::builder(combatant("A", 100, 1, 1), combatant("B", 100, 1, 1))
            .sink(sink.clone())
            .seed(5)
            .build()
            .unwrap();
        battle.fight_until_end(3).unwrap();
        battle.fight_until_end(3).unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 5);
        assert!(matches!(
            events.last(),
            Some(BattleEvent::Ended {
                outcome: BattleOutcome::Timeout,
                ..
            })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn report_serializes_in_the_documented_shape() {
        let mut battle = Battle::builder(combatant("A", 100, 100, 0), combatant("B", 10, 0, 0))
            .turn_order(FixedOrder(Side::First))
            .config(BattleConfig::default().with_damage(DamageParams::flat()))
            .build()
            .unwrap();
        let report = battle.fight().unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["outcome"], "victory");
        assert_eq!(json["winner"], "A");
        assert_eq!(json["loser"], "B");
        assert_eq!(json["total_rounds"], 1);
        let action = &json["log"][0]["actions"][0];
        assert_eq!(json["log"][0]["round"], 1);
        assert_eq!(action["attacker"], "A");
        assert_eq!(action["target"], "B");
        assert_eq!(action["base_damage"], 100);
        assert_eq!(action["actual_damage"], 100);
        assert_eq!(action["is_critical"], false);
        assert_eq!(action["target_health_after"], 0);
        assert_eq!(action["target_alive_after"], false);

        let mut stalemate = Battle::new(combatant("C", 100, 1, 1), combatant("D", 100, 1, 1), 0)
            .unwrap();
        let json = serde_json::to_value(stalemate.fight_until_end(1).unwrap()).unwrap();
        assert_eq!(json["outcome"], "timeout");
        assert!(json["winner"].is_null());
        assert!(json.get("loser").is_none());

        let summary = serde_json::to_value(stalemate.battle_summary()).unwrap();
        assert_eq!(summary["total_rounds"], 1);
        assert_eq!(summary["ended"], true);
        assert!(summary["winner"].is_null());
    }
}
