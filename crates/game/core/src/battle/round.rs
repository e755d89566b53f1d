//! Round engine.
//!
//! One round: ask the turn-order policy for an ordering, let each living
//! combatant attack its fixed opponent, and stop the moment someone dies so
//! a defeated combatant never strikes back in the same round. That early
//! stop is why a round log may hold 0, 1 or 2 actions.

use crate::combat::ActionRecord;
use crate::combatant::{Combatant, Side};
use crate::events::BattleEvent;

use super::{Battle, BattleError, BattleOutcome};

/// Lifecycle of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    Pending,
    InProgress,
    Completed,
}

/// One completed round: its number and the attacks made, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundLogEntry {
    pub round: u32,
    pub actions: Vec<ActionRecord>,
}

impl RoundLogEntry {
    /// True when the last action of this round defeated its target.
    pub fn ended_battle(&self) -> bool {
        self.actions
            .last()
            .is_some_and(ActionRecord::is_killing_blow)
    }
}

/// A round being assembled by the engine.
#[derive(Debug)]
pub(crate) struct Round {
    number: u32,
    phase: RoundPhase,
    actions: Vec<ActionRecord>,
}

impl Round {
    pub(crate) fn new(number: u32) -> Self {
        Self {
            number,
            phase: RoundPhase::Pending,
            actions: Vec::with_capacity(2),
        }
    }

    pub(crate) fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub(crate) fn begin(&mut self) {
        debug_assert_eq!(self.phase(), RoundPhase::Pending, "round already started");
        self.phase = RoundPhase::InProgress;
    }

    pub(crate) fn record(&mut self, action: ActionRecord) {
        debug_assert_eq!(self.phase(), RoundPhase::InProgress, "round not in progress");
        debug_assert!(self.actions.len() < 2, "a round holds at most two actions");
        self.actions.push(action);
    }

    pub(crate) fn complete(mut self) -> RoundLogEntry {
        debug_assert_eq!(self.phase(), RoundPhase::InProgress, "round not in progress");
        self.phase = RoundPhase::Completed;
        RoundLogEntry {
            round: self.number,
            actions: self.actions,
        }
    }
}

/// Borrow the acting combatant immutably and its opponent mutably.
fn split_pair(combatants: &mut [Combatant; 2], actor: Side) -> (&Combatant, &mut Combatant) {
    let [first, second] = combatants;
    match actor {
        Side::First => (&*first, second),
        Side::Second => (&*second, first),
    }
}

impl Battle {
    /// Play one round and append it to the log.
    ///
    /// # Errors
    ///
    /// [`BattleError::AlreadyEnded`] when the battle is terminal; the log is
    /// left untouched.
    pub fn execute_round(&mut self) -> Result<&RoundLogEntry, BattleError> {
        if self.ended {
            return Err(BattleError::AlreadyEnded {
                rounds: self.round_number,
            });
        }

        self.round_number += 1;
        let mut round = Round::new(self.round_number);
        round.begin();

        let order = self.turn_order.order(self.rng.as_mut());
        for actor in order {
            let (attacker, target) = split_pair(&mut self.combatants, actor);
            if !attacker.is_alive() || !target.is_alive() {
                continue;
            }

            let record = attacker.attack_target(target, &self.config.damage, self.rng.as_mut());
            let killed = record.is_killing_blow();
            round.record(record);

            if killed {
                self.winner = Some(actor);
                self.ended = true;
                break;
            }
        }

        self.log.push(round.complete());
        let index = self.log.len() - 1;

        self.sink.write(&BattleEvent::RoundCompleted {
            entry: self.log[index].clone(),
            first: self.combatants[0].status(),
            second: self.combatants[1].status(),
        });
        if self.ended {
            self.emit_ended(BattleOutcome::Victory);
        }

        Ok(&self.log[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::FixedOrder;
    use crate::combatant::CombatantSpec;
    use crate::config::{BattleConfig, DamageParams};
    use crate::events::RecordingSink;

    fn combatant(name: &str, health: u32, attack: u32, defense: u32) -> Combatant {
        Combatant::new(CombatantSpec::new(name, "Test", health, attack, defense)).unwrap()
    }

    fn flat_battle(first: Combatant, second: Combatant, lead: Side) -> Battle {
        Battle::builder(first, second)
            .config(BattleConfig::default().with_damage(DamageParams::flat()))
            .turn_order(FixedOrder(lead))
            .build()
            .unwrap()
    }

    #[test]
    fn round_phases_advance_in_order() {
        let mut round = Round::new(3);
        assert_eq!(round.phase(), RoundPhase::Pending);
        round.begin();
        assert_eq!(round.phase(), RoundPhase::InProgress);
        let entry = round.complete();
        assert_eq!(entry.round, 3);
        assert!(entry.actions.is_empty());
        assert!(!entry.ended_battle());
    }

    #[test]
    fn both_act_when_nobody_dies() {
        let mut battle = flat_battle(
            combatant("A", 100, 10, 2),
            combatant("B", 100, 7, 3),
            Side::First,
        );
        let entry = battle.execute_round().unwrap().clone();

        assert_eq!(entry.round, 1);
        assert_eq!(entry.actions.len(), 2);
        assert_eq!(entry.actions[0].attacker, "A");
        assert_eq!(entry.actions[0].actual_damage, 7);
        assert_eq!(entry.actions[1].attacker, "B");
        assert_eq!(entry.actions[1].actual_damage, 5);
        assert_eq!(battle.combatant(Side::First).current_health(), 95);
        assert_eq!(battle.combatant(Side::Second).current_health(), 93);
        assert!(!battle.is_ended());
    }

    #[test]
    fn defeated_combatant_does_not_strike_back() {
        let mut battle = flat_battle(
            combatant("A", 100, 50, 0),
            combatant("B", 10, 50, 0),
            Side::First,
        );
        let entry = battle.execute_round().unwrap().clone();

        assert_eq!(entry.actions.len(), 1);
        assert!(entry.ended_battle());
        assert_eq!(battle.combatant(Side::First).current_health(), 100);
        assert_eq!(battle.winner_side(), Some(Side::First));
        assert!(battle.is_ended());
    }

    #[test]
    fn second_actor_can_win_with_two_actions() {
        let mut battle = flat_battle(
            combatant("A", 10, 1, 0),
            combatant("B", 100, 50, 0),
            Side::First,
        );
        let entry = battle.execute_round().unwrap().clone();

        assert_eq!(entry.actions.len(), 2);
        assert!(entry.ended_battle());
        assert_eq!(battle.winner_side(), Some(Side::Second));
    }

    #[test]
    fn round_on_ended_battle_is_rejected_without_touching_the_log() {
        let mut battle = flat_battle(
            combatant("A", 100, 50, 0),
            combatant("B", 10, 0, 0),
            Side::First,
        );
        battle.execute_round().unwrap();
        let before = battle.log().to_vec();

        let err = battle.execute_round().unwrap_err();
        assert_eq!(err, BattleError::AlreadyEnded { rounds: 1 });
        assert_eq!(battle.log(), before.as_slice());
        assert_eq!(battle.round_number(), 1);
    }

    #[test]
    fn rounds_are_numbered_consecutively() {
        let mut battle = flat_battle(
            combatant("A", 100, 1, 0),
            combatant("B", 100, 1, 0),
            Side::Second,
        );
        for expected in 1..=5 {
            assert_eq!(battle.execute_round().unwrap().round, expected);
        }
        let numbers: Vec<u32> = battle.log().iter().map(|e| e.round).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sink_sees_rounds_and_a_single_end() {
        let sink = RecordingSink::new();
        let mut battle = Battle::builder(combatant("A", 100, 60, 0), combatant("B", 100, 1, 0))
            .config(BattleConfig::default().with_damage(DamageParams::flat()))
            .turn_order(FixedOrder(Side::First))
            .sink(sink.clone())
            .build()
            .unwrap();

        battle.execute_round().unwrap();
        battle.execute_round().unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], BattleEvent::Started { .. }));
        assert!(matches!(events[1], BattleEvent::RoundCompleted { .. }));
        match &events[2] {
            BattleEvent::RoundCompleted { entry, second, .. } => {
                assert_eq!(entry.round, 2);
                assert!(!second.alive);
            }
            other => panic!("unexpected event {other:?}"),
        }
        match &events[3] {
            BattleEvent::Ended { outcome, summary } => {
                assert_eq!(*outcome, BattleOutcome::Victory);
                assert_eq!(summary.winner.as_deref(), Some("A"));
                assert_eq!(summary.damage_dealt_by_combatant1, 120);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}
