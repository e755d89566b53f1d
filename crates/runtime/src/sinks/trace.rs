//! Structured logging of battle events.

use arena_core::{BattleEvent, BattleSink};

/// Logs every battle event through `tracing`.
///
/// Battle boundaries and round results go out at `info`, individual attacks
/// at `debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl BattleSink for TracingSink {
    fn write(&mut self, event: &BattleEvent) {
        match event {
            BattleEvent::Started {
                first,
                second,
                max_rounds,
            } => {
                tracing::info!(
                    first = %first.full_name(),
                    second = %second.full_name(),
                    max_rounds,
                    "battle started"
                );
            }
            BattleEvent::RoundCompleted {
                entry,
                first,
                second,
            } => {
                for action in &entry.actions {
                    tracing::debug!(
                        round = entry.round,
                        attacker = %action.attacker,
                        target = %action.target,
                        base_damage = action.base_damage,
                        damage = action.actual_damage,
                        critical = action.is_critical,
                        target_health = action.target_health_after,
                        "attack"
                    );
                }
                tracing::info!(
                    round = entry.round,
                    actions = entry.actions.len(),
                    first_health = first.current_health,
                    second_health = second.current_health,
                    "round completed"
                );
            }
            BattleEvent::Ended { outcome, summary } => {
                tracing::info!(
                    outcome = outcome.as_str(),
                    rounds = summary.total_rounds,
                    winner = summary.winner.as_deref().unwrap_or("none"),
                    first_damage = summary.damage_dealt_by_combatant1,
                    second_damage = summary.damage_dealt_by_combatant2,
                    "battle ended"
                );
            }
        }
    }
}
