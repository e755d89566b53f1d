//! Battle reports and summaries.

use crate::combatant::Side;

use super::RoundLogEntry;

/// How a finished battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BattleOutcome {
    /// One combatant was defeated.
    Victory,
    /// The round cap was reached with both combatants standing.
    Timeout,
}

impl BattleOutcome {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Victory => "victory",
            Self::Timeout => "timeout",
        }
    }
}

/// Result of [`Battle::fight_until_end`](super::Battle::fight_until_end).
///
/// `winner` and `loser` are set only for [`BattleOutcome::Victory`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    pub winner: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub loser: Option<String>,
    pub total_rounds: u32,
    /// True when the round counter reached the cap.
    pub max_rounds_reached: bool,
    pub log: Vec<RoundLogEntry>,
}

impl BattleReport {
    pub fn is_victory(&self) -> bool {
        self.outcome == BattleOutcome::Victory
    }
}

/// Damage totals and status of a battle, valid at any point of its life.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSummary {
    pub total_rounds: u32,
    pub damage_dealt_by_combatant1: u64,
    pub damage_dealt_by_combatant2: u64,
    pub winner: Option<String>,
    pub ended: bool,
}

impl BattleSummary {
    /// Damage dealt by the given side.
    pub fn damage_dealt(&self, side: Side) -> u64 {
        match side {
            Side::First => self.damage_dealt_by_combatant1,
            Side::Second => self.damage_dealt_by_combatant2,
        }
    }
}
