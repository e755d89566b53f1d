//! Action records.

/// Immutable result of one attack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRecord {
    pub attacker: String,
    pub target: String,
    /// Damage before defense mitigation, critical bonus included.
    pub base_damage: u32,
    /// Damage after mitigation; never below [`MINIMUM_DAMAGE`](super::MINIMUM_DAMAGE).
    pub actual_damage: u32,
    pub is_critical: bool,
    pub target_health_after: u32,
    pub target_alive_after: bool,
}

impl ActionRecord {
    /// True when this attack defeated its target.
    pub fn is_killing_blow(&self) -> bool {
        !self.target_alive_after
    }
}
