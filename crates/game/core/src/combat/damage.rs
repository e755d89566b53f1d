//! Damage calculation.

use crate::combatant::Combatant;
use crate::config::DamageParams;
use crate::env::RandomSource;

/// Every successful attack deals at least this much damage.
///
/// This guarantees battles always progress toward termination, however
/// lopsided attack and defense are.
pub const MINIMUM_DAMAGE: u32 = 1;

const BASIS_POINTS: u64 = 10_000;
const PERCENT: u64 = 100;

/// Outcome of one damage roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageRoll {
    /// Damage dealt after defense, at least [`MINIMUM_DAMAGE`].
    pub actual_damage: u32,
    /// Damage before defense, critical bonus included.
    pub base_damage: u32,
    pub is_critical: bool,
}

/// Calculate damage from already-drawn random values.
///
/// # Formula
///
/// ```text
/// base_damage = floor(attack * multiplier_bp / 10000)
///
/// if critical:
///     base_damage = floor(base_damage * crit_multiplier_pct / 100)
///
/// actual_damage = max(MINIMUM_DAMAGE, base_damage - defense)
/// ```
///
/// Returns `(base_damage, actual_damage)`.
pub fn calculate_damage(
    attack: u32,
    defense: u32,
    multiplier_bp: u32,
    is_critical: bool,
    params: &DamageParams,
) -> (u32, u32) {
    let mut base = u64::from(attack) * u64::from(multiplier_bp) / BASIS_POINTS;
    if is_critical {
        base = base * u64::from(params.crit_multiplier_pct) / PERCENT;
    }
    let base_damage = u32::try_from(base).unwrap_or(u32::MAX);
    let actual_damage = base_damage.saturating_sub(defense).max(MINIMUM_DAMAGE);

    (base_damage, actual_damage)
}

/// Roll one attack's damage.
///
/// Draws the variance multiplier uniformly from
/// `[variance_min_bp, variance_max_bp]`, then a critical check with
/// `crit_chance_pct` probability, in that order.
pub fn resolve_damage(
    attacker: &Combatant,
    defender: &Combatant,
    params: &DamageParams,
    rng: &mut dyn RandomSource,
) -> DamageRoll {
    let multiplier_bp = rng.range(params.variance_min_bp, params.variance_max_bp);
    let is_critical = rng.chance_pct(params.crit_chance_pct);

    let (base_damage, actual_damage) = calculate_damage(
        attacker.attack(),
        defender.defense(),
        multiplier_bp,
        is_critical,
        params,
    );

    DamageRoll {
        actual_damage,
        base_damage,
        is_critical,
    }
}
