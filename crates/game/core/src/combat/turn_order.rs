//! Turn order policies.
//!
//! A policy decides which side acts first in a round. The round engine only
//! depends on the trait, so a speed-based policy can replace the uniform one
//! without touching it.

use crate::combatant::Side;
use crate::env::RandomSource;

/// Decides the acting order of the two sides for one round.
pub trait TurnOrderPolicy {
    /// Returns both sides, each exactly once, in acting order.
    fn order(&self, rng: &mut dyn RandomSource) -> [Side; 2];
}

/// Uniform-random permutation of the two sides, ignoring every stat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UniformRandomOrder;

impl TurnOrderPolicy for UniformRandomOrder {
    fn order(&self, rng: &mut dyn RandomSource) -> [Side; 2] {
        if rng.coin_flip() {
            [Side::Second, Side::First]
        } else {
            [Side::First, Side::Second]
        }
    }
}

/// The given side always acts first. Draws nothing from the random source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedOrder(pub Side);

impl TurnOrderPolicy for FixedOrder {
    fn order(&self, _rng: &mut dyn RandomSource) -> [Side; 2] {
        [self.0, self.0.opponent()]
    }
}
