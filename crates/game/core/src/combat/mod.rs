//! Combat resolution rules.
//!
//! - `damage`: the damage model, a pure function of attacker, defender,
//!   tuning and random draws
//! - `turn_order`: who acts first in a round
//! - `record`: the immutable result of one attack
//!
//! Nothing here owns combatants; the battle controller does.

pub mod damage;
pub mod record;
pub mod turn_order;

pub use damage::{DamageRoll, MINIMUM_DAMAGE, calculate_damage, resolve_damage};
pub use record::ActionRecord;
pub use turn_order::{FixedOrder, TurnOrderPolicy, UniformRandomOrder};
