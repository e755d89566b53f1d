//! Read-only data sources and randomness.
//!
//! Oracles expose the preset roster and the name pool; the random source
//! drives every decision a battle or matchup makes. Concrete data comes from
//! `arena-content`, tests build small in-memory implementations.
mod names;
mod rng;
mod roster;

pub use names::{MAX_NAME_ATTEMPTS, NameOracle, pick_name, pick_name_excluding, sample_names};
pub use rng::{PcgRng, RandomSource, mix_seed};
pub use roster::{RosterOracle, StaticRoster};
