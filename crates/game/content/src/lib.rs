//! Data-driven content for the arena.
//!
//! This crate provides the preset roster, the character name pool, combat
//! tuning and the info screen text:
//! - Roster templates (data-driven via RON)
//! - Character names (data-driven via TOML)
//! - Battle and display configuration (data-driven via TOML)
//! - Info screen text (data-driven via TOML)
//!
//! [`Catalog`] implements the `arena-core` oracles over loaded content. When a
//! file is missing the built-in [`presets`] stand in, except for an empty
//! name list, which is reported as an error.

pub mod catalog;
pub mod presets;
pub mod settings;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{Catalog, NamePool};
pub use presets::{FALLBACK_NAMES, INFO_UNAVAILABLE, builtin_roster, fallback_names};
pub use settings::{ArenaSettings, DisplaySettings};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, InfoLoader, NameLoader, RosterLoader};
