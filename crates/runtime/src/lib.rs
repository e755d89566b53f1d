//! Runtime orchestration for arena battles.
//!
//! This crate wires content, seeds and sinks around the pure `arena-core`
//! engine. Consumers build an [`Arena`], pick a [`Matchup`](arena_core::Matchup)
//! and watch it through a [`BattleSession`].
//!
//! Modules are organized by responsibility:
//! - [`arena`] hosts the orchestrator and builder
//! - [`session`] plays one battle at a viewer-controlled pace
//! - [`pacing`] holds the pacing decisions and clocks
//! - [`sinks`] provides logging, fan-out and file sinks for battle events
pub mod arena;
pub mod error;
pub mod pacing;
pub mod session;
pub mod sinks;

pub use arena::{Arena, ArenaBuilder};
pub use error::{Result, RuntimeError};
pub use pacing::{Advance, Clock, PaceMode, Pacer, ScriptedPacer, SystemClock};
pub use session::BattleSession;
pub use sinks::{EventLogSink, FanoutSink, TracingSink};
