//! Pacing of a watched battle.
//!
//! The core plays a round whenever it is asked to. How often it is asked is
//! decided here: a [`Pacer`] is consulted before each round in manual mode,
//! a [`Clock`] provides the pause between rounds in auto mode.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// What the viewer wants before the next round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Play the next round, then ask again.
    Next,
    /// Play the remaining rounds automatically with the configured delay.
    Auto,
    /// Play the remaining rounds immediately.
    Skip,
}

/// Current pacing of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaceMode {
    Manual,
    Auto,
    Instant,
}

impl PaceMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Auto => "auto",
            Self::Instant => "instant",
        }
    }
}

/// Source of viewer decisions in manual mode.
pub trait Pacer {
    /// Called before round `next_round` is played.
    fn advance(&mut self, next_round: u32) -> io::Result<Advance>;
}

/// Replays a fixed list of decisions, then answers [`Advance::Next`].
#[derive(Clone, Debug, Default)]
pub struct ScriptedPacer {
    decisions: VecDeque<Advance>,
    asked: u32,
}

impl ScriptedPacer {
    pub fn new(decisions: impl IntoIterator<Item = Advance>) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
            asked: 0,
        }
    }

    /// Number of times the session asked for a decision.
    pub fn asked(&self) -> u32 {
        self.asked
    }
}

impl Pacer for ScriptedPacer {
    fn advance(&mut self, _next_round: u32) -> io::Result<Advance> {
        self.asked += 1;
        Ok(self.decisions.pop_front().unwrap_or(Advance::Next))
    }
}

/// Waits between rounds in auto mode.
pub trait Clock: Send {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
