//! Events emitted by a battle for observers.
//!
//! The core never prints or writes files. Everything observable leaves
//! through a [`BattleSink`] handed to the battle at construction; renderers,
//! loggers and tests decide what to do with it.
use std::sync::{Arc, Mutex, PoisonError};

use crate::battle::{BattleOutcome, BattleSummary, RoundLogEntry};
use crate::combatant::CombatantStatus;

/// Events emitted during a battle, in order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum BattleEvent {
    /// The battle was built; both combatants are at full health.
    Started {
        first: CombatantStatus,
        second: CombatantStatus,
        max_rounds: u32,
    },
    /// A round finished; statuses reflect health after the round.
    RoundCompleted {
        entry: RoundLogEntry,
        first: CombatantStatus,
        second: CombatantStatus,
    },
    /// The battle became terminal. Emitted exactly once.
    Ended {
        outcome: BattleOutcome,
        summary: BattleSummary,
    },
}

/// Receiver for battle events.
pub trait BattleSink {
    fn write(&mut self, event: &BattleEvent);
}

impl<S: BattleSink + ?Sized> BattleSink for Box<S> {
    fn write(&mut self, event: &BattleEvent) {
        (**self).write(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl BattleSink for NullSink {
    fn write(&mut self, _event: &BattleEvent) {}
}

/// Keeps every event in memory.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// battle owns the other.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<BattleEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events written so far.
    pub fn events(&self) -> Vec<BattleEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BattleSink for RecordingSink {
    fn write(&mut self, event: &BattleEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
