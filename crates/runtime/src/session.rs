//! Paced battle session.
//!
//! A [`BattleSession`] wraps one [`Battle`] and plays it round by round at a
//! pace the viewer controls, then classifies the result. The battle itself
//! never waits or reads input; the session does both between rounds.

use std::time::Duration;

use arena_content::DisplaySettings;
use arena_core::{Battle, BattleReport, BattleSummary, RoundLogEntry};
use serde::Serialize;

use crate::error::{Result, RuntimeError};
use crate::pacing::{Advance, Clock, PaceMode, Pacer, SystemClock};

/// Machine-readable record of a session, see [`BattleSession::report_json`].
#[derive(Debug, Serialize)]
struct SessionRecord<'a> {
    report: &'a BattleReport,
    summary: BattleSummary,
}

/// One battle being watched.
pub struct BattleSession {
    battle: Battle,
    mode: PaceMode,
    delay: Duration,
    clock: Box<dyn Clock>,
    report: Option<BattleReport>,
}

impl std::fmt::Debug for BattleSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleSession")
            .field("battle", &self.battle)
            .field("mode", &self.mode)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl BattleSession {
    /// Session paced by the display settings: auto mode when
    /// `auto_advance_battle` is set, manual otherwise.
    pub fn new(battle: Battle, display: &DisplaySettings) -> Self {
        let mode = if display.auto_advance_battle {
            PaceMode::Auto
        } else {
            PaceMode::Manual
        };
        Self {
            battle,
            mode,
            delay: display.battle_delay,
            clock: Box::new(SystemClock),
            report: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: PaceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn battle(&self) -> &Battle {
        &self.battle
    }

    pub fn mode(&self) -> PaceMode {
        self.mode
    }

    pub fn max_rounds(&self) -> u32 {
        self.battle.config().max_rounds
    }

    /// No more rounds will be played.
    pub fn is_finished(&self) -> bool {
        self.battle.is_ended() || self.battle.round_number() >= self.max_rounds()
    }

    /// Play one round regardless of pacing. `None` once finished.
    pub fn step(&mut self) -> Result<Option<RoundLogEntry>> {
        if self.is_finished() {
            return Ok(None);
        }
        let entry = self.battle.execute_round()?.clone();
        Ok(Some(entry))
    }

    /// Play the battle to its end, pausing as the current mode requires.
    ///
    /// In manual mode `pacer` is asked before every round; answering
    /// [`Advance::Auto`] or [`Advance::Skip`] switches mode for the rest of
    /// the battle.
    pub fn run(&mut self, pacer: &mut dyn Pacer) -> Result<BattleReport> {
        while !self.is_finished() {
            let next_round = self.battle.round_number() + 1;
            match self.mode {
                PaceMode::Manual => match pacer.advance(next_round).map_err(RuntimeError::Pacer)? {
                    Advance::Next => {}
                    Advance::Auto => self.switch_mode(PaceMode::Auto),
                    Advance::Skip => self.switch_mode(PaceMode::Instant),
                },
                PaceMode::Auto if self.battle.round_number() > 0 => self.clock.sleep(self.delay),
                PaceMode::Auto | PaceMode::Instant => {}
            }
            self.step()?;
        }
        self.finish()
    }

    /// Play any remaining rounds without pausing and classify the result.
    ///
    /// Idempotent: later calls return the same report.
    pub fn finish(&mut self) -> Result<BattleReport> {
        if let Some(report) = &self.report {
            return Ok(report.clone());
        }
        let report = self.battle.fight_until_end(self.max_rounds())?;
        tracing::debug!(
            outcome = report.outcome.as_str(),
            rounds = report.total_rounds,
            "session finished"
        );
        self.report = Some(report.clone());
        Ok(report)
    }

    /// Final report, once [`finish`](Self::finish) or [`run`](Self::run) completed.
    pub fn report(&self) -> Option<&BattleReport> {
        self.report.as_ref()
    }

    /// Report and damage summary as pretty JSON.
    ///
    /// Before the session finishes this describes the battle so far.
    pub fn report_json(&self) -> Result<String> {
        let partial;
        let report = match &self.report {
            Some(report) => report,
            None => {
                partial = self.battle.report(self.max_rounds());
                &partial
            }
        };
        let record = SessionRecord {
            report,
            summary: self.battle.battle_summary(),
        };
        Ok(serde_json::to_string_pretty(&record)?)
    }

    pub fn into_battle(self) -> Battle {
        self.battle
    }

    fn switch_mode(&mut self, mode: PaceMode) {
        tracing::debug!(from = self.mode.as_str(), to = mode.as_str(), "pace mode changed");
        self.mode = mode;
    }
}
