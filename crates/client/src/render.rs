//! Battle view: prints battle events as they happen.
use std::io::{self, Stdout, Write};

use arena_core::{
    ActionRecord, BattleEvent, BattleOutcome, BattleSink, BattleSummary, CombatantSpec,
    CombatantStatus, RoundLogEntry,
};
use crossterm::style::Stylize;

const FILLED: char = '█';
const EMPTY: char = '░';

/// Health bar of `length` cells, floor-filled by the remaining health.
pub fn health_bar(current: u32, max: u32, length: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        let current = u64::from(current.min(max));
        (current * length as u64 / u64::from(max)) as usize
    };
    let mut bar = String::with_capacity(length.saturating_mul(FILLED.len_utf8()));
    bar.extend(std::iter::repeat_n(FILLED, filled));
    bar.extend(std::iter::repeat_n(EMPTY, length - filled));
    bar
}

/// One line per preset for the selection menu.
pub fn preset_line(index: usize, spec: &CombatantSpec) -> String {
    format!(
        "{:>2}. {:<14} HP {:>3}  ATK {:>3}  DEF {:>3}",
        index + 1,
        spec.class,
        spec.max_health,
        spec.attack,
        spec.defense
    )
}

/// Text of one attack, without styling.
pub fn describe_action(action: &ActionRecord) -> String {
    let mut line = format!(
        "{} attacks {} for {} damage",
        action.attacker, action.target, action.actual_damage
    );
    if action.is_critical {
        line.push_str(" (critical hit!)");
    }
    line
}

/// Prints every event of a battle to a writer, stdout by default.
///
/// Write errors are logged once and further output is dropped; the battle
/// itself keeps going.
pub struct TerminalRenderer<W: Write = Stdout> {
    out: W,
    bar_length: usize,
    broken: bool,
}

impl TerminalRenderer {
    pub fn new(bar_length: usize) -> Self {
        Self::with_writer(io::stdout(), bar_length)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, bar_length: usize) -> Self {
        Self {
            out,
            bar_length,
            broken: false,
        }
    }

    fn render(&mut self, event: &BattleEvent) -> io::Result<()> {
        match event {
            BattleEvent::Started {
                first,
                second,
                max_rounds,
            } => {
                writeln!(self.out)?;
                writeln!(self.out, "{}", "=== BATTLE START ===".bold().yellow())?;
                writeln!(
                    self.out,
                    "{}  vs  {}",
                    first.full_name().cyan().bold(),
                    second.full_name().magenta().bold()
                )?;
                writeln!(self.out, "Up to {max_rounds} rounds.")?;
                self.status(first)?;
                self.status(second)?;
            }
            BattleEvent::RoundCompleted {
                entry,
                first,
                second,
            } => {
                self.round(entry)?;
                self.status(first)?;
                self.status(second)?;
            }
            BattleEvent::Ended { outcome, summary } => self.ended(*outcome, summary)?,
        }
        self.out.flush()
    }

    fn round(&mut self, entry: &RoundLogEntry) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", format!("--- Round {} ---", entry.round).bold())?;
        for action in &entry.actions {
            let line = describe_action(action);
            if action.is_critical {
                writeln!(self.out, "  {}", line.red().bold())?;
            } else {
                writeln!(self.out, "  {line}")?;
            }
            if !action.target_alive_after {
                writeln!(
                    self.out,
                    "  {}",
                    format!("{} has been defeated!", action.target).red().bold()
                )?;
            }
        }
        Ok(())
    }

    fn status(&mut self, status: &CombatantStatus) -> io::Result<()> {
        let bar = health_bar(status.current_health, status.max_health, self.bar_length);
        let bar = match status.health_percentage() {
            p if p > 50.0 => bar.green(),
            p if p > 20.0 => bar.yellow(),
            _ => bar.red(),
        };
        writeln!(
            self.out,
            "  {:<32} {} {}/{} ({:.1}%)",
            status.full_name(),
            bar,
            status.current_health,
            status.max_health,
            status.health_percentage()
        )
    }

    fn ended(&mut self, outcome: BattleOutcome, summary: &BattleSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "=== BATTLE OVER ===".bold().yellow())?;
        match (outcome, &summary.winner) {
            (BattleOutcome::Victory, Some(winner)) => writeln!(
                self.out,
                "{} wins after {} rounds!",
                winner.as_str().green().bold(),
                summary.total_rounds
            )?,
            _ => writeln!(
                self.out,
                "{}",
                format!(
                    "Time is up after {} rounds. Nobody wins.",
                    summary.total_rounds
                )
                .yellow()
            )?,
        }
        Ok(())
    }
}

impl<W: Write> BattleSink for TerminalRenderer<W> {
    fn write(&mut self, event: &BattleEvent) {
        if self.broken {
            return;
        }
        if let Err(error) = self.render(event) {
            tracing::warn!(%error, "terminal output failed, battle view disabled");
            self.broken = true;
        }
    }
}
