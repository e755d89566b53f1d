//! Menu loop of the interactive client.
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use arena_content::INFO_UNAVAILABLE;
use arena_core::{BattleReport, RosterOracle, Side};
use arena_runtime::{Arena, BattleSession, EventLogSink, FanoutSink, PaceMode};
use crossterm::style::Stylize;

use crate::config::ClientConfig;
use crate::input::{self, KeyPacer};
use crate::render::{TerminalRenderer, preset_line};
use crate::terminal;

enum MenuChoice {
    Battle,
    Info,
    Exit,
}

/// The interactive client: an arena plus where to keep session files.
pub struct App {
    arena: Arena,
    session_dir: PathBuf,
    event_log: bool,
    battles: u32,
}

impl App {
    pub fn new(config: &ClientConfig, session_dir: PathBuf) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let arena = Arena::builder()
            .data_dir(&config.data_dir)
            .with_context(|| format!("loading content from {}", config.data_dir.display()))?
            .configure(|settings| config.apply_display(&mut settings.display))
            .seed(seed)
            .build();

        tracing::info!(
            seed,
            data_dir = %config.data_dir.display(),
            presets = arena.catalog().len(),
            "arena ready"
        );

        Ok(Self {
            arena,
            session_dir,
            event_log: config.event_log,
            battles: 0,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            let choice = match self.main_menu() {
                Ok(choice) => choice,
                Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => MenuChoice::Exit,
                Err(error) => return Err(error.into()),
            };

            let outcome = match choice {
                MenuChoice::Battle => self.battle(),
                MenuChoice::Info => self.info(),
                MenuChoice::Exit => {
                    println!("Goodbye!");
                    return Ok(());
                }
            };

            match outcome {
                Ok(()) => {}
                Err(error) if is_eof(&error) => return Ok(()),
                Err(error) => {
                    tracing::error!("{error:#}");
                    println!("{}", format!("Error: {error:#}").red());
                    wait_for_enter()?;
                }
            }
        }
    }

    fn main_menu(&self) -> io::Result<MenuChoice> {
        terminal::clear_screen()?;
        println!("{}", "========== ARENA ==========".bold().yellow());
        println!("Session seed: {}", self.arena.seed());
        println!();
        println!("1. Start a battle");
        println!("2. Game info");
        println!("3. Exit");
        println!();

        Ok(match input::read_choice("Choose (1-3): ", 3)? {
            1 => MenuChoice::Battle,
            2 => MenuChoice::Info,
            _ => MenuChoice::Exit,
        })
    }

    fn info(&self) -> Result<()> {
        terminal::clear_screen()?;
        println!("{}", self.arena.info().unwrap_or(INFO_UNAVAILABLE));
        wait_for_enter()?;
        Ok(())
    }

    fn battle(&mut self) -> Result<()> {
        println!();
        println!("1. Manual selection");
        println!("2. Random match");
        let matchup = match input::read_choice("Choose a mode (1-2): ", 2)? {
            1 => {
                self.print_presets();
                let count = self.arena.catalog().len();
                let first = input::read_choice(&format!("Player 1, pick (1-{count}): "), count)?;
                let second = input::read_choice(&format!("Player 2, pick (1-{count}): "), count)?;
                self.arena.select(first - 1, second - 1)?
            }
            _ => self.arena.random()?,
        };

        self.battles += 1;
        terminal::clear_screen()?;

        let renderer = TerminalRenderer::new(self.arena.settings().display.health_bar_length);
        let mut sinks = FanoutSink::new().with(renderer);
        if self.event_log {
            let filename = format!("battle_{}.jsonl", self.battles);
            sinks.push(EventLogSink::create(&self.session_dir, filename)?);
        }

        let mut session = self.arena.start(matchup, sinks)?;
        if session.mode() == PaceMode::Auto {
            println!("{}", "Auto mode: rounds play by themselves.".dark_grey());
        }
        let report = session.run(&mut KeyPacer)?;

        print_summary(&session, &report);
        if self.event_log {
            self.save_report(&session)?;
        }
        wait_for_enter()?;
        Ok(())
    }

    fn print_presets(&self) {
        println!();
        for (index, spec) in self.arena.catalog().templates().iter().enumerate() {
            println!("{}", preset_line(index, spec));
        }
        println!();
    }

    fn save_report(&self, session: &BattleSession) -> Result<()> {
        let path = self
            .session_dir
            .join(format!("battle_{}_report.json", self.battles));
        std::fs::write(&path, session.report_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "battle report saved");
        Ok(())
    }
}

fn print_summary(session: &BattleSession, report: &BattleReport) {
    let battle = session.battle();
    let summary = battle.battle_summary();

    println!();
    println!("{}", "Damage dealt".bold());
    for side in [Side::First, Side::Second] {
        println!(
            "  {:<32} {}",
            battle.combatant(side).full_name(),
            summary.damage_dealt(side)
        );
    }
    println!("  Rounds played: {}", report.total_rounds);
    if report.max_rounds_reached && !report.is_victory() {
        println!("  The round limit of {} was reached.", session.max_rounds());
    }
}

fn wait_for_enter() -> io::Result<()> {
    input::read_line("\nPress Enter to continue...").map(drop)
}

fn is_eof(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<io::Error>()
        .is_some_and(|error| error.kind() == io::ErrorKind::UnexpectedEof)
}
