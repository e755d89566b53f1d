//! Keyboard input: round pacing keys and menu prompts.
use std::io::{self, BufRead, Write};

use arena_runtime::{Advance, Pacer};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Stylize;

use crate::terminal::RawModeGuard;

/// Map a key press to a pacing decision.
///
/// Enter or space plays the next round, `a` switches to auto mode and
/// `q`, `s` or Esc skip to the result. Ctrl-C also skips so the report is
/// still shown.
pub fn decision(key: &KeyEvent) -> Option<Advance> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(Advance::Next),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Advance::Auto),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Advance::Skip)
        }
        KeyCode::Char('q' | 'Q' | 's' | 'S') | KeyCode::Esc => Some(Advance::Skip),
        _ => None,
    }
}

/// Asks the viewer before every round in manual mode.
#[derive(Debug, Default)]
pub struct KeyPacer;

impl Pacer for KeyPacer {
    fn advance(&mut self, next_round: u32) -> io::Result<Advance> {
        print!(
            "{} ",
            format!("[Round {next_round}] Enter: next  a: auto  q: skip to result").dark_grey()
        );
        io::stdout().flush()?;

        let choice = {
            let _raw = RawModeGuard::enable()?;
            loop {
                if let Event::Key(key) = event::read()? {
                    if let Some(choice) = decision(&key) {
                        break choice;
                    }
                }
            }
        };

        println!();
        tracing::debug!(next_round, ?choice, "pacing key");
        Ok(choice)
    }
}

/// Print `prompt` and read one trimmed line from stdin.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_owned())
}

/// Parse a one-based menu choice in `1..=max`.
pub fn parse_choice(input: &str, max: usize) -> Option<usize> {
    input
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=max).contains(choice))
}

/// Ask until the viewer enters a number in `1..=max`.
pub fn read_choice(prompt: &str, max: usize) -> io::Result<usize> {
    loop {
        let input = read_line(prompt)?;
        match parse_choice(&input, max) {
            Some(choice) => return Ok(choice),
            None => println!("{}", format!("Please enter a number from 1 to {max}.").red()),
        }
    }
}
