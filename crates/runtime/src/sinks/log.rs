//! Append-only battle event log.
//!
//! One JSON object per line, in emission order:
//! ```text
//! {"event":"started","first":{...},"second":{...},"max_rounds":50}
//! {"event":"round_completed","entry":{...},"first":{...},"second":{...}}
//! {"event":"ended","outcome":"victory","summary":{...}}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use arena_core::{BattleEvent, BattleSink};

use crate::error::{Result, RuntimeError};

/// Writes battle events to a JSON-lines file.
///
/// [`BattleSink::write`] cannot fail, so the first I/O or serialization
/// error is logged and the sink stops writing. The buffer is flushed after
/// the `ended` event and on drop.
#[derive(Debug)]
pub struct EventLogSink {
    path: PathBuf,
    writer: BufWriter<File>,
    written: u64,
    failed: bool,
}

impl EventLogSink {
    /// Create a new log file.
    ///
    /// # Errors
    ///
    /// Returns error if the file already exists (prevents accidental overwrites).
    pub fn create(base_dir: impl AsRef<Path>, filename: impl AsRef<str>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        std::fs::create_dir_all(base_dir).map_err(RuntimeError::EventLog)?;

        let path = base_dir.join(filename.as_ref());
        let file = match OpenOptions::new().create_new(true).write(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Err(RuntimeError::EventLogExists(path));
            }
            Err(err) => return Err(RuntimeError::EventLog(err)),
        };

        tracing::debug!("Created event log: {}", path.display());

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            written: 0,
            failed: false,
        })
    }

    /// Read back every event of a log file.
    pub fn read_events(path: impl AsRef<Path>) -> Result<Vec<BattleEvent>> {
        let file = File::open(path.as_ref()).map_err(RuntimeError::EventLog)?;
        let mut events = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(RuntimeError::EventLog)?;
            if line.trim().is_empty() {
                continue;
            }
            events.push(serde_json::from_str(&line)?);
        }
        Ok(events)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Events successfully written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// True once a write failed; later events are dropped.
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    fn append(&mut self, event: &BattleEvent) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        if matches!(event, BattleEvent::Ended { .. }) {
            self.writer.flush()?;
        }
        Ok(())
    }
}

impl BattleSink for EventLogSink {
    fn write(&mut self, event: &BattleEvent) {
        if self.failed {
            return;
        }
        match self.append(event) {
            Ok(()) => self.written += 1,
            Err(err) => {
                self.failed = true;
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "event log write failed, disabling event log"
                );
            }
        }
    }
}

impl Drop for EventLogSink {
    fn drop(&mut self) {
        if let Err(err) = self.writer.flush() {
            tracing::warn!(path = %self.path.display(), error = %err, "event log flush failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use arena_core::{BattleOutcome, BattleSummary};

    use super::*;

    fn ended() -> BattleEvent {
        BattleEvent::Ended {
            outcome: BattleOutcome::Timeout,
            summary: BattleSummary {
                total_rounds: 2,
                damage_dealt_by_combatant1: 3,
                damage_dealt_by_combatant2: 4,
                winner: None,
                ended: true,
            },
        }
    }

    #[test]
    fn existing_file_is_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("events.jsonl"), "keep me\n").unwrap();

        let err = EventLogSink::create(dir.path(), "events.jsonl").unwrap_err();
        assert!(
            matches!(&err, RuntimeError::EventLogExists(path) if path.ends_with("events.jsonl")),
            "{err:?}"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("events.jsonl")).unwrap(),
            "keep me\n"
        );
    }

    #[test]
    fn second_create_of_same_log_fails() {
        let dir = tempfile::tempdir().unwrap();
        let _first = EventLogSink::create(dir.path(), "battle.jsonl").unwrap();
        assert!(matches!(
            EventLogSink::create(dir.path(), "battle.jsonl"),
            Err(RuntimeError::EventLogExists(_))
        ));
    }

    #[test]
    fn written_events_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = EventLogSink::create(dir.path().join("nested"), "battle.jsonl").unwrap();
        sink.write(&ended());
        assert_eq!(sink.written(), 1);
        assert!(!sink.has_failed());

        let path = sink.path().to_path_buf();
        drop(sink);
        assert_eq!(EventLogSink::read_events(&path).unwrap(), vec![ended()]);
    }
}
