//! Client configuration from environment variables.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use arena_content::DisplaySettings;

/// Settings the client reads from the environment (and `.env`).
///
/// Display values set here override the ones from `config.toml`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    /// Session seed; a random one is drawn when unset.
    pub seed: Option<u64>,
    pub session_id: Option<String>,
    pub auto_advance: Option<bool>,
    pub round_delay: Option<Duration>,
    pub health_bar_length: Option<usize>,
    /// Write each battle's events to a JSON-lines file next to the log.
    pub event_log: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            seed: None,
            session_id: None,
            auto_advance: None,
            round_delay: None,
            health_bar_length: None,
            event_log: false,
        }
    }
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_DATA_DIR` - Directory with roster/names/config/info files (default: `data`)
    /// - `ARENA_SEED` - Session seed for reproducible battles
    /// - `ARENA_SESSION_ID` - Log directory name (default: timestamp)
    /// - `ARENA_AUTO_ADVANCE` - Start battles in auto mode (`true`/`false`)
    /// - `ARENA_ROUND_DELAY_MS` - Pause between rounds in auto mode
    /// - `ARENA_HEALTH_BAR_LENGTH` - Health bar width (clamped to 5..=200)
    /// - `ARENA_EVENT_LOG` - Record battle events to a file (`true`/`false`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).map(|value| value.trim().to_owned());
        let mut config = Self::default();

        if let Some(dir) = read("ARENA_DATA_DIR").filter(|dir| !dir.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        config.seed = read("ARENA_SEED").and_then(|v| v.parse().ok());
        config.session_id = read("ARENA_SESSION_ID").filter(|id| !id.is_empty());
        config.auto_advance = read("ARENA_AUTO_ADVANCE").and_then(|v| parse_flag(&v));
        config.round_delay = read("ARENA_ROUND_DELAY_MS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis);
        config.health_bar_length = read("ARENA_HEALTH_BAR_LENGTH")
            .and_then(|v| v.parse::<usize>().ok())
            .map(|len| len.clamp(5, DisplaySettings::MAX_HEALTH_BAR_LENGTH));
        config.event_log = read("ARENA_EVENT_LOG")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(false);

        config
    }

    /// Apply the environment overrides on top of file settings.
    pub fn apply_display(&self, display: &mut DisplaySettings) {
        if let Some(auto) = self.auto_advance {
            display.auto_advance_battle = auto;
        }
        if let Some(delay) = self.round_delay {
            display.battle_delay = delay;
        }
        if let Some(len) = self.health_bar_length {
            display.health_bar_length = len;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
