//! Application settings read from `config.toml`.

use std::time::Duration;

use arena_core::BattleConfig;

/// Presentation settings for the interactive client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Width of a health bar in cells.
    pub health_bar_length: usize,
    /// Play rounds without waiting for input.
    pub auto_advance_battle: bool,
    /// Pause between rounds in auto mode.
    pub battle_delay: Duration,
}

impl DisplaySettings {
    pub const DEFAULT_HEALTH_BAR_LENGTH: usize = 20;
    pub const MAX_HEALTH_BAR_LENGTH: usize = 200;
    pub const DEFAULT_BATTLE_DELAY: Duration = Duration::from_secs(1);
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            health_bar_length: Self::DEFAULT_HEALTH_BAR_LENGTH,
            auto_advance_battle: false,
            battle_delay: Self::DEFAULT_BATTLE_DELAY,
        }
    }
}

/// Everything `config.toml` configures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaSettings {
    pub battle: BattleConfig,
    pub display: DisplaySettings,
}
