//! Arena configuration loader.
//!
//! `config.toml` uses human-friendly fractions; the core works in integer
//! units, so values are converted here:
//!
//! ```toml
//! [battle]
//! max_rounds = 50
//! critical_hit_chance = 0.1       # -> 10 percent
//! critical_hit_multiplier = 1.5   # -> 150 percent
//! damage_variance_min = 0.8       # -> 8000 basis points
//! damage_variance_max = 1.2       # -> 12000 basis points
//!
//! [display]
//! health_bar_length = 20
//! auto_advance_battle = false
//! battle_delay_seconds = 1.0
//! ```
//!
//! Missing keys take their defaults.

use std::path::Path;
use std::time::Duration;

use arena_core::{BattleConfig, DamageParams};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};
use crate::settings::{ArenaSettings, DisplaySettings};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    battle: BattleSection,
    display: DisplaySection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct BattleSection {
    max_rounds: u32,
    critical_hit_chance: f64,
    critical_hit_multiplier: f64,
    damage_variance_min: f64,
    damage_variance_max: f64,
}

impl Default for BattleSection {
    fn default() -> Self {
        Self {
            max_rounds: BattleConfig::DEFAULT_MAX_ROUNDS,
            critical_hit_chance: 0.1,
            critical_hit_multiplier: 1.5,
            damage_variance_min: 0.8,
            damage_variance_max: 1.2,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DisplaySection {
    health_bar_length: usize,
    auto_advance_battle: bool,
    battle_delay_seconds: f64,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            health_bar_length: DisplaySettings::DEFAULT_HEALTH_BAR_LENGTH,
            auto_advance_battle: false,
            battle_delay_seconds: DisplaySettings::DEFAULT_BATTLE_DELAY.as_secs_f64(),
        }
    }
}

const PERCENT: f64 = 100.0;
const BASIS_POINTS: f64 = 10_000.0;

/// Convert a non-negative fraction into integer units of `scale`.
fn to_units(key: &str, value: f64, scale: f64) -> LoadResult<u32> {
    let scaled = (value * scale).round();
    if !scaled.is_finite() || scaled < 0.0 || scaled > f64::from(u32::MAX) {
        anyhow::bail!("Invalid value for battle.{}: {}", key, value);
    }
    Ok(scaled as u32)
}

/// Loader for arena configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Unreadable or malformed files, and values the core rejects (zero
    /// round cap, inverted variance, crit chance above 100%...).
    pub fn load(path: &Path) -> LoadResult<ArenaSettings> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ArenaSettings> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let battle = &file.battle;
        let damage = DamageParams {
            variance_min_bp: to_units("damage_variance_min", battle.damage_variance_min, BASIS_POINTS)?,
            variance_max_bp: to_units("damage_variance_max", battle.damage_variance_max, BASIS_POINTS)?,
            crit_chance_pct: to_units("critical_hit_chance", battle.critical_hit_chance, PERCENT)?,
            crit_multiplier_pct: to_units(
                "critical_hit_multiplier",
                battle.critical_hit_multiplier,
                PERCENT,
            )?,
        };
        let config = BattleConfig::new()
            .with_max_rounds(battle.max_rounds)
            .with_damage(damage);
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid battle config: {}", e))?;

        let display = &file.display;
        let delay = display.battle_delay_seconds;
        let battle_delay = Duration::try_from_secs_f64(delay).map_err(|e| {
            anyhow::anyhow!("Invalid value for display.battle_delay_seconds: {}", e)
        })?;

        let bar_length = display.health_bar_length;
        if bar_length > DisplaySettings::MAX_HEALTH_BAR_LENGTH {
            anyhow::bail!(
                "Invalid value for display.health_bar_length: {} (max {})",
                bar_length,
                DisplaySettings::MAX_HEALTH_BAR_LENGTH
            );
        }

        Ok(ArenaSettings {
            battle: config,
            display: DisplaySettings {
                health_bar_length: bar_length,
                auto_advance_battle: display.auto_advance_battle,
                battle_delay,
            },
        })
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> LoadResult<ArenaSettings> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            return Ok(ArenaSettings::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), ArenaSettings::default());
    }

    #[test]
    fn fractions_become_integer_units() {
        let settings = ConfigLoader::parse(
            r#"
            [battle]
            max_rounds = 10
            critical_hit_chance = 0.25
            critical_hit_multiplier = 2.0
            damage_variance_min = 0.9
            damage_variance_max = 1.1

            [display]
            health_bar_length = 30
            auto_advance_battle = true
            battle_delay_seconds = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(settings.battle.max_rounds, 10);
        assert_eq!(settings.battle.damage.crit_chance_pct, 25);
        assert_eq!(settings.battle.damage.crit_multiplier_pct, 200);
        assert_eq!(settings.battle.damage.variance_min_bp, 9_000);
        assert_eq!(settings.battle.damage.variance_max_bp, 11_000);
        assert_eq!(settings.display.health_bar_length, 30);
        assert!(settings.display.auto_advance_battle);
        assert_eq!(settings.display.battle_delay, Duration::from_millis(500));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let settings = ConfigLoader::parse("[battle]\nmax_rounds = 7\n").unwrap();
        assert_eq!(settings.battle.max_rounds, 7);
        assert_eq!(settings.battle.damage, DamageParams::default());
        assert_eq!(settings.display, DisplaySettings::default());
    }

    #[test]
    fn rejects_values_the_core_rejects() {
        assert!(ConfigLoader::parse("[battle]\nmax_rounds = 0\n").is_err());
        assert!(ConfigLoader::parse("[battle]\ncritical_hit_chance = 1.5\n").is_err());
        assert!(
            ConfigLoader::parse("[battle]\ndamage_variance_min = 1.3\ndamage_variance_max = 1.2\n")
                .is_err()
        );
        assert!(ConfigLoader::parse("[battle]\ncritical_hit_chance = -0.1\n").is_err());
        assert!(ConfigLoader::parse("[display]\nbattle_delay_seconds = -1.0\n").is_err());
    }

    #[test]
    fn rejects_display_values_out_of_range() {
        let err = ConfigLoader::parse("[display]\nbattle_delay_seconds = 1e30\n").unwrap_err();
        assert!(err.to_string().contains("battle_delay_seconds"), "{err}");
        assert!(ConfigLoader::parse("[display]\nbattle_delay_seconds = nan\n").is_err());
        assert!(ConfigLoader::parse("[display]\nbattle_delay_seconds = inf\n").is_err());

        let err = ConfigLoader::parse("[display]\nhealth_bar_length = 1000000\n").unwrap_err();
        assert!(err.to_string().contains("health_bar_length"), "{err}");

        let widest = format!(
            "[display]\nhealth_bar_length = {}\n",
            DisplaySettings::MAX_HEALTH_BAR_LENGTH
        );
        let settings = ConfigLoader::parse(&widest).unwrap();
        assert_eq!(
            settings.display.health_bar_length,
            DisplaySettings::MAX_HEALTH_BAR_LENGTH
        );
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ConfigLoader::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(settings, ArenaSettings::default());
    }
}
