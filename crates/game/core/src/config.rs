//! Battle configuration constants and tunable parameters.

use crate::error::{ArenaError, ErrorSeverity};

/// Damage model tuning.
///
/// Fractions are stored in integer units so every roll is exact and
/// replayable: the variance multiplier in basis points (1/10000) and the
/// critical chance and multiplier in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageParams {
    /// Lower bound of the damage multiplier, in basis points (8000 = 0.8).
    pub variance_min_bp: u32,
    /// Upper bound of the damage multiplier, in basis points (12000 = 1.2).
    pub variance_max_bp: u32,
    /// Probability of a critical hit, in percent.
    pub crit_chance_pct: u32,
    /// Critical hit multiplier, in percent (150 = x1.5).
    pub crit_multiplier_pct: u32,
}

impl DamageParams {
    pub const DEFAULT_VARIANCE_MIN_BP: u32 = 8_000;
    pub const DEFAULT_VARIANCE_MAX_BP: u32 = 12_000;
    pub const DEFAULT_CRIT_CHANCE_PCT: u32 = 10;
    pub const DEFAULT_CRIT_MULTIPLIER_PCT: u32 = 150;

    pub const fn new() -> Self {
        Self {
            variance_min_bp: Self::DEFAULT_VARIANCE_MIN_BP,
            variance_max_bp: Self::DEFAULT_VARIANCE_MAX_BP,
            crit_chance_pct: Self::DEFAULT_CRIT_CHANCE_PCT,
            crit_multiplier_pct: Self::DEFAULT_CRIT_MULTIPLIER_PCT,
        }
    }

    /// Parameters with no variance and no critical hits.
    ///
    /// Every attack deals exactly `max(1, attack - defense)`.
    pub const fn flat() -> Self {
        Self {
            variance_min_bp: 10_000,
            variance_max_bp: 10_000,
            crit_chance_pct: 0,
            crit_multiplier_pct: 100,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.variance_min_bp > self.variance_max_bp {
            return Err(ConfigError::InvalidVariance {
                min_bp: self.variance_min_bp,
                max_bp: self.variance_max_bp,
            });
        }
        if self.crit_chance_pct > 100 {
            return Err(ConfigError::CritChanceOutOfRange {
                pct: self.crit_chance_pct,
            });
        }
        if self.crit_multiplier_pct < 100 {
            return Err(ConfigError::CritMultiplierBelowOne {
                pct: self.crit_multiplier_pct,
            });
        }
        Ok(())
    }
}

impl Default for DamageParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Battle configuration: round cap plus damage tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Rounds played before the battle is forced into a timeout.
    pub max_rounds: u32,
    pub damage: DamageParams,
}

impl BattleConfig {
    pub const DEFAULT_MAX_ROUNDS: u32 = 50;

    pub const fn new() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            damage: DamageParams::new(),
        }
    }

    pub const fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub const fn with_damage(mut self, damage: DamageParams) -> Self {
        self.damage = damage;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroMaxRounds);
        }
        self.damage.validate()
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejected battle configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("max_rounds must be at least 1")]
    ZeroMaxRounds,

    #[error("damage variance lower bound {min_bp}bp exceeds upper bound {max_bp}bp")]
    InvalidVariance { min_bp: u32, max_bp: u32 },

    #[error("critical hit chance {pct}% is outside 0..=100")]
    CritChanceOutOfRange { pct: u32 },

    #[error("critical hit multiplier {pct}% would reduce damage")]
    CritMultiplierBelowOne { pct: u32 },
}

impl ArenaError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroMaxRounds => "CONFIG_ZERO_MAX_ROUNDS",
            Self::InvalidVariance { .. } => "CONFIG_INVALID_VARIANCE",
            Self::CritChanceOutOfRange { .. } => "CONFIG_CRIT_CHANCE_OUT_OF_RANGE",
            Self::CritMultiplierBelowOne { .. } => "CONFIG_CRIT_MULTIPLIER_BELOW_ONE",
        }
    }
}
