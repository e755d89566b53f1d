//! Combatant state: one fighter's stats for the duration of a battle.
//!
//! Health is private and only changes through [`Combatant::take_damage`] and
//! [`Combatant::heal`], which keep `0 <= current_health <= max_health` and
//! recompute the alive flag on every mutation.

use crate::combat::{ActionRecord, resolve_damage};
use crate::config::DamageParams;
use crate::env::RandomSource;
use crate::error::{ArenaError, ErrorSeverity};

/// Identifies one of the two participants of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    /// The fixed opponent of this side.
    pub const fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Construction record for a combatant.
///
/// This is also the roster template format: roster files list specs whose
/// `name` is the preset label.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSpec {
    pub name: String,
    pub class: String,
    /// Cosmetic prefix shown before the name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
}

impl CombatantSpec {
    pub fn new(
        name: impl Into<String>,
        class: impl Into<String>,
        max_health: u32,
        attack: u32,
        defense: u32,
    ) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            title: None,
            max_health,
            attack,
            defense,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Same stats under a different name.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

/// Rejected combatant construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatantError {
    #[error("combatant '{name}' must start with positive max health")]
    ZeroMaxHealth { name: String },

    #[error("combatant name must not be empty")]
    EmptyName,
}

impl ArenaError for CombatantError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroMaxHealth { .. } => "COMBATANT_ZERO_MAX_HEALTH",
            Self::EmptyName => "COMBATANT_EMPTY_NAME",
        }
    }
}

/// One fighter's mutable battle state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    name: String,
    class: String,
    title: Option<String>,
    max_health: u32,
    current_health: u32,
    attack: u32,
    defense: u32,
    alive: bool,
}

impl Combatant {
    /// Build a combatant at full health.
    ///
    /// # Errors
    ///
    /// Fails fast when `max_health` is zero (alive would be undefined at
    /// creation) or the name is blank.
    pub fn new(spec: CombatantSpec) -> Result<Self, CombatantError> {
        if spec.name.trim().is_empty() {
            return Err(CombatantError::EmptyName);
        }
        if spec.max_health == 0 {
            return Err(CombatantError::ZeroMaxHealth { name: spec.name });
        }
        Ok(Self {
            name: spec.name,
            class: spec.class,
            title: spec.title,
            max_health: spec.max_health,
            current_health: spec.max_health,
            attack: spec.attack,
            defense: spec.defense,
            alive: true,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Attack `target` once.
    ///
    /// Rolls damage with `self` as attacker, applies it to `target`, and
    /// returns the resulting record. Only `target` is mutated.
    pub fn attack_target(
        &self,
        target: &mut Combatant,
        params: &DamageParams,
        rng: &mut dyn RandomSource,
    ) -> ActionRecord {
        let roll = resolve_damage(self, target, params, rng);
        target.take_damage(roll.actual_damage);

        ActionRecord {
            attacker: self.name.clone(),
            target: target.name.clone(),
            base_damage: roll.base_damage,
            actual_damage: roll.actual_damage,
            is_critical: roll.is_critical,
            target_health_after: target.current_health,
            target_alive_after: target.alive,
        }
    }

    /// Subtract `amount` from current health, clamped at zero.
    ///
    /// Returns the health actually removed, which is less than `amount`
    /// when the hit overkills.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current_health);
        self.current_health -= removed;
        self.alive = self.current_health > 0;
        removed
    }

    /// Restore up to `amount` health, capped at max health.
    ///
    /// Dead combatants cannot be healed; returns the amount restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.alive {
            return 0;
        }
        let restored = amount.min(self.max_health - self.current_health);
        self.current_health += restored;
        self.alive = self.current_health > 0;
        restored
    }

    /// Back to full health for a fresh battle.
    pub fn reset(&mut self) {
        self.current_health = self.max_health;
        self.alive = true;
    }

    pub fn health_percentage(&self) -> f64 {
        f64::from(self.current_health) / f64::from(self.max_health) * 100.0
    }

    /// Display name: optional title, name, and class in brackets.
    pub fn full_name(&self) -> String {
        full_name(self.title.as_deref(), &self.name, &self.class)
    }

    pub fn status(&self) -> CombatantStatus {
        CombatantStatus {
            name: self.name.clone(),
            class: self.class.clone(),
            title: self.title.clone(),
            current_health: self.current_health,
            max_health: self.max_health,
            attack: self.attack,
            defense: self.defense,
            alive: self.alive,
        }
    }
}

/// Read-only snapshot of a combatant, handed to sinks and renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantStatus {
    pub name: String,
    pub class: String,
    pub title: Option<String>,
    pub current_health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub alive: bool,
}

impl CombatantStatus {
    pub fn health_percentage(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        f64::from(self.current_health) / f64::from(self.max_health) * 100.0
    }

    pub fn full_name(&self) -> String {
        full_name(self.title.as_deref(), &self.name, &self.class)
    }
}

fn full_name(title: Option<&str>, name: &str, class: &str) -> String {
    match title {
        Some(title) if !title.is_empty() => format!("{title} {name} [{class}]"),
        _ => format!("{name} [{class}]"),
    }
}
