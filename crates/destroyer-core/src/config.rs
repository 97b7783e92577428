//! Tunable game rules and their validation.
//!
//! `GameRules::default()` reproduces the classic arcade tuning from
//! [`constants`](crate::constants). Rules can also be loaded from TOML; any
//! field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::AsteroidTier;

/// Errors raised while building or loading game rules.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Field width or height is zero or negative.
    #[error("field dimensions must be positive, got {width}x{height}")]
    InvalidField { width: f64, height: f64 },

    /// An entity size is zero or negative.
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// A value is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// Drag must keep velocity bounded.
    #[error("ship drag must be in (0, 1], got {0}")]
    InvalidDrag(f64),

    /// Asteroid speed range is empty.
    #[error("asteroid speed range [{min}, {max}) is empty")]
    InvalidSpeedRange { min: f64, max: f64 },

    /// A random draw over this range would overflow to infinity.
    #[error("{name} range is too wide to sample, span {span}")]
    UnsampleableRange { name: &'static str, span: f64 },

    /// Drop threshold range is empty or starts at zero.
    #[error("power-up drop range [{min}, {max}] is invalid")]
    InvalidDropRange { min: u32, max: u32 },

    /// Rules file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rules file is not valid TOML for `GameRules`.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Every tunable the simulation reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub field_width: f64,
    pub field_height: f64,

    pub ship_size: f64,
    pub ship_turn_rate: f64,
    pub ship_thrust: f64,
    pub ship_drag: f64,

    pub bullet_speed: f64,
    pub bullet_cooldown_ticks: u32,

    pub asteroid_initial_count: u32,
    pub asteroid_replenish_count: u32,
    pub asteroid_min_speed: f64,
    pub asteroid_max_speed: f64,
    pub fragment_max_axis_speed: f64,
    pub asteroid_size_large: f64,
    pub asteroid_size_medium: f64,
    pub asteroid_size_small: f64,
    pub score_large: u32,
    pub score_medium: u32,
    pub score_small: u32,

    pub powerup_size: f64,
    pub powerup_duration_ticks: u32,
    pub powerup_drop_min: u32,
    pub powerup_drop_max: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ship_size: SHIP_SIZE,
            ship_turn_rate: SHIP_TURN_RATE,
            ship_thrust: SHIP_THRUST,
            ship_drag: SHIP_DRAG,
            bullet_speed: BULLET_SPEED,
            bullet_cooldown_ticks: BULLET_COOLDOWN_TICKS,
            asteroid_initial_count: ASTEROID_INITIAL_COUNT,
            asteroid_replenish_count: ASTEROID_REPLENISH_COUNT,
            asteroid_min_speed: ASTEROID_MIN_SPEED,
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            fragment_max_axis_speed: FRAGMENT_MAX_AXIS_SPEED,
            asteroid_size_large: ASTEROID_SIZE_LARGE,
            asteroid_size_medium: ASTEROID_SIZE_MEDIUM,
            asteroid_size_small: ASTEROID_SIZE_SMALL,
            score_large: SCORE_LARGE_ASTEROID,
            score_medium: SCORE_MEDIUM_ASTEROID,
            score_small: SCORE_SMALL_ASTEROID,
            powerup_size: POWERUP_SIZE,
            powerup_duration_ticks: POWERUP_DURATION_TICKS,
            powerup_drop_min: POWERUP_DROP_MIN,
            powerup_drop_max: POWERUP_DROP_MAX,
        }
    }
}

impl GameRules {
    /// Parse rules from a TOML document and validate them.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let rules: GameRules = toml::from_str(contents)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load rules from a TOML file and validate them.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Reject rules the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reals = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ship_size", self.ship_size),
            ("ship_turn_rate", self.ship_turn_rate),
            ("ship_thrust", self.ship_thrust),
            ("ship_drag", self.ship_drag),
            ("bullet_speed", self.bullet_speed),
            ("asteroid_min_speed", self.asteroid_min_speed),
            ("asteroid_max_speed", self.asteroid_max_speed),
            ("fragment_max_axis_speed", self.fragment_max_axis_speed),
            ("asteroid_size_large", self.asteroid_size_large),
            ("asteroid_size_medium", self.asteroid_size_medium),
            ("asteroid_size_small", self.asteroid_size_small),
            ("powerup_size", self.powerup_size),
        ];
        for (name, value) in reals {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return Err(ConfigError::InvalidField {
                width: self.field_width,
                height: self.field_height,
            });
        }

        let sizes = [
            ("ship_size", self.ship_size),
            ("powerup_size", self.powerup_size),
            ("asteroid_size_large", self.asteroid_size_large),
            ("asteroid_size_medium", self.asteroid_size_medium),
            ("asteroid_size_small", self.asteroid_size_small),
            ("bullet_speed", self.bullet_speed),
            ("fragment_max_axis_speed", self.fragment_max_axis_speed),
        ];
        for (name, value) in sizes {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.ship_drag <= 0.0 || self.ship_drag > 1.0 {
            return Err(ConfigError::InvalidDrag(self.ship_drag));
        }

        if self.asteroid_min_speed < 0.0 || self.asteroid_min_speed >= self.asteroid_max_speed {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.asteroid_min_speed,
                max: self.asteroid_max_speed,
            });
        }

        // Fragments draw each axis from (-bound, bound).
        let spans = [
            (
                "asteroid speed",
                self.asteroid_max_speed - self.asteroid_min_speed,
            ),
            ("fragment_max_axis_speed", 2.0 * self.fragment_max_axis_speed),
        ];
        for (name, span) in spans {
            if !span.is_finite() {
                return Err(ConfigError::UnsampleableRange { name, span });
            }
        }

        if self.powerup_drop_min == 0 || self.powerup_drop_min > self.powerup_drop_max {
            return Err(ConfigError::InvalidDropRange {
                min: self.powerup_drop_min,
                max: self.powerup_drop_max,
            });
        }

        Ok(())
    }

    /// Collision diameter of an asteroid of the given tier.
    pub fn asteroid_size(&self, tier: AsteroidTier) -> f64 {
        match tier {
            AsteroidTier::Large => self.asteroid_size_large,
            AsteroidTier::Medium => self.asteroid_size_medium,
            AsteroidTier::Small => self.asteroid_size_small,
        }
    }

    /// Points awarded for destroying an asteroid of the given tier.
    pub fn asteroid_points(&self, tier: AsteroidTier) -> u32 {
        match tier {
            AsteroidTier::Large => self.score_large,
            AsteroidTier::Medium => self.score_medium,
            AsteroidTier::Small => self.score_small,
        }
    }

    /// Fire cooldown after a shot, optionally under RapidFire.
    pub fn fire_cooldown(&self, rapid_fire: bool) -> u32 {
        if rapid_fire {
            (self.bullet_cooldown_ticks as f64 / RAPID_FIRE_DIVISOR) as u32
        } else {
            self.bullet_cooldown_ticks
        }
    }
}
