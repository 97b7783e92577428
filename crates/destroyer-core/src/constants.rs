//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind [`GameRules`](crate::config::GameRules).

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Field ---

/// Field width in pixels.
pub const FIELD_WIDTH: f64 = 800.0;

/// Field height in pixels.
pub const FIELD_HEIGHT: f64 = 600.0;

// --- Ship ---

/// Ship collision diameter.
pub const SHIP_SIZE: f64 = 20.0;

/// Heading change per tick while a rotate control is held (radians).
pub const SHIP_TURN_RATE: f64 = 0.05;

/// Velocity added per tick while thrusting.
pub const SHIP_THRUST: f64 = 0.1;

/// Velocity multiplier applied every tick.
pub const SHIP_DRAG: f64 = 0.98;

/// Initial heading: pointing up the screen.
pub const SHIP_INITIAL_HEADING: f64 = -std::f64::consts::FRAC_PI_2;

// --- Bullets ---

/// Bullet speed (pixels per tick).
pub const BULLET_SPEED: f64 = 7.0;

/// Ticks between shots.
pub const BULLET_COOLDOWN_TICKS: u32 = 15;

// --- Asteroids ---

/// Large asteroids placed at the start of every run.
pub const ASTEROID_INITIAL_COUNT: u32 = 5;

/// Large asteroids added when the field has been cleared.
pub const ASTEROID_REPLENISH_COUNT: u32 = 2;

/// Lower bound of a freshly spawned asteroid's speed.
pub const ASTEROID_MIN_SPEED: f64 = 1.0;

/// Upper (exclusive) bound of a freshly spawned asteroid's speed.
pub const ASTEROID_MAX_SPEED: f64 = 2.0;

/// Per-axis speed bound of a split fragment.
pub const FRAGMENT_MAX_AXIS_SPEED: f64 = 1.0;

pub const ASTEROID_SIZE_LARGE: f64 = 60.0;
pub const ASTEROID_SIZE_MEDIUM: f64 = 30.0;
pub const ASTEROID_SIZE_SMALL: f64 = 15.0;

pub const SCORE_LARGE_ASTEROID: u32 = 20;
pub const SCORE_MEDIUM_ASTEROID: u32 = 50;
pub const SCORE_SMALL_ASTEROID: u32 = 100;

// --- Power-ups ---

/// Pickup diameter.
pub const POWERUP_SIZE: f64 = 20.0;

/// Effect duration in ticks (20 s at 60 Hz).
pub const POWERUP_DURATION_TICKS: u32 = 1200;

/// Minimum asteroids destroyed between drops (inclusive).
pub const POWERUP_DROP_MIN: u32 = 5;

/// Maximum asteroids destroyed between drops (inclusive).
pub const POWERUP_DROP_MAX: u32 = 10;

/// Age added per tick for the floating animation.
pub const POWERUP_FLOAT_STEP: f64 = 0.05;

/// Vertical bob amplitude (pixels per tick).
pub const POWERUP_FLOAT_AMPLITUDE: f64 = 0.5;

// --- Effects ---

/// Thrust multiplier while Booster is active.
pub const BOOSTER_THRUST_FACTOR: f64 = 1.5;

/// Velocity multiplier per tick while braking with Booster.
pub const BOOSTER_BRAKE_FACTOR: f64 = 0.9;

/// Cooldown divisor while RapidFire is active.
pub const RAPID_FIRE_DIVISOR: f64 = 1.5;

/// Half-angle between the two DoubleShot bullets (radians).
pub const DOUBLE_SHOT_OFFSET: f64 = std::f64::consts::PI / 16.0;

/// Length of the aim beam drawn while AimBeam is active.
pub const AIM_BEAM_LENGTH: f64 = 1000.0;
