//! Gapwing - a side-scrolling gap-dodging arcade sim
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle field, mask collision)
//! - `assets`: Sprite coverage masks as explicit configuration
//! - `render`: Draw-command port to the host's render sink
//! - `pacer`: Fixed-rate and deterministic tick sources
//! - `runner`: Per-tick orchestration and collision policy
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod pacer;
pub mod render;
pub mod runner;
pub mod sim;
pub mod tuning;

pub use assets::SpriteSheet;
pub use runner::{CollisionPolicy, Runner};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_HZ: u32 = 30;

    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_W: f32 = 600.0;
    pub const PLAYFIELD_H: f32 = 800.0;

    /// Avatar start position (sprite top-left)
    pub const AVATAR_START_X: f32 = 230.0;
    pub const AVATAR_START_Y: f32 = 350.0;

    /// Top of the ground strip
    pub const GROUND_Y: f32 = 730.0;

    /// Upward velocity set by an impulse (negative y is up)
    pub const IMPULSE_VELOCITY: f32 = -10.5;
    /// Quadratic fall coefficient (displacement gains this * t^2 per tick)
    pub const FALL_ACCEL: f32 = 1.5;
    /// Terminal per-tick downward displacement
    pub const MAX_FALL_PER_TICK: f32 = 16.0;
    /// Extra lift added while displacement is still upward
    pub const RISE_BIAS: f32 = -2.0;

    /// Tilt bounds (degrees; positive is nose-up)
    pub const MAX_ROTATION: f32 = 25.0;
    pub const MIN_ROTATION: f32 = -90.0;
    /// Tilt lost per tick once the climb is over
    pub const ROTATION_VEL: f32 = 20.0;
    /// At or below this tilt the avatar stops flapping
    pub const DIVE_TILT: f32 = -80.0;
    /// Tilt stays pinned up until this far below the impulse height
    pub const TILT_HOLD_MARGIN: f32 = 50.0;

    /// Ticks per animation frame
    pub const ANIMATION_TICKS: u32 = 10;

    /// Leftward scroll velocity shared by obstacles and ground
    pub const SCROLL_SPEED: f32 = 5.0;

    /// Vertical clearance between obstacle segments
    pub const GAP_HEIGHT: i32 = 200;
    /// Gap top offset is drawn uniformly from [GAP_TOP_MIN, GAP_TOP_MAX)
    pub const GAP_TOP_MIN: i32 = 50;
    pub const GAP_TOP_MAX: i32 = 450;

    /// Spawn x of the first obstacle and of each successor
    pub const FIRST_SPAWN_X: f32 = 700.0;
    pub const RESPAWN_X: f32 = 650.0;
}
