//! Data-driven game balance
//!
//! Every gameplay number the sim consumes lives here instead of in
//! ambient globals, so hosts and tests can swap in their own values.
//! Defaults give the stock 30 Hz feel.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Upward velocity applied by an impulse
    pub impulse_velocity: f32,
    /// Quadratic coefficient of the per-tick fall displacement
    pub fall_accel: f32,
    /// Terminal downward displacement per tick
    pub max_fall_per_tick: f32,
    /// Extra lift while displacement is still upward
    pub rise_bias: f32,
    /// Leftward scroll velocity shared by obstacles and ground
    pub scroll_speed: f32,
    /// Vertical clearance between an obstacle's segments
    pub gap_height: i32,
    /// Gap top offset draw range [min, max)
    pub gap_top_min: i32,
    pub gap_top_max: i32,
    /// Spawn x of the first obstacle
    pub first_spawn_x: f32,
    /// Spawn x of every successor obstacle
    pub respawn_x: f32,
    /// Integrate avatar physics every tick instead of only on impulse.
    /// Off by default: the avatar holds its height between impulses.
    pub auto_advance_avatar: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            impulse_velocity: IMPULSE_VELOCITY,
            fall_accel: FALL_ACCEL,
            max_fall_per_tick: MAX_FALL_PER_TICK,
            rise_bias: RISE_BIAS,
            scroll_speed: SCROLL_SPEED,
            gap_height: GAP_HEIGHT,
            gap_top_min: GAP_TOP_MIN,
            gap_top_max: GAP_TOP_MAX,
            first_spawn_x: FIRST_SPAWN_X,
            respawn_x: RESPAWN_X,
            auto_advance_avatar: false,
        }
    }
}

impl Tuning {
    /// Balance for a playable end-to-end session: identical numbers,
    /// but gravity runs every tick.
    pub fn playable() -> Self {
        Self {
            auto_advance_avatar: true,
            ..Self::default()
        }
    }
}
