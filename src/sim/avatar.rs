//! The player avatar
//!
//! Vertical physics follow a quadratic displacement law reset by each
//! impulse, with a terminal fall clamp and a small extra lift while the
//! climb lasts. Tilt and the flap animation are derived per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::SpriteSheet;
use crate::consts::*;
use crate::sim::mask::CoverageMask;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    /// Sprite top-left; x never changes, the world scrolls instead
    pub pos: Vec2,
    /// Vertical velocity set by the last impulse
    pub vel: f32,
    /// Ticks of physics integrated since the last impulse
    pub ticks_since_impulse: u32,
    /// Tilt in degrees, clamped to [MIN_ROTATION, MAX_ROTATION]
    pub tilt: f32,
    /// y recorded at the last impulse; tilt stays pinned up until the
    /// avatar has fallen TILT_HOLD_MARGIN below it
    pub impulse_height: f32,
    /// Current animation frame index
    pub frame: usize,
    /// Animation sub-counter
    pub anim_ticks: u32,
}

impl Avatar {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: 0.0,
            ticks_since_impulse: 0,
            tilt: 0.0,
            impulse_height: pos.y,
            frame: 0,
            anim_ticks: 0,
        }
    }

    /// Kick the avatar upward and restart the displacement curve.
    pub fn apply_impulse(&mut self, tuning: &Tuning) {
        self.vel = tuning.impulse_velocity;
        self.ticks_since_impulse = 0;
        self.impulse_height = self.pos.y;
    }

    /// Integrate one tick of vertical physics and update tilt.
    pub fn advance(&mut self, tuning: &Tuning) {
        self.ticks_since_impulse += 1;
        let t = self.ticks_since_impulse as f32;

        let mut d = self.vel * t + tuning.fall_accel * t * t;
        if d >= tuning.max_fall_per_tick {
            d = tuning.max_fall_per_tick;
        }
        if d < 0.0 {
            d += tuning.rise_bias;
        }
        self.pos.y += d;

        if d < 0.0 || self.pos.y < self.impulse_height + TILT_HOLD_MARGIN {
            if self.tilt < MAX_ROTATION {
                self.tilt = MAX_ROTATION;
            }
        } else if self.tilt > MIN_ROTATION {
            self.tilt = (self.tilt - ROTATION_VEL).max(MIN_ROTATION);
        }
    }

    /// Step the flap cycle. Runs once per tick independently of physics.
    ///
    /// The cycle walks the three wing frames at ANIMATION_TICKS per step.
    /// Once the avatar noses down past DIVE_TILT the frame is forced to
    /// wings-level and the counter pinned, so a diving avatar stops
    /// flapping.
    pub fn advance_animation(&mut self) {
        let k = ANIMATION_TICKS;
        self.anim_ticks += 1;
        self.frame = if self.anim_ticks < k {
            0
        } else if self.anim_ticks < 2 * k {
            1
        } else if self.anim_ticks < 3 * k {
            2
        } else {
            self.anim_ticks = 0;
            0
        };
        if self.tilt <= DIVE_TILT {
            self.frame = 0;
            self.anim_ticks = 2 * k;
        }
    }

    /// Coverage mask of the current frame. Collision uses the unrotated
    /// frame; tilt affects rendering only.
    pub fn coverage_mask<'s>(&self, sheet: &'s SpriteSheet) -> &'s CoverageMask {
        &sheet.avatar_frames[self.frame]
    }
}
