//! Scrolling gapped obstacles
//!
//! An obstacle is two vertical segments separated by a fixed-height gap
//! whose top offset is drawn from the injected RNG at construction, so
//! every live obstacle has valid geometry. Collision against the avatar
//! is a pixel-exact mask intersection, one test per segment.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::assets::SpriteSheet;
use crate::sim::avatar::Avatar;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// x of both segments' left edge; decreases every tick
    pub x: f32,
    /// y where the upper segment ends (exclusive)
    pub gap_top: i32,
    /// y where the lower segment starts
    pub gap_bottom: i32,
    /// Set once the avatar has moved beyond this obstacle; guards both
    /// scoring and successor spawning
    pub passed: bool,
}

impl Obstacle {
    /// Spawn at `x` with a gap drawn from `rng`.
    pub fn new(id: u32, x: f32, rng: &mut impl Rng, tuning: &Tuning) -> Self {
        let gap_top = rng.random_range(tuning.gap_top_min..tuning.gap_top_max);
        debug_assert!(
            (tuning.gap_top_min..tuning.gap_top_max).contains(&gap_top),
            "gap draw outside contract range"
        );
        Self::with_gap_top(id, x, gap_top, tuning)
    }

    /// Spawn with explicit gap geometry (deterministic callers, tests).
    pub fn with_gap_top(id: u32, x: f32, gap_top: i32, tuning: &Tuning) -> Self {
        Self {
            id,
            x,
            gap_top,
            gap_bottom: gap_top + tuning.gap_height,
            passed: false,
        }
    }

    /// y of the upper segment's top edge (usually negative; the segment
    /// sprite hangs in from above the playfield).
    pub fn upper_top(&self, sheet: &SpriteSheet) -> i32 {
        self.gap_top - sheet.obstacle_h()
    }

    /// Scroll left one tick.
    pub fn advance(&mut self, tuning: &Tuning) {
        self.x -= tuning.scroll_speed;
    }

    /// Fully off the left edge of the playfield, judged on the current
    /// (pre-advance) position.
    pub fn is_offscreen(&self, sheet: &SpriteSheet) -> bool {
        self.x + (sheet.obstacle_w() as f32) < 0.0
    }

    /// Pixel-exact collision against the avatar's current frame.
    /// Returns the first intersecting pixel (in avatar-mask coordinates)
    /// of whichever segment the avatar touches.
    pub fn overlaps(&self, avatar: &Avatar, sheet: &SpriteSheet) -> Option<(i32, i32)> {
        let mask = avatar.coverage_mask(sheet);
        let dx = (self.x - avatar.pos.x).round() as i32;
        let avatar_y = avatar.pos.y.round() as i32;
        mask.overlap(&sheet.obstacle_upper, (dx, self.upper_top(sheet) - avatar_y))
            .or_else(|| mask.overlap(&sheet.obstacle_lower, (dx, self.gap_bottom - avatar_y)))
    }
}
