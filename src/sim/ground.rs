//! Infinite scrolling ground
//!
//! Two tiled segments scroll left in lockstep with the obstacles. A
//! segment that leaves the playfield wraps to directly follow the other
//! one, so the pair covers the visible width with no seam regardless of
//! the segment-width to scroll-speed ratio.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundStrip {
    /// Left edges of the two segments
    pub x1: f32,
    pub x2: f32,
    /// Top of the strip (fixed)
    pub y: f32,
    /// Width of one segment
    pub segment_w: f32,
}

impl GroundStrip {
    pub fn new(y: f32, segment_w: f32) -> Self {
        Self {
            x1: 0.0,
            x2: segment_w,
            y,
            segment_w,
        }
    }

    /// Scroll one tick and wrap whichever segment has fully left the
    /// playfield.
    pub fn advance(&mut self, tuning: &Tuning) {
        self.x1 -= tuning.scroll_speed;
        self.x2 -= tuning.scroll_speed;

        if self.x1 + self.segment_w < 0.0 {
            self.x1 = self.x2 + self.segment_w;
        }
        if self.x2 + self.segment_w < 0.0 {
            self.x2 = self.x1 + self.segment_w;
        }
    }
}
