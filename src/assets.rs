//! Sprite coverage masks as explicit configuration
//!
//! The sim never reaches for ambient asset tables; whoever builds the
//! session hands it a `SpriteSheet`. The built-in sheet supplies 68x48
//! avatar frames, 104x640 obstacle segments and 672-wide ground tiles
//! with procedurally drawn coverage. Hosts with real artwork build
//! their sheet from per-pixel opacity via
//! [`CoverageMask::from_opacity`].

use crate::sim::mask::CoverageMask;

/// Masks and dimensions for every sprite the sim collides or places
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    /// Flap cycle frames: wings level, up, down
    pub avatar_frames: [CoverageMask; 3],
    /// Upper obstacle segment (cap at the bottom)
    pub obstacle_upper: CoverageMask,
    /// Lower obstacle segment (cap at the top)
    pub obstacle_lower: CoverageMask,
    /// Width of one ground tile
    pub ground_segment_w: u32,
}

impl SpriteSheet {
    /// Assemble a sheet from avatar frames and the lower obstacle
    /// segment; the upper segment is the lower one flipped upside down.
    pub fn new(
        avatar_frames: [CoverageMask; 3],
        obstacle_lower: CoverageMask,
        ground_segment_w: u32,
    ) -> Self {
        let obstacle_upper = obstacle_lower.flipped_vertical();
        Self {
            avatar_frames,
            obstacle_upper,
            obstacle_lower,
            ground_segment_w,
        }
    }

    /// The built-in sprite set.
    pub fn builtin() -> Self {
        let frames = [
            builtin_avatar_frame(WingPose::Level),
            builtin_avatar_frame(WingPose::Up),
            builtin_avatar_frame(WingPose::Down),
        ];
        Self::new(frames, builtin_obstacle_segment(), 672)
    }

    pub fn obstacle_w(&self) -> i32 {
        self.obstacle_lower.width() as i32
    }

    pub fn obstacle_h(&self) -> i32 {
        self.obstacle_lower.height() as i32
    }

    pub fn avatar_w(&self) -> i32 {
        self.avatar_frames[0].width() as i32
    }

    pub fn avatar_h(&self) -> i32 {
        self.avatar_frames[0].height() as i32
    }
}

enum WingPose {
    Level,
    Up,
    Down,
}

/// 68x48 avatar silhouette: body, tail, beak, and a wing whose pose is
/// the only difference between frames. The canvas margin stays
/// transparent so mask collision has something to be exact about.
fn builtin_avatar_frame(pose: WingPose) -> CoverageMask {
    let mut m = CoverageMask::new(68, 48);
    m.fill_rect(14, 10, 40, 28); // body
    m.fill_rect(18, 6, 32, 4); // crown
    m.fill_rect(4, 16, 10, 12); // tail
    m.fill_rect(54, 18, 12, 10); // beak
    match pose {
        WingPose::Level => m.fill_rect(20, 22, 18, 10),
        WingPose::Up => m.fill_rect(20, 0, 18, 12),
        WingPose::Down => m.fill_rect(20, 36, 18, 12),
    }
    m
}

/// 104x640 lower obstacle segment: full-width cap over an inset shaft.
fn builtin_obstacle_segment() -> CoverageMask {
    let mut m = CoverageMask::new(104, 640);
    m.fill_rect(0, 0, 104, 40); // cap
    m.fill_rect(4, 40, 96, 600); // shaft
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dimensions() {
        let sheet = SpriteSheet::builtin();
        assert_eq!((sheet.avatar_w(), sheet.avatar_h()), (68, 48));
        assert_eq!((sheet.obstacle_w(), sheet.obstacle_h()), (104, 640));
        assert_eq!(sheet.ground_segment_w, 672);
    }

    #[test]
    fn test_wing_poses_differ_only_outside_the_body() {
        let sheet = SpriteSheet::builtin();
        let [level, up, down] = &sheet.avatar_frames;
        assert_ne!(level, up);
        assert_ne!(level, down);
        // Wing up pokes above the crown, wing down below the body.
        assert!(up.get(24, 2) && !level.get(24, 2));
        assert!(down.get(24, 44) && !level.get(24, 44));
    }

    #[test]
    fn test_upper_segment_is_flipped_lower() {
        let sheet = SpriteSheet::builtin();
        // Lower cap sits at the top, upper cap at the bottom.
        assert!(sheet.obstacle_lower.get(0, 0));
        assert!(!sheet.obstacle_lower.get(0, 639));
        assert!(!sheet.obstacle_upper.get(0, 0));
        assert!(sheet.obstacle_upper.get(0, 639));
    }

    #[test]
    fn test_shaft_is_inset_from_the_cap() {
        let sheet = SpriteSheet::builtin();
        assert!(sheet.obstacle_lower.get(2, 10)); // cap spans full width
        assert!(!sheet.obstacle_lower.get(2, 100)); // shaft does not
        assert!(sheet.obstacle_lower.get(50, 100));
    }
}
