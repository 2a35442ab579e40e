//! The active obstacle set
//!
//! Holds obstacles in spawn order and scans the full set every tick -
//! collision, retirement eligibility and pass detection are all judged
//! on the pre-advance position, then every obstacle scrolls. Collisions
//! are reported, never acted on here; what a collision means is the
//! orchestrator's policy.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::assets::SpriteSheet;
use crate::sim::avatar::Avatar;
use crate::sim::obstacle::Obstacle;
use crate::tuning::Tuning;

/// Everything the scan observed in one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldReport {
    /// Ids of obstacles whose masks intersect the avatar's
    pub collisions: Vec<u32>,
    /// Obstacles newly passed this tick (one score point each)
    pub scored: u32,
    /// Whether a successor obstacle was appended
    pub spawned: bool,
    /// Obstacles dropped off the left edge
    pub retired: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    pub obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl ObstacleField {
    /// Start with a single obstacle at the far spawn position.
    pub fn new(rng: &mut impl Rng, tuning: &Tuning) -> Self {
        let mut field = Self {
            obstacles: Vec::new(),
            next_id: 1,
        };
        let id = field.alloc_id();
        field
            .obstacles
            .push(Obstacle::new(id, tuning.first_spawn_x, rng, tuning));
        field
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// One tick of the field: scan every active obstacle, then apply
    /// retirement and at most one successor spawn.
    pub fn advance(
        &mut self,
        avatar: &Avatar,
        sheet: &SpriteSheet,
        rng: &mut impl Rng,
        tuning: &Tuning,
    ) -> FieldReport {
        let mut report = FieldReport::default();
        let mut spawn_next = false;
        let mut retired: Vec<u32> = Vec::new();

        for ob in &mut self.obstacles {
            if ob.overlaps(avatar, sheet).is_some() {
                report.collisions.push(ob.id);
            }
            if ob.is_offscreen(sheet) {
                retired.push(ob.id);
            }
            if !ob.passed && ob.x < avatar.pos.x {
                ob.passed = true;
                spawn_next = true;
                report.scored += 1;
            }
            ob.advance(tuning);
        }

        if !retired.is_empty() {
            report.retired = retired.len() as u32;
            self.obstacles.retain(|ob| !retired.contains(&ob.id));
        }

        if spawn_next {
            let id = self.alloc_id();
            let ob = Obstacle::new(id, tuning.respawn_x, rng, tuning);
            log::debug!("obstacle {} spawned with gap top {}", id, ob.gap_top);
            self.obstacles.push(ob);
            report.spawned = true;
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::mask::CoverageMask;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn test_sheet() -> SpriteSheet {
        let frame = CoverageMask::solid(4, 4);
        SpriteSheet::new(
            [frame.clone(), frame.clone(), frame],
            CoverageMask::solid(6, 100),
            300,
        )
    }

    fn far_avatar() -> Avatar {
        // Parked far left and high, out of reach of every test obstacle.
        Avatar::new(Vec2::new(-10_000.0, -10_000.0))
    }

    #[test]
    fn test_starts_with_one_obstacle_at_spawn_x() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let field = ObstacleField::new(&mut rng, &tuning);
        assert_eq!(field.obstacles.len(), 1);
        assert_eq!(field.obstacles[0].x, 700.0);
    }

    #[test]
    fn test_pass_scores_once_and_spawns_one_successor() {
        let tuning = Tuning::default();
        let sheet = test_sheet();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = ObstacleField::new(&mut rng, &tuning);
        field.obstacles.clear();
        field.obstacles.push(Obstacle::with_gap_top(100, 231.0, 200, &tuning));

        let avatar = Avatar::new(Vec2::new(230.0, -10_000.0));

        // Pre-advance x is 231: not yet passed.
        let report = field.advance(&avatar, &sheet, &mut rng, &tuning);
        assert_eq!(report.scored, 0);
        assert!(!report.spawned);

        // Now 226 < 230: passed, scored, one successor at the respawn x.
        let report = field.advance(&avatar, &sheet, &mut rng, &tuning);
        assert_eq!(report.scored, 1);
        assert!(report.spawned);
        assert_eq!(field.obstacles.len(), 2);
        assert_eq!(field.obstacles[1].x, 650.0);

        // The passed flag is idempotent: no further score or spawn from
        // the same obstacle.
        for _ in 0..10 {
            let report = field.advance(&avatar, &sheet, &mut rng, &tuning);
            assert_eq!(report.scored, 0);
            assert!(!report.spawned);
        }
        assert_eq!(field.obstacles.len(), 2);
    }

    #[test]
    fn test_retirement_waits_for_pre_advance_position() {
        let tuning = Tuning::default();
        let sheet = test_sheet();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = ObstacleField::new(&mut rng, &tuning);
        field.obstacles.clear();

        // Right edge at +2: this tick's advance pushes it past zero, but
        // the scan judged the pre-advance position, so it survives.
        let mut ob = Obstacle::with_gap_top(7, 0.0, 100, &tuning);
        ob.x = -(sheet.obstacle_w() as f32) + 2.0;
        ob.passed = true;
        field.obstacles.push(ob);

        let avatar = far_avatar();
        let report = field.advance(&avatar, &sheet, &mut rng, &tuning);
        assert_eq!(report.retired, 0);
        assert_eq!(field.obstacles.len(), 1);

        // Next tick the scan sees the edge below zero and retires it.
        let report = field.advance(&avatar, &sheet, &mut rng, &tuning);
        assert_eq!(report.retired, 1);
        assert!(field.obstacles.is_empty());
    }

    #[test]
    fn test_collisions_are_reported_not_acted_on() {
        let tuning = Tuning::default();
        let sheet = test_sheet();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = ObstacleField::new(&mut rng, &tuning);
        field.obstacles.clear();

        let mut ob = Obstacle::with_gap_top(42, 230.0, 50, &tuning);
        ob.passed = true;
        field.obstacles.push(ob);

        // Avatar inside the lower segment.
        let avatar = Avatar::new(Vec2::new(230.0, 260.0));
        let report = field.advance(&avatar, &sheet, &mut rng, &tuning);
        assert_eq!(report.collisions, vec![42]);
        // The obstacle is still there, still scrolling.
        assert_eq!(field.obstacles.len(), 1);
        assert_eq!(field.obstacles[0].x, 225.0);
    }

    #[test]
    fn test_scan_handles_unordered_set() {
        let tuning = Tuning::default();
        let sheet = test_sheet();
        let mut rng = Pcg32::seed_from_u64(9);
        let mut field = ObstacleField::new(&mut rng, &tuning);
        field.obstacles.clear();
        // Mixed x order: both qualify as passed on the same scan.
        field.obstacles.push(Obstacle::with_gap_top(1, 100.0, 200, &tuning));
        field.obstacles.push(Obstacle::with_gap_top(2, 50.0, 200, &tuning));

        let avatar = Avatar::new(Vec2::new(230.0, -10_000.0));
        let report = field.advance(&avatar, &sheet, &mut rng, &tuning);
        assert_eq!(report.scored, 2);
        // Still exactly one successor per tick transition.
        assert_eq!(field.obstacles.len(), 3);
    }
}
