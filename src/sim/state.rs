//! Game state and the simulation phase machine
//!
//! All state that determinism depends on lives here. Snapshots
//! serialize for inspection and determinism tests; the RNG itself is
//! skipped and re-armed from the recorded seed on load.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::assets::SpriteSheet;
use crate::consts::*;
use crate::sim::avatar::Avatar;
use crate::sim::field::ObstacleField;
use crate::sim::ground::GroundStrip;
use crate::tuning::Tuning;

/// Simulation phase. `Stopped` is reached only through the external
/// close signal or an end-run collision policy; a collision by itself
/// never stops the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    Running,
    Stopped,
}

fn detached_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Gap-placement RNG; call [`GameState::reseed`] after deserializing
    #[serde(skip, default = "detached_rng")]
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: RunPhase,
    /// Ticks executed so far
    pub time_ticks: u64,
    /// One point per obstacle passed
    pub score: u32,
    pub avatar: Avatar,
    pub ground: GroundStrip,
    pub field: ObstacleField,
}

impl GameState {
    /// Create a fresh session. The sheet supplies the ground segment
    /// width; the first obstacle's gap is drawn from the seeded RNG.
    pub fn new(seed: u64, tuning: Tuning, sheet: &SpriteSheet) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let field = ObstacleField::new(&mut rng, &tuning);
        Self {
            seed,
            rng,
            tuning,
            phase: RunPhase::Running,
            time_ticks: 0,
            score: 0,
            avatar: Avatar::new(Vec2::new(AVATAR_START_X, AVATAR_START_Y)),
            ground: GroundStrip::new(GROUND_Y, sheet.ground_segment_w as f32),
            field,
        }
    }

    /// Re-arm the RNG from the recorded seed after deserializing.
    pub fn reseed(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }
}
