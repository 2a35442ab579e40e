//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod avatar;
pub mod field;
pub mod ground;
pub mod mask;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use avatar::Avatar;
pub use field::{FieldReport, ObstacleField};
pub use ground::GroundStrip;
pub use mask::CoverageMask;
pub use obstacle::Obstacle;
pub use state::{GameState, RunPhase};
pub use tick::{TickInput, tick};
