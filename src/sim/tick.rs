//! Fixed timestep simulation tick
//!
//! One call advances the whole sim by exactly one tick, in a fixed
//! order: close poll, avatar impulse/physics, obstacle field scan,
//! ground scroll, animation step. The close signal is polled first but
//! the tick that observes it still runs to completion; the loop stops
//! before the next tick begins.

use crate::assets::SpriteSheet;
use crate::sim::field::FieldReport;
use crate::sim::state::{GameState, RunPhase};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Discrete upward impulse (key/tap)
    pub impulse: bool,
    /// Host asked to close the window
    pub close_requested: bool,
}

/// Advance the game state by one fixed tick.
///
/// Avatar physics run only on impulse unless
/// [`Tuning::auto_advance_avatar`](crate::tuning::Tuning) is set - the
/// avatar holds its height between impulses.
pub fn tick(state: &mut GameState, input: &TickInput, sheet: &SpriteSheet) -> FieldReport {
    if state.phase == RunPhase::Stopped {
        return FieldReport::default();
    }
    if input.close_requested {
        state.phase = RunPhase::Stopped;
    }
    state.time_ticks += 1;

    if input.impulse {
        state.avatar.apply_impulse(&state.tuning);
    }
    if state.tuning.auto_advance_avatar {
        state.avatar.advance(&state.tuning);
    }

    let report = state.field.advance(&state.avatar, sheet, &mut state.rng, &state.tuning);
    state.score += report.scored;

    state.ground.advance(&state.tuning);
    state.avatar.advance_animation();

    report
}
