//! Draw-command port to the host's render sink
//!
//! The sim never draws. Once per tick the runner assembles an ordered
//! list of draw commands from the current state and submits it to
//! whatever `RenderSink` the host plugged in. The order fixes visual
//! layering only; it is not part of the simulation contract.

use glam::Vec2;

use crate::assets::SpriteSheet;
use crate::sim::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Upper,
    Lower,
}

/// One layer of a frame, back to front
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background,
    ObstacleSegment { segment: Segment, pos: Vec2 },
    Score(u32),
    GroundSegment { pos: Vec2 },
    Avatar { pos: Vec2, tilt: f32, frame: usize },
}

/// Where each tick's draw commands go
pub trait RenderSink {
    fn submit(&mut self, frame: &[DrawCommand]);
}

/// Build one frame's draw list: background, obstacle segments, score,
/// ground tiles, then the avatar on top.
pub fn assemble_frame(state: &GameState, sheet: &SpriteSheet) -> Vec<DrawCommand> {
    let mut frame = Vec::with_capacity(state.field.obstacles.len() * 2 + 4);
    frame.push(DrawCommand::Background);
    for ob in &state.field.obstacles {
        frame.push(DrawCommand::ObstacleSegment {
            segment: Segment::Upper,
            pos: Vec2::new(ob.x, ob.upper_top(sheet) as f32),
        });
        frame.push(DrawCommand::ObstacleSegment {
            segment: Segment::Lower,
            pos: Vec2::new(ob.x, ob.gap_bottom as f32),
        });
    }
    frame.push(DrawCommand::Score(state.score));
    frame.push(DrawCommand::GroundSegment {
        pos: Vec2::new(state.ground.x1, state.ground.y),
    });
    frame.push(DrawCommand::GroundSegment {
        pos: Vec2::new(state.ground.x2, state.ground.y),
    });
    frame.push(DrawCommand::Avatar {
        pos: state.avatar.pos,
        tilt: state.avatar.tilt,
        frame: state.avatar.frame,
    });
    frame
}

/// Discards every frame; for headless hosts and benchmarks.
pub struct NullSink;

impl RenderSink for NullSink {
    fn submit(&mut self, _frame: &[DrawCommand]) {}
}

/// Keeps every submitted frame; for tests.
#[derive(Default)]
pub struct RecordingSink {
    pub frames: Vec<Vec<DrawCommand>>,
}

impl RenderSink for RecordingSink {
    fn submit(&mut self, frame: &[DrawCommand]) {
        self.frames.push(frame.to_vec());
    }
}
