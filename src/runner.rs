//! Per-tick orchestration
//!
//! The runner owns the game state and drives the fixed sequence each
//! tick: wait for the pacer, poll input, advance the sim, apply the
//! collision policy, submit a frame to the render sink. It is the sole
//! mutator of all entity state.

use std::fmt;

use crate::assets::SpriteSheet;
use crate::pacer::FramePacer;
use crate::render::{RenderSink, assemble_frame};
use crate::sim::field::FieldReport;
use crate::sim::state::{GameState, RunPhase};
use crate::sim::tick::{TickInput, tick};

/// A mask intersection observed during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub obstacle_id: u32,
    pub tick: u64,
}

/// What a collision means. The sim only reports intersections; the
/// consequence is a swappable strategy, `Ignore` by default.
pub enum CollisionPolicy {
    Ignore,
    /// Stop the loop before the next tick
    EndRun,
    /// Hand each event to the host
    Callback(Box<dyn FnMut(&CollisionEvent)>),
}

impl Default for CollisionPolicy {
    fn default() -> Self {
        CollisionPolicy::Ignore
    }
}

impl fmt::Debug for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionPolicy::Ignore => f.write_str("Ignore"),
            CollisionPolicy::EndRun => f.write_str("EndRun"),
            CollisionPolicy::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

pub struct Runner {
    pub state: GameState,
    pub sheet: SpriteSheet,
    pub policy: CollisionPolicy,
}

impl Runner {
    pub fn new(state: GameState, sheet: SpriteSheet) -> Self {
        Self {
            state,
            sheet,
            policy: CollisionPolicy::Ignore,
        }
    }

    pub fn with_policy(mut self, policy: CollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Execute one tick: advance the sim, apply the collision policy,
    /// submit the frame.
    pub fn step(&mut self, input: &TickInput, sink: &mut dyn RenderSink) -> FieldReport {
        let report = tick(&mut self.state, input, &self.sheet);

        for &obstacle_id in &report.collisions {
            let event = CollisionEvent {
                obstacle_id,
                tick: self.state.time_ticks,
            };
            match &mut self.policy {
                CollisionPolicy::Ignore => {}
                CollisionPolicy::EndRun => {
                    log::info!("collision with obstacle {obstacle_id} ended the run");
                    self.state.phase = RunPhase::Stopped;
                }
                CollisionPolicy::Callback(hook) => hook(&event),
            }
        }

        sink.submit(&assemble_frame(&self.state, &self.sheet));
        report
    }

    /// Drive the loop until the phase leaves `Running`. `poll` is called
    /// once per tick with the current tick count and supplies that
    /// tick's input.
    pub fn run(
        &mut self,
        pacer: &mut dyn FramePacer,
        sink: &mut dyn RenderSink,
        mut poll: impl FnMut(u64) -> TickInput,
    ) {
        log::info!("session started (seed {})", self.state.seed);
        while self.state.phase == RunPhase::Running {
            pacer.wait();
            let input = poll(self.state.time_ticks);
            let report = self.step(&input, sink);
            if report.scored > 0 {
                log::debug!("score {}", self.state.score);
            }
        }
        log::info!(
            "session stopped after {} ticks, score {}",
            self.state.time_ticks,
            self.state.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacer::ManualPacer;
    use crate::render::{DrawCommand, NullSink, RecordingSink};
    use crate::sim::obstacle::Obstacle;
    use crate::tuning::Tuning;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn colliding_runner(policy: CollisionPolicy) -> Runner {
        let sheet = SpriteSheet::builtin();
        let mut state = GameState::new(2, Tuning::default(), &sheet);
        state.field.obstacles.clear();
        let mut ob = Obstacle::with_gap_top(1, 230.0, 50, &state.tuning);
        ob.passed = true;
        state.field.obstacles.push(ob);
        // Avatar sits inside the lower segment (starts at y 250).
        state.avatar.pos.y = 300.0;
        Runner::new(state, sheet).with_policy(policy)
    }

    #[test]
    fn test_ignore_policy_keeps_running() {
        let mut runner = colliding_runner(CollisionPolicy::Ignore);
        let report = runner.step(&TickInput::default(), &mut NullSink);
        assert_eq!(report.collisions.len(), 1);
        assert_eq!(runner.state.phase, RunPhase::Running);
    }

    #[test]
    fn test_end_run_policy_stops_the_loop() {
        let mut runner = colliding_runner(CollisionPolicy::EndRun);
        runner.step(&TickInput::default(), &mut NullSink);
        assert_eq!(runner.state.phase, RunPhase::Stopped);
    }

    #[test]
    fn test_callback_policy_sees_each_event() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let sink_hits = hits.clone();
        let mut runner = colliding_runner(CollisionPolicy::Callback(Box::new(move |event| {
            sink_hits.borrow_mut().push(event.obstacle_id);
        })));
        runner.step(&TickInput::default(), &mut NullSink);
        assert_eq!(*hits.borrow(), vec![1]);
        assert_eq!(runner.state.phase, RunPhase::Running);
    }

    #[test]
    fn test_run_renders_once_per_tick_and_stops_on_close() {
        let sheet = SpriteSheet::builtin();
        let state = GameState::new(3, Tuning::default(), &sheet);
        let mut runner = Runner::new(state, sheet);
        let mut pacer = ManualPacer::default();
        let mut sink = RecordingSink::default();

        runner.run(&mut pacer, &mut sink, |tick| TickInput {
            impulse: false,
            close_requested: tick >= 9,
        });

        // Ten ticks ran (close observed on the tenth), ten frames drawn.
        assert_eq!(runner.state.time_ticks, 10);
        assert_eq!(sink.frames.len(), 10);
        assert_eq!(pacer.ticks, 10);
        assert!(
            sink.frames
                .iter()
                .all(|f| f.first() == Some(&DrawCommand::Background))
        );
    }
}
