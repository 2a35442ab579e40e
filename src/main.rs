//! Gapwing entry point
//!
//! Runs a scripted headless session: no windowing host is wired in, so
//! the render sink discards frames and the pacer only sleeps when
//! `--realtime` is passed. A real host supplies its own sink, pacer and
//! input polling through the same `Runner` API.

use gapwing::consts::TICK_HZ;
use gapwing::pacer::{FixedRatePacer, ManualPacer};
use gapwing::render::NullSink;
use gapwing::runner::Runner;
use gapwing::sim::{GameState, TickInput};
use gapwing::{SpriteSheet, Tuning};

/// Scripted session: a flap every 20 ticks, close after 30 seconds.
const SESSION_TICKS: u64 = 30 * TICK_HZ as u64;

fn main() {
    env_logger::init();

    let mut seed = 0xC0FFEE;
    let mut realtime = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--realtime" => realtime = true,
            other => {
                if let Ok(parsed) = other.parse::<u64>() {
                    seed = parsed;
                }
            }
        }
    }

    log::info!("gapwing starting (seed {seed}, {TICK_HZ} Hz, realtime: {realtime})");

    let sheet = SpriteSheet::builtin();
    let state = GameState::new(seed, Tuning::playable(), &sheet);
    let mut runner = Runner::new(state, sheet);
    let mut sink = NullSink;

    let script = |tick: u64| TickInput {
        impulse: tick % 20 == 0,
        close_requested: tick >= SESSION_TICKS,
    };

    if realtime {
        let mut pacer = FixedRatePacer::new(TICK_HZ);
        runner.run(&mut pacer, &mut sink, script);
    } else {
        let mut pacer = ManualPacer::default();
        runner.run(&mut pacer, &mut sink, script);
    }

    println!(
        "final score: {} after {} ticks",
        runner.state.score, runner.state.time_ticks
    );
    if let Ok(json) = serde_json::to_string_pretty(&runner.state) {
        println!("{json}");
    }
}
