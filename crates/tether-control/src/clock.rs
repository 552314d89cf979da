// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Fixed-rate tick source.

use std::thread;
use std::time::{Duration, Instant};
use tether_core::utils::timer::Stopwatch;
use tether_core::{TetherError, TetherResult, TickEvent};
use tether_telemetry::TickRateMeter;

/// Receives the notifications of a [`FrameClock`] run.
pub trait ClockHandler {
    /// Called once before the first tick.
    fn before_run(&mut self) {}

    /// Called once per iteration. Setting the stop flag on `event` ends the
    /// run after this call returns; an error ends it immediately.
    fn tick(&mut self, event: &mut TickEvent) -> TetherResult<()>;

    /// Called once after the last tick, including when a tick failed.
    fn after_run(&mut self) {}
}

/// Produces a bounded-rate sequence of ticks.
///
/// Each tick carries the wall-clock time since the previous one, unmodified.
/// With frame limiting on, the clock sleeps for whatever is left of the
/// period once the handler returns. Late frames are not caught up; the next
/// tick's elapsed time simply reports the drift.
#[derive(Debug)]
pub struct FrameClock {
    tick_rate: u32,
    limit_frames: bool,
    period: Duration,
    meter: TickRateMeter,
}

impl FrameClock {
    /// Creates a clock targeting `tick_rate` ticks per second.
    ///
    /// Fails with [`TetherError::ClockMisconfiguration`] on a zero rate.
    pub fn new(tick_rate: u32, limit_frames: bool) -> TetherResult<Self> {
        if tick_rate == 0 {
            return Err(TetherError::ClockMisconfiguration(
                "tick rate must be at least 1 tick per second".to_string(),
            ));
        }
        Ok(Self {
            tick_rate,
            limit_frames,
            period: Duration::from_secs_f64(1.0 / tick_rate as f64),
            meter: TickRateMeter::default(),
        })
    }

    /// Configured ticks per second.
    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    /// Whether the clock sleeps out the rest of each period.
    pub fn limit_frames(&self) -> bool {
        self.limit_frames
    }

    /// Target duration of one tick.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Effective ticks per second over roughly the last second.
    pub fn ticks_per_second(&self) -> f64 {
        self.meter.ticks_per_second()
    }

    /// Runs `handler` until it requests a stop or fails, and returns the
    /// number of ticks delivered.
    ///
    /// `after_run` is always invoked before this returns. A tick error is
    /// returned after it.
    pub fn run<H: ClockHandler + ?Sized>(&mut self, handler: &mut H) -> TetherResult<u64> {
        log::info!(
            "FrameClock: Starting at {} ticks/s (limit_frames={})",
            self.tick_rate,
            self.limit_frames
        );
        self.meter.reset();
        handler.before_run();

        let mut stopwatch = Stopwatch::new();
        let mut ticks: u64 = 0;
        let result = loop {
            let frame_start = Instant::now();
            let elapsed = stopwatch.lap();
            if ticks > 0 {
                self.meter.record(elapsed);
            }

            let mut event = TickEvent::new(elapsed, ticks, self.meter.ticks_per_second());
            if let Err(e) = handler.tick(&mut event) {
                break Err(e);
            }
            ticks += 1;
            if event.stop_requested() {
                break Ok(ticks);
            }

            if self.limit_frames {
                let spent = frame_start.elapsed();
                if spent < self.period {
                    thread::sleep(self.period - spent);
                }
            }
        };

        handler.after_run();
        log::info!(
            "FrameClock: Stopped after {} tick(s) ({:.1} ticks/s)",
            ticks,
            self.meter.ticks_per_second()
        );
        result
    }
}
