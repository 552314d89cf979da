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


//! Service that reports frame-loop telemetry at a fixed interval.

use crate::frame_stats::FrameStats;
use std::time::{Duration, Instant};

/// Periodically logs a summary of the frame loop.
///
/// Call [`tick`](Self::tick) once per frame; the summary is logged whenever
/// the update interval has passed. A zero interval disables the summary.
#[derive(Debug)]
pub struct TelemetryService {
    last_update: Instant,
    update_interval: Duration,
    reports: u64,
}

impl TelemetryService {
    /// Creates a new telemetry service with the given update interval.
    pub fn new(update_interval: Duration) -> Self {
        Self {
            last_update: Instant::now(),
            update_interval,
            reports: 0,
        }
    }

    /// Should be called periodically (once per frame).
    /// Logs `stats` and the effective rate if the interval has passed, and
    /// returns whether it did.
    pub fn tick(&mut self, stats: &FrameStats, ticks_per_second: f64) -> bool {
        if self.update_interval.is_zero() || self.last_update.elapsed() < self.update_interval {
            return false;
        }
        log::info!("Telemetry: {:.1} ticks/s, {}", ticks_per_second, stats);
        self.last_update = Instant::now();
        self.reports += 1;
        true
    }

    /// Number of summaries logged so far.
    pub fn reports(&self) -> u64 {
        self.reports
    }

    /// The configured summary interval.
    pub fn update_interval(&self) -> Duration {
        self.update_interval
    }
}

impl Default for TelemetryService {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
