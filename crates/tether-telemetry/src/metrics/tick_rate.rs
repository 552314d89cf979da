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

//! Rolling measurement of the effective tick rate.

use std::collections::VecDeque;
use std::time::Duration;

/// Computes ticks per second over a sliding window of recent frame times.
///
/// Each recorded sample is the full duration of one frame (tick work plus
/// pacing sleep). Samples older than the window are evicted, but at least one
/// sample is always kept so a single very slow frame still yields a rate.
#[derive(Debug, Clone)]
pub struct TickRateMeter {
    window: Duration,
    samples: VecDeque<Duration>,
    total: Duration,
}

impl TickRateMeter {
    /// Creates a meter averaging over `window`.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            samples: VecDeque::new(),
            total: Duration::ZERO,
        }
    }

    /// Records the duration of one completed frame.
    pub fn record(&mut self, frame_time: Duration) {
        self.samples.push_back(frame_time);
        self.total += frame_time;
        while self.total > self.window && self.samples.len() > 1 {
            if let Some(oldest) = self.samples.pop_front() {
                self.total -= oldest;
            }
        }
    }

    /// Ticks per second over the current window, or `0.0` with no samples.
    pub fn ticks_per_second(&self) -> f64 {
        let secs = self.total.as_secs_f64();
        if self.samples.is_empty() || secs <= 0.0 {
            return 0.0;
        }
        self.samples.len() as f64 / secs
    }

    /// Number of samples currently in the window.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Discards all samples.
    pub fn reset(&mut self) {
        self.samples.clear();
        self.total = Duration::ZERO;
    }
}

impl Default for TickRateMeter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
