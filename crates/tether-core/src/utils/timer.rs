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

//! Monotonic timing primitive used for frame deltas.

use std::time::{Duration, Instant};

/// Measures time since it was started or last lapped.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    start_time: Instant,
}

impl Stopwatch {
    /// Creates a stopwatch that starts immediately.
    #[inline]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Time since the stopwatch was started or last lapped.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// [`elapsed`](Self::elapsed) in seconds.
    #[inline]
    pub fn elapsed_secs_f64(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Returns the elapsed time and restarts from now.
    ///
    /// Uses a single clock read, so consecutive laps add up to the total
    /// running time with no gaps.
    #[inline]
    pub fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.start_time);
        self.start_time = now;
        elapsed
    }

    /// Restarts from now, discarding the elapsed time.
    #[inline]
    pub fn restart(&mut self) {
        self.start_time = Instant::now();
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
