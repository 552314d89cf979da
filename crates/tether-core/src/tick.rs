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

//! The value handed to every stage of one frame.

use std::time::Duration;

/// One iteration of the frame loop.
///
/// A `TickEvent` is created by the frame clock, passed by mutable reference
/// through every stage of the frame, and inspected by the clock once the frame
/// returns. Any stage may request a stop; the request cannot be withdrawn, and
/// the clock exits instead of scheduling another tick.
#[derive(Debug, Clone)]
pub struct TickEvent {
    elapsed: Duration,
    frame_index: u64,
    ticks_per_second: f64,
    stop_requested: bool,
}

impl TickEvent {
    /// Creates the event for frame `frame_index`.
    pub fn new(elapsed: Duration, frame_index: u64, ticks_per_second: f64) -> Self {
        Self {
            elapsed,
            frame_index,
            ticks_per_second,
            stop_requested: false,
        }
    }

    /// Wall-clock time since the previous tick started. The first tick
    /// reports the time since the clock started running.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// [`elapsed`](Self::elapsed) in seconds.
    #[inline]
    pub fn elapsed_secs_f32(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Zero-based index of this frame since the clock started.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// The clock's effective tick rate as measured before this frame.
    #[inline]
    pub fn ticks_per_second(&self) -> f64 {
        self.ticks_per_second
    }

    /// Asks the loop to stop. The stage that asked finishes; later stages of
    /// this frame are skipped and no further frame starts.
    #[inline]
    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    /// Returns `true` once any stage has requested a stop.
    #[inline]
    pub fn stop_requested(&self) -> bool {
        self.stop_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tick_has_no_stop_request() {
        let tick = TickEvent::new(Duration::from_millis(16), 3, 60.0);
        assert!(!tick.stop_requested());
        assert_eq!(tick.frame_index(), 3);
        assert_eq!(tick.elapsed(), Duration::from_millis(16));
    }

    #[test]
    fn stop_request_is_sticky() {
        let mut tick = TickEvent::new(Duration::ZERO, 0, 0.0);
        tick.request_stop();
        tick.request_stop();
        assert!(tick.stop_requested());
    }
}
