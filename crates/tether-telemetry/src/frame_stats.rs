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


//! Counters describing what the frame loop has done so far.

use std::fmt;

/// Per-stage counters accumulated over one scheduler run.
///
/// A "frame" is one tick in which the target was alive. Stages that were
/// gated off in a frame are counted as skipped rather than run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames that ran to completion.
    pub frames_completed: u64,
    /// Frames in which input was sampled.
    pub input_samples: u64,
    /// Frames in which the module pass ran.
    pub module_passes: u64,
    /// Frames in which the module pass was gated off.
    pub module_passes_skipped: u64,
    /// Individual module updates invoked, including failed ones.
    pub module_updates: u64,
    /// Module updates that returned an error.
    pub module_faults: u64,
}

impl FrameStats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of frames in which the module pass ran, in `[0, 1]`.
    pub fn module_pass_ratio(&self) -> f64 {
        let total = self.module_passes + self.module_passes_skipped;
        if total == 0 {
            return 0.0;
        }
        self.module_passes as f64 / total as f64
    }
}

impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frames={} input={} passes={} skipped={} updates={} faults={}",
            self.frames_completed,
            self.input_samples,
            self.module_passes,
            self.module_passes_skipped,
            self.module_updates,
            self.module_faults
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pass_ratio_of_fresh_stats_is_zero() {
        assert_eq!(FrameStats::new().module_pass_ratio(), 0.0);
    }

    #[test]
    fn pass_ratio_counts_skipped_frames() {
        let stats = FrameStats {
            module_passes: 3,
            module_passes_skipped: 1,
            ..Default::default()
        };
        assert_relative_eq!(stats.module_pass_ratio(), 0.75);
    }

    #[test]
    fn display_lists_every_counter() {
        let stats = FrameStats {
            frames_completed: 5,
            module_faults: 2,
            ..Default::default()
        };
        let text = stats.to_string();
        assert!(text.contains("frames=5"));
        assert!(text.contains("faults=2"));
    }
}
