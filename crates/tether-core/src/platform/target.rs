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

use crate::math::Rect;
use std::time::Duration;

/// How long an attach call waits for the target process to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachTimeout {
    /// Wait until the process shows up.
    #[default]
    Indefinite,
    /// Give up after the duration. Zero means "check once".
    After(Duration),
}

impl AttachTimeout {
    /// Builds a timeout from an optional millisecond count; `None` waits forever.
    pub fn from_millis(timeout_ms: Option<u64>) -> Self {
        match timeout_ms {
            Some(ms) => AttachTimeout::After(Duration::from_millis(ms)),
            None => AttachTimeout::Indefinite,
        }
    }

    /// The timeout in milliseconds, if bounded.
    pub fn as_millis(&self) -> Option<u64> {
        match self {
            AttachTimeout::Indefinite => None,
            AttachTimeout::After(d) => Some(d.as_millis() as u64),
        }
    }
}

/// Source of the target window's on-screen rectangle.
///
/// Kept separate from [`TargetHandle`] so an overlay can track the window
/// without holding the handle the scheduler owns.
pub trait WindowGeometry: Send {
    /// The target's main window bounds in screen coordinates, if known.
    fn window_bounds(&self) -> Option<Rect>;
}

/// A read-only view of the attached process.
///
/// Liveness must never be cached across frames: the scheduler calls
/// [`refresh`](TargetHandle::refresh) and then [`is_running`](TargetHandle::is_running)
/// exactly once per frame, and the process may vanish between any two calls.
pub trait TargetHandle: Send {
    /// Name of the attached process.
    fn process_name(&self) -> &str;

    /// Operating-system process id.
    fn pid(&self) -> u32;

    /// Re-reads whatever state the liveness and focus queries depend on.
    fn refresh(&mut self);

    /// Returns `true` while the process exists.
    fn is_running(&self) -> bool;

    /// Returns `true` while the process owns the foreground window.
    fn is_in_foreground(&self) -> bool;
}
