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

use crate::input::InputState;
use crate::math::Vec2;

/// Captures pointer and keyboard state on demand.
pub trait InputSampler: Send {
    /// Refreshes the captured state. Called at most once per frame, before
    /// any module reads input.
    fn update(&mut self);

    /// The state captured by the last [`update`](InputSampler::update).
    fn state(&self) -> &InputState;

    /// Pointer position in screen coordinates.
    fn mouse_position(&self) -> Vec2 {
        self.state().mouse_position()
    }
}
