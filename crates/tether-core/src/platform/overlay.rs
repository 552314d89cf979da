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

use crate::math::{LinearRgba, Vec2};
use crate::renderer::Canvas;
use std::time::Duration;

/// A transparent surface laid over the target's window.
///
/// Per frame the scheduler calls, in order: [`update`](OverlaySurface::update),
/// [`clear`](OverlaySurface::clear), zero or more module draws through
/// [`canvas`](OverlaySurface::canvas), then [`present`](OverlaySurface::present).
pub trait OverlaySurface: Send {
    /// Screen position of the overlay's top-left corner.
    fn location(&self) -> Vec2;

    /// Advances internal state. `local_pointer` is already translated into
    /// overlay coordinates.
    fn update(&mut self, elapsed: Duration, local_pointer: Vec2);

    /// Discards everything drawn so far and fills the surface with `color`.
    fn clear(&mut self, color: LinearRgba);

    /// The drawing surface for the frame in progress.
    fn canvas(&mut self) -> &mut dyn Canvas;

    /// Makes the frame's accumulated drawing visible.
    fn present(&mut self);

    /// Releases the surface once the loop has stopped.
    fn close(&mut self) {}
}
