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

/// Drawing operations available to modules, in overlay-local pixels.
///
/// Calls are composited in the order they are made: whatever a later module
/// draws ends up on top of what an earlier one drew.
pub trait Canvas {
    /// Size of the drawable area.
    fn viewport_size(&self) -> Vec2;

    /// Draws a single line segment.
    fn draw_line(&mut self, color: LinearRgba, from: Vec2, to: Vec2);

    /// Draws a list of independent segments; `points` is consumed in pairs.
    fn draw_lines(&mut self, color: LinearRgba, points: &[Vec2]);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, color: LinearRgba, location: Vec2, size: Vec2);

    /// Outlines an axis-aligned rectangle.
    fn draw_rect(&mut self, color: LinearRgba, location: Vec2, size: Vec2);

    /// Draws a single line of text with its top-left corner at `location`.
    fn draw_text(&mut self, color: LinearRgba, location: Vec2, height: f32, text: &str);
}
