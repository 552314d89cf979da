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

//! Screen-space math primitives used by input, overlay geometry, and drawing.
//!
//! Everything here is 2D: positions are in pixels, with the origin at the
//! top-left corner of either the screen or the overlay, depending on context.

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

pub mod color;
pub mod vector;

pub use self::color::LinearRgba;
pub use self::vector::Vec2;

/// An axis-aligned screen rectangle, e.g. a window's outer bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// The top-left corner.
    pub origin: Vec2,
    /// The width and height.
    pub size: Vec2,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from left/top/right/bottom edges.
    #[inline]
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new((right - left).max(0.0), (bottom - top).max(0.0)),
        }
    }

    /// Returns `true` if `point` lies inside the rectangle (edges inclusive).
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x <= self.origin.x + self.size.x
            && point.y <= self.origin.y + self.size.y
    }

    /// The centre of the rectangle.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_from_edges_clamps_negative_size() {
        let rect = Rect::from_edges(10.0, 10.0, 5.0, 30.0);
        assert_eq!(rect.size, Vec2::new(0.0, 20.0));
    }

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains(Vec2::new(10.1, 5.0)));
        assert_eq!(rect.center(), Vec2::new(5.0, 5.0));
    }
}
