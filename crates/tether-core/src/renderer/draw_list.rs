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

//! A retained list of draw calls for one overlay frame.

use super::canvas::Canvas;
use crate::math::{LinearRgba, Vec2};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A set of independent line segments.
    Lines {
        /// Stroke color.
        color: LinearRgba,
        /// Segment endpoints, two per segment.
        points: Vec<Vec2>,
    },
    /// A filled rectangle.
    FillRect {
        /// Fill color.
        color: LinearRgba,
        /// Top-left corner.
        location: Vec2,
        /// Width and height.
        size: Vec2,
    },
    /// A rectangle outline.
    StrokeRect {
        /// Stroke color.
        color: LinearRgba,
        /// Top-left corner.
        location: Vec2,
        /// Width and height.
        size: Vec2,
    },
    /// A line of text.
    Text {
        /// Text color.
        color: LinearRgba,
        /// Top-left corner of the text box.
        location: Vec2,
        /// Glyph height in pixels.
        height: f32,
        /// The text itself.
        text: String,
    },
}

/// Draw calls accumulated between a clear and a present.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    viewport: Vec2,
    clear_color: LinearRgba,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Creates an empty list for a viewport of the given size.
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            clear_color: LinearRgba::TRANSPARENT,
            commands: Vec::new(),
        }
    }

    /// Drops every recorded command and sets the background for the new frame.
    pub fn clear(&mut self, color: LinearRgba) {
        self.commands.clear();
        self.clear_color = color;
    }

    /// Updates the viewport size, e.g. after the tracked window was resized.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Background color the frame was cleared to.
    pub fn clear_color(&self) -> LinearRgba {
        self.clear_color
    }

    /// Recorded commands in submission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if nothing has been drawn since the last clear.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for DrawList {
    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    fn draw_line(&mut self, color: LinearRgba, from: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::Lines {
            color,
            points: vec![from, to],
        });
    }

    fn draw_lines(&mut self, color: LinearRgba, points: &[Vec2]) {
        let paired = points.len() - points.len() % 2;
        if paired == 0 {
            return;
        }
        if paired != points.len() {
            log::trace!("draw_lines: ignoring unpaired trailing point");
        }
        self.commands.push(DrawCommand::Lines {
            color,
            points: points[..paired].to_vec(),
        });
    }

    fn fill_rect(&mut self, color: LinearRgba, location: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::FillRect {
            color,
            location,
            size,
        });
    }

    fn draw_rect(&mut self, color: LinearRgba, location: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::StrokeRect {
            color,
            location,
            size,
        });
    }

    fn draw_text(&mut self, color: LinearRgba, location: Vec2, height: f32, text: &str) {
        if text.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Text {
            color,
            location,
            height,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_drops_previous_frame() {
        let mut list = DrawList::new(Vec2::new(800.0, 600.0));
        list.fill_rect(LinearRgba::RED, Vec2::ZERO, Vec2::ONE);
        list.clear(LinearRgba::BLACK);
        assert!(list.is_empty());
        assert_eq!(list.clear_color(), LinearRgba::BLACK);
    }

    #[test]
    fn draw_lines_drops_unpaired_point() {
        let mut list = DrawList::new(Vec2::ZERO);
        list.draw_lines(
            LinearRgba::GREEN,
            &[Vec2::ZERO, Vec2::ONE, Vec2::new(2.0, 2.0)],
        );
        list.draw_lines(LinearRgba::GREEN, &[Vec2::ZERO]);
        assert_eq!(
            list.commands(),
            &[DrawCommand::Lines {
                color: LinearRgba::GREEN,
                points: vec![Vec2::ZERO, Vec2::ONE],
            }]
        );
    }

    #[test]
    fn commands_keep_submission_order() {
        let mut list = DrawList::new(Vec2::ZERO);
        list.draw_rect(LinearRgba::RED, Vec2::ZERO, Vec2::ONE);
        list.draw_text(LinearRgba::WHITE, Vec2::ZERO, 12.0, "fps");
        list.draw_text(LinearRgba::WHITE, Vec2::ZERO, 12.0, "");
        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::StrokeRect { .. }));
        assert!(matches!(list.commands()[1], DrawCommand::Text { .. }));
    }
}
