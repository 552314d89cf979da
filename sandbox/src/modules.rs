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


//! Demo modules: a crosshair and a tick-rate readout.

use tether_sdk::prelude::*;

/// Draws a crosshair in the middle of the overlay.
pub struct Crosshair {
    color: LinearRgba,
    arm: f32,
}

impl Crosshair {
    pub fn new(color: LinearRgba, arm: f32) -> Self {
        Self { color, arm }
    }
}

impl Module for Crosshair {
    fn name(&self) -> &str {
        "crosshair"
    }

    fn priority(&self) -> Priority {
        10
    }

    fn update(&mut self, frame: &mut FrameContext<'_>) -> anyhow::Result<()> {
        let Some(canvas) = frame.canvas() else {
            return Ok(());
        };
        let center = canvas.viewport_size() * 0.5;
        let (h, v) = (Vec2::new(self.arm, 0.0), Vec2::new(0.0, self.arm));
        canvas.draw_lines(
            self.color,
            &[center - h, center + h, center - v, center + v],
        );
        Ok(())
    }
}

/// Prints the effective tick rate and frame count in the top-left corner.
/// The backdrop turns opaque while the pointer is over it.
pub struct TickRateHud;

const HUD_BACKDROP: Rect = Rect::new(Vec2::new(4.0, 4.0), Vec2::new(180.0, 20.0));

impl Module for TickRateHud {
    fn name(&self) -> &str {
        "tick-rate-hud"
    }

    fn priority(&self) -> Priority {
        0
    }

    fn update(&mut self, frame: &mut FrameContext<'_>) -> anyhow::Result<()> {
        let text = format!(
            "{:.0} ticks/s  frame {}",
            frame.tick().ticks_per_second(),
            frame.tick().frame_index()
        );
        let alpha = if HUD_BACKDROP.contains(frame.input().mouse_position()) {
            1.0
        } else {
            0.5
        };
        if let Some(canvas) = frame.canvas() {
            canvas.fill_rect(
                LinearRgba::BLACK.with_alpha(alpha),
                HUD_BACKDROP.origin,
                HUD_BACKDROP.size,
            );
            canvas.draw_text(LinearRgba::YELLOW, Vec2::new(8.0, 6.0), 14.0, &text);
        }
        Ok(())
    }
}
