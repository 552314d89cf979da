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

//! Defines the `LinearRgba` color type used for overlay clears and draw calls.

use serde::{Deserialize, Serialize};

/// Represents a color in a **linear RGBA** color space using `f32` components.
///
/// The overlay is composited over another application's window, so the
/// clear color is almost always [`LinearRgba::TRANSPARENT`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRgba {
    /// The red component in linear space.
    pub r: f32,
    /// The green component in linear space.
    pub g: f32,
    /// The blue component in linear space.
    pub b: f32,
    /// The alpha (opacity) component.
    pub a: f32,
}

impl LinearRgba {
    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new `LinearRgba` with explicit RGBA values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `LinearRgba` (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub fn with_alpha(&self, a: f32) -> Self {
        Self { a, ..*self }
    }

    /// Parses an sRGB hex string (`#RRGGBB` or `#RRGGBBAA`).
    ///
    /// Returns `None` for anything that is not 6 or 8 hex digits.
    pub fn try_from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        let a = if hex.len() == 8 { channel(6..8)? } else { 1.0 };
        Some(Self {
            r: srgb_to_linear(channel(0..2)?),
            g: srgb_to_linear(channel(2..4)?),
            b: srgb_to_linear(channel(4..6)?),
            a,
        })
    }

    /// Converts to 8-bit sRGB channels, the format window hosts upload.
    pub fn to_srgba8(&self) -> [u8; 4] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(linear_to_srgb(self.r)),
            quantize(linear_to_srgb(self.g)),
            quantize(linear_to_srgb(self.b)),
            quantize(self.a),
        ]
    }
}

impl Default for LinearRgba {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn hex_round_trips_through_srgba8() {
        let color = LinearRgba::try_from_hex("#6495ED80").expect("valid hex");
        assert_eq!(color.to_srgba8(), [0x64, 0x95, 0xED, 0x80]);
    }

    #[test]
    fn hex_without_alpha_is_opaque() {
        let color = LinearRgba::try_from_hex("FFFFFF").expect("valid hex");
        assert_abs_diff_eq!(color.r, 1.0);
        assert_abs_diff_eq!(color.a, 1.0);
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(LinearRgba::try_from_hex("#12345").is_none());
        assert!(LinearRgba::try_from_hex("#GG0000").is_none());
    }

    #[test]
    fn default_is_transparent() {
        assert_eq!(LinearRgba::default(), LinearRgba::TRANSPARENT);
    }
}
