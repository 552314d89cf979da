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

//! Backend-agnostic input events and the per-frame input snapshot.
//!
//! Capture backends (window hooks, winit hosts, test harnesses) produce
//! [`InputEvent`]s. An input sampler folds them into an [`InputState`], which
//! is what modules read during a frame.

use crate::math::Vec2;
use std::collections::HashSet;

/// A single user input action in screen space.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A keyboard key was pressed.
    KeyPressed {
        /// A string representation of the physical key code.
        key_code: String,
    },
    /// A keyboard key was released.
    KeyReleased {
        /// A string representation of the physical key code.
        key_code: String,
    },
    /// A mouse button was pressed.
    MouseButtonPressed {
        /// The mouse button that was pressed.
        button: MouseButton,
    },
    /// A mouse button was released.
    MouseButtonReleased {
        /// The mouse button that was released.
        button: MouseButton,
    },
    /// The cursor moved to a new screen position.
    MouseMoved {
        /// The new x-coordinate of the cursor.
        x: f32,
        /// The new y-coordinate of the cursor.
        y: f32,
    },
    /// The mouse wheel was scrolled.
    MouseWheelScrolled {
        /// The horizontal scroll delta.
        delta_x: f32,
        /// The vertical scroll delta.
        delta_y: f32,
    },
}

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The left mouse button.
    Left,
    /// The right mouse button.
    Right,
    /// The middle mouse button.
    Middle,
    /// The back side button.
    Back,
    /// The forward side button.
    Forward,
    /// Another mouse button, identified by a numeric code.
    Other(u16),
}

/// The captured input state as of the last sample.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    mouse_position: Vec2,
    wheel_delta: Vec2,
    keys_down: HashSet<String>,
    buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Creates an empty state with the pointer at the screen origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer position, in screen coordinates.
    #[inline]
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Wheel movement accumulated during the last sample.
    #[inline]
    pub fn wheel_delta(&self) -> Vec2 {
        self.wheel_delta
    }

    /// Returns `true` while `key_code` is held.
    pub fn is_key_down(&self, key_code: &str) -> bool {
        self.keys_down.contains(key_code)
    }

    /// Returns `true` while `button` is held.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Starts a new sample: per-sample deltas are reset, held state is kept.
    pub fn begin_sample(&mut self) {
        self.wheel_delta = Vec2::ZERO;
    }

    /// Folds one event into the state.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyPressed { key_code } => {
                self.keys_down.insert(key_code.clone());
            }
            InputEvent::KeyReleased { key_code } => {
                self.keys_down.remove(key_code);
            }
            InputEvent::MouseButtonPressed { button } => {
                self.buttons_down.insert(*button);
            }
            InputEvent::MouseButtonReleased { button } => {
                self.buttons_down.remove(button);
            }
            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = Vec2::new(*x, *y);
            }
            InputEvent::MouseWheelScrolled { delta_x, delta_y } => {
                self.wheel_delta += Vec2::new(*delta_x, *delta_y);
            }
        }
    }
}
