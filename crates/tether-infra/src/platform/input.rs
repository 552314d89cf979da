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


//! Input capture fed over a channel, plus `winit` event translation for hosts
//! that own a window.

use tether_core::event::EventBus;
use tether_core::platform::InputSampler;
use tether_core::{InputEvent, InputState, MouseButton};
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

/// An [`InputSampler`] whose events are published from anywhere.
///
/// Capture hooks or a window host push [`InputEvent`]s through
/// [`sender`](Self::sender); each [`update`](InputSampler::update) folds
/// everything received since the previous one into the sampled state.
#[derive(Debug, Default)]
pub struct ChannelInputSampler {
    bus: EventBus<InputEvent>,
    state: InputState,
}

impl ChannelInputSampler {
    /// Creates a sampler with an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle for producers. Cloneable and usable from any thread.
    pub fn sender(&self) -> flume::Sender<InputEvent> {
        self.bus.sender()
    }

    /// Events received but not yet folded into the state.
    pub fn pending(&self) -> usize {
        self.bus.pending()
    }
}

impl InputSampler for ChannelInputSampler {
    fn update(&mut self) {
        self.state.begin_sample();
        let mut applied = 0usize;
        for event in self.bus.drain() {
            self.state.apply(&event);
            applied += 1;
        }
        if applied > 0 {
            log::trace!("ChannelInputSampler: Applied {} event(s)", applied);
        }
    }

    fn state(&self) -> &InputState {
        &self.state
    }
}

/// Converts a `winit` window event into an [`InputEvent`].
///
/// Window management events (resize, focus, close) and key auto-repeat are
/// not input and yield `None`, as does a scroll with no movement.
pub fn translate_winit_input(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            let PhysicalKey::Code(code) = event.physical_key else {
                return None;
            };
            let key_code = format!("{code:?}");
            match event.state {
                ElementState::Pressed if event.repeat => None,
                ElementState::Pressed => Some(InputEvent::KeyPressed { key_code }),
                ElementState::Released => Some(InputEvent::KeyReleased { key_code }),
            }
        }
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::MouseMoved {
            x: position.x as f32,
            y: position.y as f32,
        }),
        WindowEvent::MouseInput { state, button, .. } => {
            let button = button_from_winit(*button);
            Some(match state {
                ElementState::Pressed => InputEvent::MouseButtonPressed { button },
                ElementState::Released => InputEvent::MouseButtonReleased { button },
            })
        }
        WindowEvent::MouseWheel { delta, .. } => {
            let (delta_x, delta_y) = match delta {
                MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                MouseScrollDelta::PixelDelta(p) => (p.x as f32, p.y as f32),
            };
            (delta_x != 0.0 || delta_y != 0.0)
                .then_some(InputEvent::MouseWheelScrolled { delta_x, delta_y })
        }
        _ => None,
    }
}

fn button_from_winit(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(id) => MouseButton::Other(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tether_core::math::Vec2;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::{DeviceId, TouchPhase};

    #[test]
    fn sampler_applies_events_from_other_threads_on_update() {
        let mut sampler = ChannelInputSampler::new();
        let sender = sampler.sender();

        thread::spawn(move || {
            sender
                .send(InputEvent::MouseMoved { x: 12.0, y: 34.0 })
                .unwrap();
            sender
                .send(InputEvent::KeyPressed {
                    key_code: "KeyF".to_string(),
                })
                .unwrap();
        })
        .join()
        .unwrap();

        assert_eq!(sampler.pending(), 2);
        assert_eq!(sampler.mouse_position(), Vec2::ZERO, "nothing applied yet");

        sampler.update();
        assert_eq!(sampler.pending(), 0);
        assert_eq!(sampler.mouse_position(), Vec2::new(12.0, 34.0));
        assert!(sampler.state().is_key_down("KeyF"));
    }

    #[test]
    fn wheel_delta_lasts_one_sample() {
        let mut sampler = ChannelInputSampler::new();
        sampler
            .sender()
            .send(InputEvent::MouseWheelScrolled {
                delta_x: 0.0,
                delta_y: 1.0,
            })
            .unwrap();

        sampler.update();
        assert_eq!(sampler.state().wheel_delta(), Vec2::new(0.0, 1.0));
        sampler.update();
        assert_eq!(sampler.state().wheel_delta(), Vec2::ZERO);
    }

    #[test]
    fn cursor_and_buttons_translate() {
        let moved = WindowEvent::CursorMoved {
            device_id: DeviceId::dummy(),
            position: PhysicalPosition::new(100.5, 200.75),
        };
        assert_eq!(
            translate_winit_input(&moved),
            Some(InputEvent::MouseMoved {
                x: 100.5,
                y: 200.75
            })
        );

        let pressed = WindowEvent::MouseInput {
            device_id: DeviceId::dummy(),
            state: ElementState::Pressed,
            button: WinitMouseButton::Other(9),
        };
        assert_eq!(
            translate_winit_input(&pressed),
            Some(InputEvent::MouseButtonPressed {
                button: MouseButton::Other(9)
            })
        );
    }

    #[test]
    fn still_wheel_is_dropped() {
        let still = WindowEvent::MouseWheel {
            device_id: DeviceId::dummy(),
            delta: MouseScrollDelta::LineDelta(0.0, 0.0),
            phase: TouchPhase::Moved,
        };
        assert_eq!(translate_winit_input(&still), None);

        let pixels = WindowEvent::MouseWheel {
            device_id: DeviceId::dummy(),
            delta: MouseScrollDelta::PixelDelta(PhysicalPosition::new(5.5, -10.0)),
            phase: TouchPhase::Moved,
        };
        assert_eq!(
            translate_winit_input(&pixels),
            Some(InputEvent::MouseWheelScrolled {
                delta_x: 5.5,
                delta_y: -10.0
            })
        );
    }

    #[test]
    fn window_management_is_not_input() {
        assert_eq!(
            translate_winit_input(&WindowEvent::Resized(PhysicalSize::new(640, 480))),
            None
        );
        assert_eq!(translate_winit_input(&WindowEvent::Focused(false)), None);
    }
}
