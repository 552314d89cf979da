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


//! Concrete implementations of the collaborator contracts declared in
//! `tether-core`: process discovery and liveness through `sysinfo`, window
//! focus and geometry through Win32, input fed over a channel, and an overlay
//! that buffers each frame's drawing for a host renderer.

#![warn(missing_docs)]

pub mod overlay;
pub mod platform;

pub use overlay::{BufferedOverlay, FrameSlot, PresentedFrame};
pub use platform::input::{translate_winit_input, ChannelInputSampler};
pub use platform::process::SysinfoTarget;
pub use platform::window::WindowLocator;
