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

//! # Tether Core
//!
//! Foundational crate containing the contracts every other Tether crate builds
//! on: the per-frame [`TickEvent`], the [`Module`] trait and its
//! [`FrameContext`], the collaborator traits the scheduler consumes
//! ([`platform`]), the drawing surface handed to modules ([`renderer`]), and
//! the shared error type.

#![warn(missing_docs)]

pub mod error;
pub mod event;
pub mod input;
pub mod math;
pub mod module;
pub mod platform;
pub mod renderer;
pub mod tick;
pub mod utils;

pub use error::{TetherError, TetherResult};
pub use input::{InputEvent, InputState, MouseButton};
pub use module::{FrameContext, Module, ModuleCommand, ModuleCommands, ModuleId, Priority};
pub use tick::TickEvent;
pub use utils::timer::Stopwatch;
