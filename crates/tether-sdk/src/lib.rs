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


//! The public-facing API for Tether.
//!
//! Describe the target in a [`HackConfig`], implement [`Hack`] to set up your
//! modules, then [`attach`] and run the returned [`Session`].

pub mod config;
pub mod session;

pub use config::HackConfig;
pub use session::{attach, Session};

pub use tether_control::{FaultPolicy, Hack, ModuleRegistry, RunSummary, StopReason};
pub use tether_core::{TetherError, TetherResult};
pub use tether_telemetry::FrameStats;

/// The types most module and application code needs.
pub mod prelude {
    pub use crate::{attach, HackConfig, Session};
    pub use tether_control::{FaultPolicy, Hack, ModuleRegistry, RunSummary, StopReason};
    pub use tether_core::math::{LinearRgba, Rect, Vec2};
    pub use tether_core::renderer::{Canvas, DrawCommand, DrawList};
    pub use tether_core::{
        FrameContext, InputEvent, InputState, Module, ModuleCommands, ModuleId, MouseButton, Priority,
        TetherError, TetherResult, TickEvent,
    };
}
