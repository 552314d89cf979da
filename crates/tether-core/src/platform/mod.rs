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

//! Abstractions over the collaborators the scheduler drives.
//!
//! The scheduler never talks to the operating system directly. It sees the
//! attached process through [`TargetHandle`], captures input through
//! [`InputSampler`], and draws through [`OverlaySurface`]. Concrete
//! implementations live in `tether-infra`; tests provide fakes.

pub mod input;
pub mod overlay;
pub mod target;

pub use input::InputSampler;
pub use overlay::OverlaySurface;
pub use target::{AttachTimeout, TargetHandle, WindowGeometry};
