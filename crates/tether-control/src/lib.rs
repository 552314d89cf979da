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


//! The control layer: pacing, module ordering, and the per-frame protocol that
//! binds a target process, an input sampler, and an overlay to a set of
//! modules.

#![warn(missing_docs)]

pub mod clock;
pub mod fault;
pub mod lifecycle;
pub mod registry;
pub mod scheduler;

pub use clock::{ClockHandler, FrameClock};
pub use fault::FaultPolicy;
pub use lifecycle::{InitState, LifecycleState};
pub use registry::ModuleRegistry;
pub use scheduler::{Hack, RunSummary, Scheduler, SchedulerBuilder, StopReason};
