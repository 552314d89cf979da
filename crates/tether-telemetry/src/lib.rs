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

//! Telemetry for the frame loop: effective tick rate, per-stage counters, and
//! a service that logs a summary at a fixed interval.

#![warn(missing_docs)]

pub mod frame_stats;
pub mod metrics;
pub mod service;

pub use frame_stats::FrameStats;
pub use metrics::TickRateMeter;
pub use service::TelemetryService;
