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


//! What the scheduler does when a module's update returns an error.

use serde::{Deserialize, Serialize};

/// Policy applied to errors returned from [`Module::update`].
///
/// Either way the fault is logged at `error` level with the module name.
///
/// [`Module::update`]: tether_core::Module::update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaultPolicy {
    /// Abort the frame and end the run with [`TetherError::ModuleFault`].
    /// The after-run hook and teardown still happen.
    ///
    /// [`TetherError::ModuleFault`]: tether_core::TetherError::ModuleFault
    #[default]
    Propagate,
    /// Count the fault and carry on with the remaining modules of the frame.
    Isolate,
}
