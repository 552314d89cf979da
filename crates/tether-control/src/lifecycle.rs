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


//! Scheduler lifecycle: `Created -> Looping{Uninitialized -> Initialized} -> Stopped`.

use tether_core::{TetherError, TetherResult};

/// One-shot gate consumed on the first tick that finds the target alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    /// Modules have not been set up yet.
    Uninitialized,
    /// Module setup has run.
    Initialized,
}

/// Where a scheduler is in its single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// Built but never run.
    #[default]
    Created,
    /// Inside `run()`.
    Looping(InitState),
    /// The run has ended. Terminal.
    Stopped,
}

impl LifecycleState {
    /// `Created -> Looping(Uninitialized)`. Any other starting state means the
    /// scheduler already ran.
    pub fn begin_run(&mut self) -> TetherResult<()> {
        match self {
            LifecycleState::Created => {
                *self = LifecycleState::Looping(InitState::Uninitialized);
                Ok(())
            }
            LifecycleState::Looping(_) | LifecycleState::Stopped => {
                Err(TetherError::NotRestartable)
            }
        }
    }

    /// Consumes the init gate. Returns `true` exactly once per run.
    pub fn take_init(&mut self) -> bool {
        if *self == LifecycleState::Looping(InitState::Uninitialized) {
            *self = LifecycleState::Looping(InitState::Initialized);
            true
        } else {
            false
        }
    }

    /// Moves to the terminal state.
    pub fn finish(&mut self) {
        *self = LifecycleState::Stopped;
    }

    /// Returns `true` once the run has ended.
    pub fn is_stopped(&self) -> bool {
        matches!(self, LifecycleState::Stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_gate_fires_once() {
        let mut state = LifecycleState::default();
        assert!(!state.take_init(), "gate is closed before the run starts");

        state.begin_run().unwrap();
        assert!(state.take_init());
        assert!(!state.take_init());
        assert_eq!(state, LifecycleState::Looping(InitState::Initialized));
    }

    #[test]
    fn stopped_is_terminal() {
        let mut state = LifecycleState::default();
        state.begin_run().unwrap();
        state.finish();

        assert!(state.is_stopped());
        assert!(matches!(state.begin_run(), Err(TetherError::NotRestartable)));
        assert!(!state.take_init());
    }

    #[test]
    fn begin_run_twice_is_rejected() {
        let mut state = LifecycleState::default();
        state.begin_run().unwrap();
        assert!(matches!(state.begin_run(), Err(TetherError::NotRestartable)));
    }
}
