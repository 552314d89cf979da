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

//! Defines the error type shared by the attachment, clock, and scheduler layers.
//!
//! Losing the target process is not an error: it ends a run normally and is
//! reported as a stop reason instead.

use thiserror::Error;

/// A convenience alias for results carrying a [`TetherError`].
pub type TetherResult<T> = Result<T, TetherError>;

/// Errors surfaced to the caller of the attach, construction, and run APIs.
#[derive(Debug, Error)]
pub enum TetherError {
    /// The named process did not appear before the attach timeout elapsed.
    #[error("process '{process}' was not found within {timeout_ms} ms")]
    AttachmentTimeout {
        /// The process name that was searched for.
        process: String,
        /// The timeout that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// The frame clock was configured with an unusable rate.
    #[error("invalid clock configuration: {0}")]
    ClockMisconfiguration(String),

    /// A configuration value (other than the clock rate) is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A module returned an error from its update and the fault policy
    /// required the loop to stop.
    #[error("module '{module}' failed during update")]
    ModuleFault {
        /// The name of the failing module.
        module: String,
        /// The error returned by the module.
        #[source]
        source: anyhow::Error,
    },

    /// Constructing the initial module set on the first tick failed.
    #[error("module setup failed")]
    Setup(#[source] anyhow::Error),

    /// `run()` was called on a scheduler that already ran.
    #[error("scheduler has already run; create a new instance to run again")]
    NotRestartable,

    /// A platform collaborator could not complete a query.
    #[error("platform error: {0}")]
    Platform(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_timeout_message_names_process() {
        let err = TetherError::AttachmentTimeout {
            process: "game.exe".to_string(),
            timeout_ms: 0,
        };
        assert_eq!(err.to_string(), "process 'game.exe' was not found within 0 ms");
    }

    #[test]
    fn module_fault_keeps_source_chain() {
        let err = TetherError::ModuleFault {
            module: "esp".to_string(),
            source: anyhow::anyhow!("read failed"),
        };
        let source = std::error::Error::source(&err).expect("source should be kept");
        assert_eq!(source.to_string(), "read failed");
    }
}
