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


//! `sysinfo`-based implementation of the `TargetHandle` trait.

use crate::platform::window::WindowLocator;
use std::thread;
use std::time::{Duration, Instant};
use sysinfo::{Pid, ProcessStatus, ProcessesToUpdate, System};
use tether_core::platform::{AttachTimeout, TargetHandle};
use tether_core::{TetherError, TetherResult};

/// How often [`SysinfoTarget::wait_for_process`] rescans the process table.
pub const ATTACH_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A running process found by name, observed through `sysinfo`.
pub struct SysinfoTarget {
    name: String,
    pid: Pid,
    system: System,
    running: bool,
    window: WindowLocator,
}

impl SysinfoTarget {
    /// Blocks until a process called `name` exists, polling every
    /// [`ATTACH_POLL_INTERVAL`].
    ///
    /// Names compare case-insensitively and ignore a trailing `.exe`, so
    /// `"notepad"` finds `notepad.exe`.
    ///
    /// # Errors
    /// Returns [`TetherError::AttachmentTimeout`] once `timeout` elapses. A
    /// zero timeout scans exactly once.
    pub fn wait_for_process(name: &str, timeout: AttachTimeout) -> TetherResult<Self> {
        Self::wait_for_process_every(name, timeout, ATTACH_POLL_INTERVAL)
    }

    /// [`wait_for_process`](Self::wait_for_process) with a custom poll interval.
    pub fn wait_for_process_every(
        name: &str,
        timeout: AttachTimeout,
        poll_interval: Duration,
    ) -> TetherResult<Self> {
        log::info!("Waiting for process '{}' ({:?})...", name, timeout);
        let started = Instant::now();
        let mut system = System::new();

        loop {
            system.refresh_processes(ProcessesToUpdate::All, true);
            if let Some(pid) = find_by_name(&system, name) {
                log::info!("Attached to '{}' (pid {})", name, pid);
                return Ok(Self::from_parts(name.to_string(), pid, system));
            }

            let wait = match timeout {
                AttachTimeout::Indefinite => poll_interval,
                AttachTimeout::After(limit) => {
                    let waited = started.elapsed();
                    if waited >= limit {
                        log::warn!(
                            "Process '{}' did not appear within {} ms",
                            name,
                            limit.as_millis()
                        );
                        return Err(TetherError::AttachmentTimeout {
                            process: name.to_string(),
                            timeout_ms: limit.as_millis() as u64,
                        });
                    }
                    poll_interval.min(limit - waited)
                }
            };
            thread::sleep(wait);
        }
    }

    /// Attaches to a known process id.
    ///
    /// # Errors
    /// Returns [`TetherError::Platform`] if no such process exists.
    pub fn from_pid(pid: u32) -> TetherResult<Self> {
        let pid = Pid::from_u32(pid);
        let mut system = System::new();
        system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        let name = system
            .process(pid)
            .map(|p| p.name().to_string_lossy().into_owned())
            .ok_or_else(|| TetherError::Platform(format!("no process with pid {pid}")))?;
        log::info!("Attached to '{}' (pid {})", name, pid);
        Ok(Self::from_parts(name, pid, system))
    }

    fn from_parts(name: String, pid: Pid, system: System) -> Self {
        let mut target = Self {
            name,
            pid,
            system,
            running: true,
            window: WindowLocator::new(pid.as_u32()),
        };
        target.running = target.query_alive();
        target
    }

    /// The window locator for this process, usable as overlay geometry.
    pub fn window(&self) -> WindowLocator {
        self.window
    }

    fn query_alive(&self) -> bool {
        self.system
            .process(self.pid)
            .is_some_and(|p| !matches!(p.status(), ProcessStatus::Zombie | ProcessStatus::Dead))
    }
}

impl TargetHandle for SysinfoTarget {
    fn process_name(&self) -> &str {
        &self.name
    }

    fn pid(&self) -> u32 {
        self.pid.as_u32()
    }

    fn refresh(&mut self) {
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);
        self.running = self.query_alive();
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn is_in_foreground(&self) -> bool {
        self.running && self.window.is_foreground()
    }
}

fn find_by_name(system: &System, wanted: &str) -> Option<Pid> {
    system
        .processes()
        .values()
        .filter(|p| !matches!(p.status(), ProcessStatus::Zombie | ProcessStatus::Dead))
        .find(|p| names_match(&p.name().to_string_lossy(), wanted))
        .map(|p| p.pid())
}

/// Case-insensitive comparison ignoring a trailing `.exe` on either side.
fn names_match(candidate: &str, wanted: &str) -> bool {
    fn stem(name: &str) -> &str {
        let len = name.len();
        if len > 4 && name.is_char_boundary(len - 4) && name[len - 4..].eq_ignore_ascii_case(".exe")
        {
            &name[..len - 4]
        } else {
            name
        }
    }
    stem(candidate).eq_ignore_ascii_case(stem(wanted))
}
