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


//! An attached target together with the scheduler that drives it.

use crate::config::HackConfig;
use tether_control::{Hack, ModuleRegistry, RunSummary, Scheduler, SchedulerBuilder};
use tether_core::platform::{TargetHandle, WindowGeometry};
use tether_core::{InputEvent, TetherResult};
use tether_infra::{BufferedOverlay, ChannelInputSampler, FrameSlot, SysinfoTarget};

/// Waits for the configured process, then builds a [`Session`] over it.
///
/// The configuration is validated first, so a bad tick rate fails before any
/// waiting happens.
///
/// # Errors
/// * [`TetherError::ClockMisconfiguration`] or [`TetherError::InvalidConfig`]
///   from [`HackConfig::validate`].
/// * [`TetherError::AttachmentTimeout`] if the process did not appear in time.
///
/// [`TetherError::ClockMisconfiguration`]: tether_core::TetherError::ClockMisconfiguration
/// [`TetherError::InvalidConfig`]: tether_core::TetherError::InvalidConfig
/// [`TetherError::AttachmentTimeout`]: tether_core::TetherError::AttachmentTimeout
pub fn attach<H: Hack>(config: &HackConfig, hack: H) -> TetherResult<Session<H>> {
    config.validate()?;
    let target = SysinfoTarget::wait_for_process(&config.process_name, config.attach_timeout())?;
    let window = target.window();
    Session::with_target(config, hack, Box::new(target), Some(Box::new(window)))
}

/// A ready-to-run frame loop over one target.
pub struct Session<H: Hack> {
    scheduler: Scheduler<H>,
    input: flume::Sender<InputEvent>,
    frames: Option<FrameSlot>,
}

impl<H: Hack> Session<H> {
    /// Builds a session over an already attached target.
    ///
    /// Input is fed through [`input_sender`](Self::input_sender). When the
    /// configuration asks for an overlay, it follows `geometry` if given.
    pub fn with_target(
        config: &HackConfig,
        hack: H,
        target: Box<dyn TargetHandle>,
        geometry: Option<Box<dyn WindowGeometry>>,
    ) -> TetherResult<Self> {
        config.validate()?;
        let input = ChannelInputSampler::new();
        let sender = input.sender();

        let mut builder = SchedulerBuilder::new(hack, target, Box::new(input))
            .with_tick_rate(config.tick_rate)
            .with_limit_frames(config.limit_frames)
            .with_fault_policy(config.fault_policy)
            .with_background(config.background)
            .with_telemetry_interval(config.telemetry_interval());

        let mut frames = None;
        if config.create_overlay {
            let overlay = match geometry {
                Some(geometry) => BufferedOverlay::tracking(geometry),
                None => BufferedOverlay::new(tether_core::math::Vec2::ZERO),
            };
            frames = Some(overlay.frames());
            builder = builder.with_overlay(Box::new(overlay));
        }

        let scheduler = builder.build()?;
        log::info!(
            "Session: Ready for '{}' (overlay={}, {} ticks/s)",
            config.process_name,
            frames.is_some(),
            config.tick_rate
        );
        Ok(Self {
            scheduler,
            input: sender,
            frames,
        })
    }

    /// Runs the frame loop until the target goes away or a module stops it.
    /// See [`Scheduler::run`].
    pub fn run(&mut self) -> TetherResult<RunSummary> {
        self.scheduler.run()
    }

    /// A sender for input events, usable from any thread.
    pub fn input_sender(&self) -> flume::Sender<InputEvent> {
        self.input.clone()
    }

    /// The presented-frame handle, if an overlay was created.
    pub fn frames(&self) -> Option<FrameSlot> {
        self.frames.clone()
    }

    /// The module registry, for registering modules before the run.
    pub fn modules_mut(&mut self) -> &mut ModuleRegistry {
        self.scheduler.modules_mut()
    }

    /// The underlying scheduler.
    pub fn scheduler(&self) -> &Scheduler<H> {
        &self.scheduler
    }
}
