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


//! The scheduler: binds clock ticks to the per-frame protocol.
//!
//! Every frame runs the same stages in the same order:
//!
//! 1. liveness gate (refresh + query the target, stop cleanly if it is gone),
//! 2. first-tick module setup,
//! 3. input sampling, if [`Hack::should_sample_input`] allows it,
//! 4. overlay update and clear,
//! 5. the module pass in descending priority, if [`Hack::should_run_modules`]
//!    allows it,
//! 6. overlay present.
//!
//! Once a stage sets the stop flag, no later stage of the frame runs and no
//! further frame starts. A hung module hangs the loop; there is no per-module
//! timeout.

use crate::clock::{ClockHandler, FrameClock};
use crate::fault::FaultPolicy;
use crate::lifecycle::LifecycleState;
use crate::registry::ModuleRegistry;
use std::fmt;
use std::time::Duration;
use tether_core::math::LinearRgba;
use tether_core::platform::{InputSampler, OverlaySurface, TargetHandle};
use tether_core::{FrameContext, ModuleCommand, ModuleCommands, TetherError, TetherResult, TickEvent};
use tether_telemetry::{FrameStats, TelemetryService};

/// Application hooks around the frame loop.
///
/// Only [`setup_modules`](Hack::setup_modules) is required; the gates and the
/// run notifications have defaults.
pub trait Hack {
    /// Builds the initial module set. Runs exactly once, on the first tick that
    /// finds the target alive, before any module update.
    fn setup_modules(&mut self, modules: &mut ModuleRegistry) -> anyhow::Result<()>;

    /// Whether input is sampled this frame.
    fn should_sample_input(&self, _target: &dyn TargetHandle) -> bool {
        true
    }

    /// Whether the module pass runs this frame. Defaults to "the target window
    /// has focus".
    fn should_run_modules(&self, target: &dyn TargetHandle) -> bool {
        target.is_in_foreground()
    }

    /// Called once before the first tick.
    fn before_run(&mut self) {}

    /// Called once after the last tick, whatever ended the run.
    fn after_run(&mut self) {}
}

/// Why a run ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The target process went away.
    TargetLost,
    /// A module set the stop flag.
    Requested,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::TargetLost => write!(f, "target lost"),
            StopReason::Requested => write!(f, "stop requested"),
        }
    }
}

/// Outcome of a successful [`Scheduler::run`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// What ended the run.
    pub stop_reason: StopReason,
    /// Frames that passed the liveness gate and finished.
    pub frames_completed: u64,
    /// Per-stage counters for the whole run.
    pub stats: FrameStats,
    /// Effective tick rate near the end of the run.
    pub ticks_per_second: f64,
}

/// Builder for [`Scheduler`].
pub struct SchedulerBuilder<H: Hack> {
    hack: H,
    target: Box<dyn TargetHandle>,
    input: Box<dyn InputSampler>,
    overlay: Option<Box<dyn OverlaySurface>>,
    tick_rate: u32,
    limit_frames: bool,
    fault_policy: FaultPolicy,
    background: LinearRgba,
    telemetry_interval: Duration,
}

impl<H: Hack> SchedulerBuilder<H> {
    /// Starts a builder with the default pacing (60 ticks/s, limited), no
    /// overlay, and the default fault policy.
    pub fn new(hack: H, target: Box<dyn TargetHandle>, input: Box<dyn InputSampler>) -> Self {
        Self {
            hack,
            target,
            input,
            overlay: None,
            tick_rate: 60,
            limit_frames: true,
            fault_policy: FaultPolicy::default(),
            background: LinearRgba::TRANSPARENT,
            telemetry_interval: Duration::from_secs(1),
        }
    }

    /// Attaches an overlay. Without one, the overlay stages are skipped and
    /// modules get no canvas.
    pub fn with_overlay(mut self, overlay: Box<dyn OverlaySurface>) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// Sets the target tick rate.
    pub fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Turns hard frame limiting on or off.
    pub fn with_limit_frames(mut self, limit_frames: bool) -> Self {
        self.limit_frames = limit_frames;
        self
    }

    /// Sets the module fault policy.
    pub fn with_fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.fault_policy = policy;
        self
    }

    /// Sets the color the overlay is cleared to every frame.
    pub fn with_background(mut self, background: LinearRgba) -> Self {
        self.background = background;
        self
    }

    /// Sets the telemetry summary interval. Zero disables the summary.
    pub fn with_telemetry_interval(mut self, interval: Duration) -> Self {
        self.telemetry_interval = interval;
        self
    }

    /// Builds the scheduler.
    ///
    /// # Errors
    /// Returns [`TetherError::ClockMisconfiguration`] for a zero tick rate.
    pub fn build(self) -> TetherResult<Scheduler<H>> {
        let clock = FrameClock::new(self.tick_rate, self.limit_frames)?;
        log::debug!(
            "Scheduler: Built for '{}' (pid {}), overlay={}, policy={:?}",
            self.target.process_name(),
            self.target.pid(),
            self.overlay.is_some(),
            self.fault_policy
        );
        Ok(Scheduler {
            clock,
            driver: FrameDriver {
                hack: self.hack,
                target: self.target,
                input: self.input,
                overlay: self.overlay,
                modules: ModuleRegistry::new(),
                commands: ModuleCommands::new(),
                lifecycle: LifecycleState::Created,
                fault_policy: self.fault_policy,
                background: self.background,
                stats: FrameStats::new(),
                telemetry: TelemetryService::new(self.telemetry_interval),
                stop_reason: None,
            },
        })
    }
}

/// Runs one attached target's frame loop. Single use: a second
/// [`run`](Self::run) fails with [`TetherError::NotRestartable`].
pub struct Scheduler<H: Hack> {
    clock: FrameClock,
    driver: FrameDriver<H>,
}

impl<H: Hack> Scheduler<H> {
    /// Blocks until the target goes away, a module requests a stop, or a
    /// fault ends the run.
    ///
    /// Collaborators are torn down before this returns, whatever the outcome.
    ///
    /// # Errors
    /// * [`TetherError::NotRestartable`] if this scheduler already ran.
    /// * [`TetherError::Setup`] if module setup failed.
    /// * [`TetherError::ModuleFault`] under [`FaultPolicy::Propagate`].
    pub fn run(&mut self) -> TetherResult<RunSummary> {
        self.driver.lifecycle.begin_run()?;
        self.clock.run(&mut self.driver)?;

        let stop_reason = self.driver.stop_reason.unwrap_or(StopReason::Requested);
        let summary = RunSummary {
            stop_reason,
            frames_completed: self.driver.stats.frames_completed,
            stats: self.driver.stats,
            ticks_per_second: self.clock.ticks_per_second(),
        };
        log::info!(
            "Scheduler: Run ended ({}) after {} frame(s)",
            stop_reason,
            summary.frames_completed
        );
        Ok(summary)
    }

    /// The module registry. Modules registered before the run start with the
    /// first frame.
    pub fn modules_mut(&mut self) -> &mut ModuleRegistry {
        &mut self.driver.modules
    }

    /// The module registry.
    pub fn modules(&self) -> &ModuleRegistry {
        &self.driver.modules
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> LifecycleState {
        self.driver.lifecycle
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> &FrameStats {
        &self.driver.stats
    }

    /// Effective tick rate of the last run.
    pub fn ticks_per_second(&self) -> f64 {
        self.clock.ticks_per_second()
    }

    /// The attached target.
    pub fn target(&self) -> &dyn TargetHandle {
        self.driver.target.as_ref()
    }

    /// The application hooks.
    pub fn hack(&self) -> &H {
        &self.driver.hack
    }

    /// The application hooks, mutably.
    pub fn hack_mut(&mut self) -> &mut H {
        &mut self.driver.hack
    }
}

/// Everything a frame touches, kept apart from the clock so the clock can
/// drive it by `&mut`.
struct FrameDriver<H: Hack> {
    hack: H,
    target: Box<dyn TargetHandle>,
    input: Box<dyn InputSampler>,
    overlay: Option<Box<dyn OverlaySurface>>,
    modules: ModuleRegistry,
    commands: ModuleCommands,
    lifecycle: LifecycleState,
    fault_policy: FaultPolicy,
    background: LinearRgba,
    stats: FrameStats,
    telemetry: TelemetryService,
    stop_reason: Option<StopReason>,
}

impl<H: Hack> FrameDriver<H> {
    /// Stages 3 to 6. Returns early once the stop flag is set.
    fn run_stages(&mut self, tick: &mut TickEvent) -> TetherResult<()> {
        if self.hack.should_sample_input(self.target.as_ref()) {
            self.input.update();
            self.stats.input_samples += 1;
        }

        if let Some(overlay) = self.overlay.as_deref_mut() {
            let local_pointer = self.input.mouse_position() - overlay.location();
            overlay.update(tick.elapsed(), local_pointer);
            overlay.clear(self.background);
        }

        if self.hack.should_run_modules(self.target.as_ref()) {
            self.stats.module_passes += 1;
            self.run_modules(tick)?;
            if tick.stop_requested() {
                return Ok(());
            }
        } else {
            self.stats.module_passes_skipped += 1;
        }

        if let Some(overlay) = self.overlay.as_deref_mut() {
            overlay.present();
        }
        Ok(())
    }

    /// Updates every module in execution order.
    ///
    /// The order is fixed when the pass starts. A module removed during the
    /// pass is skipped; one registered during the pass first runs next frame.
    fn run_modules(&mut self, tick: &mut TickEvent) -> TetherResult<()> {
        for id in self.modules.execution_order() {
            let Some(module) = self.modules.get_mut(id) else {
                continue;
            };

            let canvas = self.overlay.as_deref_mut().map(|o| o.canvas());
            let mut frame = FrameContext::new(tick, self.input.state(), canvas, &mut self.commands);
            let result = module.update(&mut frame);
            self.stats.module_updates += 1;

            if let Err(source) = result {
                let name = module.name().to_string();
                self.stats.module_faults += 1;
                log::error!("Scheduler: Module '{}' {} failed: {:#}", name, id, source);
                if self.fault_policy == FaultPolicy::Propagate {
                    self.apply_commands();
                    return Err(TetherError::ModuleFault {
                        module: name,
                        source,
                    });
                }
            }

            self.apply_commands();
            if tick.stop_requested() {
                log::debug!("Scheduler: Stop requested by module {}", id);
                break;
            }
        }
        Ok(())
    }

    fn apply_commands(&mut self) {
        for command in self.commands.drain() {
            match command {
                ModuleCommand::Register(module) => {
                    self.modules.register(module);
                }
                ModuleCommand::Remove(id) => {
                    if self.modules.remove(id).is_none() {
                        log::warn!("Scheduler: Ignoring removal of unknown module {}", id);
                    }
                }
            }
        }
    }

    fn teardown(&mut self) {
        if let Some(overlay) = self.overlay.as_deref_mut() {
            overlay.close();
        }
        self.modules.clear();
        self.lifecycle.finish();
        log::info!(
            "Scheduler: Torn down for '{}' ({})",
            self.target.process_name(),
            self.stats
        );
    }
}

impl<H: Hack> ClockHandler for FrameDriver<H> {
    fn before_run(&mut self) {
        log::info!(
            "Scheduler: Running against '{}' (pid {})",
            self.target.process_name(),
            self.target.pid()
        );
        self.hack.before_run();
    }

    fn tick(&mut self, tick: &mut TickEvent) -> TetherResult<()> {
        self.target.refresh();
        if !self.target.is_running() {
            log::info!(
                "Scheduler: Target '{}' (pid {}) is no longer running",
                self.target.process_name(),
                self.target.pid()
            );
            self.stop_reason = Some(StopReason::TargetLost);
            tick.request_stop();
            return Ok(());
        }

        if self.lifecycle.take_init() {
            self.hack
                .setup_modules(&mut self.modules)
                .map_err(TetherError::Setup)?;
            log::info!(
                "Scheduler: Initialized with {} module(s)",
                self.modules.len()
            );
        }

        self.run_stages(tick)?;

        self.stats.frames_completed += 1;
        if tick.stop_requested() && self.stop_reason.is_none() {
            self.stop_reason = Some(StopReason::Requested);
        }
        self.telemetry.tick(&self.stats, tick.ticks_per_second());
        Ok(())
    }

    fn after_run(&mut self) {
        self.hack.after_run();
        self.teardown();
    }
}
