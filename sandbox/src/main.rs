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


//! Attaches to a process by name and draws a crosshair and a tick-rate HUD
//! over its window until the process exits.

mod modules;

use anyhow::{Context, Result};
use clap::Parser;
use modules::{Crosshair, TickRateHud};
use std::path::PathBuf;
use tether_sdk::prelude::*;

/// Command-line options. `--config` loads a JSON file; the other flags
/// override what it says.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Name of the process to attach to (e.g. `notepad` or `game.exe`).
    process: Option<String>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Target ticks per second.
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Give up if the process has not appeared after this many milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Run without an overlay.
    #[arg(long)]
    no_overlay: bool,

    /// Tick as fast as possible instead of sleeping out each period.
    #[arg(long)]
    no_limit: bool,

    /// Log failing modules and keep going instead of stopping.
    #[arg(long)]
    isolate_faults: bool,

    /// Crosshair color as `RRGGBB` or `RRGGBBAA` hex.
    #[arg(long, default_value = "00FF00", value_parser = parse_color)]
    crosshair_color: LinearRgba,
}

fn parse_color(hex: &str) -> Result<LinearRgba, String> {
    LinearRgba::try_from_hex(hex)
        .ok_or_else(|| format!("'{hex}' is not an RRGGBB or RRGGBBAA color"))
}

impl Cli {
    fn into_config(self) -> Result<(HackConfig, LinearRgba)> {
        let mut config = match (&self.config, &self.process) {
            (Some(path), _) => HackConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            (None, Some(process)) => HackConfig::new(process.clone()),
            (None, None) => anyhow::bail!("either a process name or --config is required"),
        };
        if let (Some(_), Some(process)) = (&self.config, self.process) {
            config.process_name = process;
        }
        if let Some(tick_rate) = self.tick_rate {
            config.tick_rate = tick_rate;
        }
        if self.timeout_ms.is_some() {
            config.attach_timeout_ms = self.timeout_ms;
        }
        if self.no_overlay {
            config.create_overlay = false;
        }
        if self.no_limit {
            config.limit_frames = false;
        }
        if self.isolate_faults {
            config.fault_policy = FaultPolicy::Isolate;
        }
        Ok((config, self.crosshair_color))
    }
}

struct SandboxHack {
    crosshair_color: LinearRgba,
}

impl Hack for SandboxHack {
    fn setup_modules(&mut self, modules: &mut ModuleRegistry) -> anyhow::Result<()> {
        modules.register(Box::new(Crosshair::new(self.crosshair_color, 8.0)));
        modules.register(Box::new(TickRateHud));
        Ok(())
    }

    fn before_run(&mut self) {
        log::info!("Sandbox: Overlay is live");
    }

    fn after_run(&mut self) {
        log::info!("Sandbox: Overlay closed");
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let (config, crosshair_color) = Cli::parse().into_config()?;
    let mut session = attach(&config, SandboxHack { crosshair_color })?;
    let summary = session.run()?;

    log::info!(
        "Sandbox: Finished ({}) after {} frame(s) at {:.1} ticks/s; {}",
        summary.stop_reason,
        summary.frames_completed,
        summary.ticks_per_second,
        summary.stats
    );
    Ok(())
}
