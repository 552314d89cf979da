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


//! Configuration for attaching to a process and running a frame loop over it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tether_control::FaultPolicy;
use tether_core::math::LinearRgba;
use tether_core::platform::AttachTimeout;
use tether_core::{TetherError, TetherResult};

fn default_tick_rate() -> u32 {
    60
}

fn default_true() -> bool {
    true
}

fn default_telemetry_interval_ms() -> u64 {
    1000
}

/// Everything needed to attach to a target and drive it.
///
/// Only `process_name` is required in JSON; every other field falls back to
/// its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HackConfig {
    /// Name of the process to attach to. A trailing `.exe` is optional.
    pub process_name: String,
    /// Target ticks per second.
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u32,
    /// Whether to create an overlay tracking the target's window.
    #[serde(default = "default_true")]
    pub create_overlay: bool,
    /// Whether the clock sleeps out the rest of each tick period.
    #[serde(default = "default_true")]
    pub limit_frames: bool,
    /// How long to wait for the process to appear. `None` waits forever.
    #[serde(default)]
    pub attach_timeout_ms: Option<u64>,
    /// What to do when a module's update fails.
    #[serde(default)]
    pub fault_policy: FaultPolicy,
    /// Color the overlay is cleared to every frame.
    #[serde(default)]
    pub background: LinearRgba,
    /// Interval of the telemetry summary log line. Zero disables it.
    #[serde(default = "default_telemetry_interval_ms")]
    pub telemetry_interval_ms: u64,
}

impl HackConfig {
    /// A configuration for `process_name` with every other field defaulted.
    pub fn new(process_name: impl Into<String>) -> Self {
        Self {
            process_name: process_name.into(),
            tick_rate: default_tick_rate(),
            create_overlay: true,
            limit_frames: true,
            attach_timeout_ms: None,
            fault_policy: FaultPolicy::default(),
            background: LinearRgba::TRANSPARENT,
            telemetry_interval_ms: default_telemetry_interval_ms(),
        }
    }

    /// Sets the target ticks per second.
    pub fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Turns the overlay on or off.
    pub fn with_overlay(mut self, create_overlay: bool) -> Self {
        self.create_overlay = create_overlay;
        self
    }

    /// Turns hard frame limiting on or off.
    pub fn with_limit_frames(mut self, limit_frames: bool) -> Self {
        self.limit_frames = limit_frames;
        self
    }

    /// Sets the attach timeout. `None` waits forever.
    pub fn with_attach_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.attach_timeout_ms = timeout_ms;
        self
    }

    /// Sets the module fault policy.
    pub fn with_fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.fault_policy = policy;
        self
    }

    /// Sets the overlay background color.
    pub fn with_background(mut self, background: LinearRgba) -> Self {
        self.background = background;
        self
    }

    /// Sets the telemetry summary interval.
    pub fn with_telemetry_interval_ms(mut self, interval_ms: u64) -> Self {
        self.telemetry_interval_ms = interval_ms;
        self
    }

    /// The attach timeout as the process finder expects it.
    pub fn attach_timeout(&self) -> AttachTimeout {
        AttachTimeout::from_millis(self.attach_timeout_ms)
    }

    /// The telemetry interval as a duration.
    pub fn telemetry_interval(&self) -> Duration {
        Duration::from_millis(self.telemetry_interval_ms)
    }

    /// Checks the values that would otherwise fail later.
    ///
    /// # Errors
    /// * [`TetherError::ClockMisconfiguration`] for a zero tick rate.
    /// * [`TetherError::InvalidConfig`] for a blank process name.
    pub fn validate(&self) -> TetherResult<()> {
        if self.tick_rate == 0 {
            return Err(TetherError::ClockMisconfiguration(
                "tick_rate must be at least 1".to_string(),
            ));
        }
        if self.process_name.trim().is_empty() {
            return Err(TetherError::InvalidConfig(
                "process_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> TetherResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TetherError::InvalidConfig(format!("malformed JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> TetherResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TetherError::InvalidConfig(format!("cannot serialize: {e}")))
    }

    /// Loads and validates a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> TetherResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TetherError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Writes the configuration to a JSON file.
    pub fn to_file(&self, path: impl AsRef<Path>) -> TetherResult<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| {
            TetherError::InvalidConfig(format!("cannot write {}: {e}", path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_process_name_is_required() {
        let config = HackConfig::from_json(r#"{ "process_name": "game.exe" }"#).unwrap();
        assert_eq!(config, HackConfig::new("game.exe"));
        assert_eq!(config.tick_rate, 60);
        assert!(config.create_overlay);
        assert!(config.limit_frames);
        assert_eq!(config.attach_timeout(), AttachTimeout::Indefinite);
        assert_eq!(config.fault_policy, FaultPolicy::Propagate);
        assert_eq!(config.telemetry_interval(), Duration::from_secs(1));
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let json = r#"{
            "process_name": "game",
            "tick_rate": 144,
            "create_overlay": false,
            "attach_timeout_ms": 2500,
            "fault_policy": "isolate"
        }"#;
        let config = HackConfig::from_json(json).unwrap();
        assert_eq!(config.tick_rate, 144);
        assert!(!config.create_overlay);
        assert_eq!(
            config.attach_timeout(),
            AttachTimeout::After(Duration::from_millis(2500))
        );
        assert_eq!(config.fault_policy, FaultPolicy::Isolate);
    }

    #[test]
    fn missing_name_is_invalid() {
        let err = HackConfig::from_json(r#"{ "tick_rate": 30 }"#).unwrap_err();
        assert!(matches!(err, TetherError::InvalidConfig(_)));

        let err = HackConfig::new("   ").validate().unwrap_err();
        assert!(matches!(err, TetherError::InvalidConfig(_)));
    }

    #[test]
    fn zero_tick_rate_is_a_clock_error() {
        let err = HackConfig::new("game").with_tick_rate(0).validate().unwrap_err();
        assert!(matches!(err, TetherError::ClockMisconfiguration(_)));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tether.json");
        let config = HackConfig::new("game")
            .with_tick_rate(30)
            .with_background(LinearRgba::BLACK)
            .with_attach_timeout_ms(Some(0));

        config.to_file(&path).unwrap();
        assert_eq!(HackConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn unreadable_file_is_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let err = HackConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, TetherError::InvalidConfig(_)));
    }
}
