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


use std::cell::Cell;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tether_sdk::prelude::*;

/// Counts how often the loop touched the application.
#[derive(Default, Clone)]
struct HookCounts {
    setups: Arc<AtomicU32>,
    before_runs: Arc<AtomicU32>,
}

struct CountingHack {
    counts: HookCounts,
}

impl Hack for CountingHack {
    fn setup_modules(&mut self, modules: &mut ModuleRegistry) -> anyhow::Result<()> {
        self.counts.setups.fetch_add(1, Ordering::SeqCst);
        modules.register(Box::new(PointerMarker));
        Ok(())
    }

    fn before_run(&mut self) {
        self.counts.before_runs.fetch_add(1, Ordering::SeqCst);
    }
}

/// Draws a small box under the pointer.
struct PointerMarker;

impl Module for PointerMarker {
    fn name(&self) -> &str {
        "pointer-marker"
    }

    fn priority(&self) -> Priority {
        0
    }

    fn update(&mut self, frame: &mut FrameContext<'_>) -> anyhow::Result<()> {
        let pointer = frame.input().mouse_position();
        if let Some(canvas) = frame.canvas() {
            canvas.draw_rect(LinearRgba::WHITE, pointer, Vec2::new(2.0, 2.0));
        }
        Ok(())
    }
}

/// A target that is alive for a fixed number of liveness queries.
struct CountdownTarget {
    remaining: Cell<u32>,
}

impl tether_core::platform::TargetHandle for CountdownTarget {
    fn process_name(&self) -> &str {
        "countdown"
    }

    fn pid(&self) -> u32 {
        1
    }

    fn refresh(&mut self) {}

    fn is_running(&self) -> bool {
        let left = self.remaining.get();
        self.remaining.set(left.saturating_sub(1));
        left > 0
    }

    fn is_in_foreground(&self) -> bool {
        true
    }
}

#[test]
fn test_attach_with_zero_timeout_fails_immediately() {
    let counts = HookCounts::default();
    let config = HackConfig::new("tether-sdk-absent-process-51c2").with_attach_timeout_ms(Some(0));

    let started = Instant::now();
    let result = attach(
        &config,
        CountingHack {
            counts: counts.clone(),
        },
    );

    assert!(matches!(
        result,
        Err(TetherError::AttachmentTimeout { timeout_ms: 0, .. })
    ));
    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(counts.before_runs.load(Ordering::SeqCst), 0, "clock never started");
    assert_eq!(counts.setups.load(Ordering::SeqCst), 0);
}

#[test]
fn test_bad_config_fails_before_waiting() {
    // An indefinite timeout would block forever if validation came second.
    let config = HackConfig::new("tether-sdk-absent-process-51c2").with_tick_rate(0);

    let result = attach(
        &config,
        CountingHack {
            counts: HookCounts::default(),
        },
    );

    assert!(matches!(result, Err(TetherError::ClockMisconfiguration(_))));
}

#[test]
fn test_session_runs_until_the_target_is_gone() {
    // --- 1. ARRANGE ---
    let counts = HookCounts::default();
    let config = HackConfig::new("countdown")
        .with_limit_frames(false)
        .with_telemetry_interval_ms(0);
    let target = CountdownTarget {
        remaining: Cell::new(2),
    };
    let mut session = Session::with_target(
        &config,
        CountingHack {
            counts: counts.clone(),
        },
        Box::new(target),
        None,
    )
    .expect("valid session");
    let frames = session.frames().expect("overlay requested");
    session
        .input_sender()
        .send(InputEvent::MouseMoved { x: 7.0, y: 9.0 })
        .unwrap();

    // --- 2. ACT ---
    let summary = session.run().expect("target loss ends the run cleanly");

    // --- 3. ASSERT ---
    assert_eq!(summary.stop_reason, StopReason::TargetLost);
    assert_eq!(summary.frames_completed, 2);
    assert_eq!(counts.setups.load(Ordering::SeqCst), 1);
    assert_eq!(counts.before_runs.load(Ordering::SeqCst), 1);

    let last = frames.latest().expect("frames were presented");
    assert_eq!(last.sequence, 2);
    assert_eq!(last.draw_list.len(), 1);
    assert_eq!(last.pointer, Vec2::new(7.0, 9.0));

    assert!(matches!(session.run(), Err(TetherError::NotRestartable)));
}

#[test]
fn test_session_without_overlay_has_no_frames() {
    let config = HackConfig::new("countdown")
        .with_overlay(false)
        .with_limit_frames(false);
    let session = Session::with_target(
        &config,
        CountingHack {
            counts: HookCounts::default(),
        },
        Box::new(CountdownTarget {
            remaining: Cell::new(1),
        }),
        None,
    )
    .expect("valid session");

    assert!(session.frames().is_none());
}
