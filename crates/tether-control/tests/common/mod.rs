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


//! Fake collaborators shared by the scheduler integration tests.
//!
//! Every fake writes to a shared [`Journal`] so tests can assert the exact
//! order in which the frame stages ran.

#![allow(dead_code)]

use std::cell::Cell;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tether_control::{Hack, ModuleRegistry, Scheduler, SchedulerBuilder};
use tether_core::math::{LinearRgba, Vec2};
use tether_core::platform::{InputSampler, OverlaySurface, TargetHandle};
use tether_core::renderer::{Canvas, DrawList};
use tether_core::{FrameContext, InputState, Module, Priority};

/// Ordered log of everything the fakes were asked to do.
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, entry: &str) -> usize {
        self.0.lock().unwrap().iter().filter(|e| *e == entry).count()
    }

    pub fn position(&self, entry: &str) -> Option<usize> {
        self.0.lock().unwrap().iter().position(|e| e == entry)
    }
}

/// A target that stops running on a chosen liveness query.
pub struct FakeTarget {
    journal: Journal,
    /// 1-based query on which `is_running` first returns false.
    dies_on_query: u32,
    queries: Cell<u32>,
    refreshes: u32,
    /// Foreground answer per frame, cycled.
    foreground: Vec<bool>,
}

impl FakeTarget {
    pub fn new(journal: &Journal, dies_on_query: u32) -> Self {
        Self {
            journal: journal.clone(),
            dies_on_query,
            queries: Cell::new(0),
            refreshes: 0,
            foreground: vec![true],
        }
    }

    pub fn with_foreground(mut self, pattern: Vec<bool>) -> Self {
        self.foreground = pattern;
        self
    }
}

impl TargetHandle for FakeTarget {
    fn process_name(&self) -> &str {
        "fake.exe"
    }

    fn pid(&self) -> u32 {
        4242
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
        self.journal.push("refresh");
    }

    fn is_running(&self) -> bool {
        let query = self.queries.get() + 1;
        self.queries.set(query);
        query < self.dies_on_query
    }

    fn is_in_foreground(&self) -> bool {
        let frame = self.refreshes.saturating_sub(1) as usize;
        self.foreground[frame % self.foreground.len()]
    }
}

/// An input sampler that reports a fixed pointer position.
pub struct FakeInput {
    journal: Journal,
    state: InputState,
    pointer: Vec2,
}

impl FakeInput {
    pub fn new(journal: &Journal) -> Self {
        Self::at(journal, Vec2::ZERO)
    }

    pub fn at(journal: &Journal, pointer: Vec2) -> Self {
        Self {
            journal: journal.clone(),
            state: InputState::new(),
            pointer,
        }
    }
}

impl InputSampler for FakeInput {
    fn update(&mut self) {
        self.journal.push("input");
        self.state.begin_sample();
        self.state.apply(&tether_core::InputEvent::MouseMoved {
            x: self.pointer.x,
            y: self.pointer.y,
        });
    }

    fn state(&self) -> &InputState {
        &self.state
    }
}

/// An overlay that records its calls and keeps the last presented draw list.
pub struct FakeOverlay {
    journal: Journal,
    location: Vec2,
    list: DrawList,
    pub pointers: Arc<Mutex<Vec<Vec2>>>,
    pub presented: Arc<Mutex<Vec<DrawList>>>,
}

impl FakeOverlay {
    pub fn new(journal: &Journal) -> Self {
        Self::at(journal, Vec2::ZERO)
    }

    pub fn at(journal: &Journal, location: Vec2) -> Self {
        Self {
            journal: journal.clone(),
            location,
            list: DrawList::new(Vec2::new(800.0, 600.0)),
            pointers: Arc::default(),
            presented: Arc::default(),
        }
    }
}

impl OverlaySurface for FakeOverlay {
    fn location(&self) -> Vec2 {
        self.location
    }

    fn update(&mut self, _elapsed: Duration, local_pointer: Vec2) {
        self.journal.push("overlay.update");
        self.pointers.lock().unwrap().push(local_pointer);
    }

    fn clear(&mut self, color: LinearRgba) {
        self.journal.push("overlay.clear");
        self.list.clear(color);
    }

    fn canvas(&mut self) -> &mut dyn Canvas {
        &mut self.list
    }

    fn present(&mut self) {
        self.journal.push("present");
        self.presented.lock().unwrap().push(self.list.clone());
    }

    fn close(&mut self) {
        self.journal.push("close");
    }
}

type Behaviour = Box<dyn FnMut(&mut FrameContext<'_>) -> anyhow::Result<()> + Send>;

/// A module that journals `module:<name>` and then runs an optional behaviour.
pub struct ScriptedModule {
    name: String,
    priority: Arc<AtomicI32>,
    journal: Journal,
    behaviour: Option<Behaviour>,
}

impl ScriptedModule {
    pub fn new(journal: &Journal, name: &str, priority: Priority) -> Self {
        Self {
            name: name.to_string(),
            priority: Arc::new(AtomicI32::new(priority)),
            journal: journal.clone(),
            behaviour: None,
        }
    }

    pub fn with_behaviour(
        mut self,
        behaviour: impl FnMut(&mut FrameContext<'_>) -> anyhow::Result<()> + Send + 'static,
    ) -> Self {
        self.behaviour = Some(Box::new(behaviour));
        self
    }

    /// Shared handle to the priority, so a behaviour can change it mid-run.
    pub fn priority_handle(&self) -> Arc<AtomicI32> {
        Arc::clone(&self.priority)
    }

    pub fn boxed(self) -> Box<dyn Module> {
        Box::new(self)
    }
}

impl Module for ScriptedModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> Priority {
        self.priority.load(Ordering::Relaxed)
    }

    fn update(&mut self, frame: &mut FrameContext<'_>) -> anyhow::Result<()> {
        self.journal.push(format!("module:{}", self.name));
        match self.behaviour.as_mut() {
            Some(behaviour) => behaviour(frame),
            None => Ok(()),
        }
    }
}

type Setup = Box<dyn FnMut(&mut ModuleRegistry) -> anyhow::Result<()>>;

/// Application hooks with scripted gates.
pub struct TestHack {
    journal: Journal,
    setup: Setup,
    /// Input gate per frame, cycled. Empty means the default (always).
    pub sample_pattern: Vec<bool>,
    sample_queries: Cell<usize>,
    /// Module gate override. `None` keeps the foreground default.
    pub run_modules: Option<bool>,
}

impl TestHack {
    pub fn new(
        journal: &Journal,
        setup: impl FnMut(&mut ModuleRegistry) -> anyhow::Result<()> + 'static,
    ) -> Self {
        Self {
            journal: journal.clone(),
            setup: Box::new(setup),
            sample_pattern: Vec::new(),
            sample_queries: Cell::new(0),
            run_modules: None,
        }
    }

    /// A hack whose setup registers nothing.
    pub fn empty(journal: &Journal) -> Self {
        Self::new(journal, |_| Ok(()))
    }
}

impl Hack for TestHack {
    fn setup_modules(&mut self, modules: &mut ModuleRegistry) -> anyhow::Result<()> {
        self.journal.push("setup");
        (self.setup)(modules)
    }

    fn should_sample_input(&self, _target: &dyn TargetHandle) -> bool {
        if self.sample_pattern.is_empty() {
            return true;
        }
        let query = self.sample_queries.get();
        self.sample_queries.set(query + 1);
        self.sample_pattern[query % self.sample_pattern.len()]
    }

    fn should_run_modules(&self, target: &dyn TargetHandle) -> bool {
        self.run_modules
            .unwrap_or_else(|| target.is_in_foreground())
    }

    fn before_run(&mut self) {
        self.journal.push("before_run");
    }

    fn after_run(&mut self) {
        self.journal.push("after_run");
    }
}

/// A fast, unpaced scheduler over the given fakes.
pub fn scheduler(
    hack: TestHack,
    target: FakeTarget,
    input: FakeInput,
    overlay: Option<FakeOverlay>,
) -> Scheduler<TestHack> {
    let mut builder = SchedulerBuilder::new(hack, Box::new(target), Box::new(input))
        .with_tick_rate(1000)
        .with_limit_frames(false)
        .with_telemetry_interval(Duration::ZERO);
    if let Some(overlay) = overlay {
        builder = builder.with_overlay(Box::new(overlay));
    }
    builder.build().expect("valid scheduler configuration")
}
