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

//! Traits and types for per-frame behaviour units (modules).

use crate::input::InputState;
use crate::renderer::Canvas;
use crate::tick::TickEvent;
use std::fmt;

/// Execution priority. Higher values run first each frame.
pub type Priority = i32;

/// Stable identity of a registered module.
///
/// Ids are handed out in registration order and never reused by a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleId(pub u64);

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A unit of per-frame work driven by the scheduler.
///
/// Modules run one after another on the scheduler's thread, in descending
/// [`priority`](Module::priority) order, and only on frames where the
/// execution gate is open. The priority is re-read every frame, so a module
/// may change it between frames.
pub trait Module: Send {
    /// A human-readable name used in logs and fault reports.
    fn name(&self) -> &str;

    /// The module's current execution priority.
    fn priority(&self) -> Priority;

    /// Performs this frame's work.
    ///
    /// Returning an error reports a module fault; what happens next depends on
    /// the scheduler's fault policy. Must not block: a module that never
    /// returns stalls the whole loop.
    fn update(&mut self, frame: &mut FrameContext<'_>) -> anyhow::Result<()>;
}

/// A change to the module set requested from inside a frame.
pub enum ModuleCommand {
    /// Add a module. It first runs on the next frame.
    Register(Box<dyn Module>),
    /// Remove a module. It does not run again, not even later in the current pass.
    Remove(ModuleId),
}

impl fmt::Debug for ModuleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleCommand::Register(module) => f
                .debug_tuple("Register")
                .field(&module.name())
                .finish(),
            ModuleCommand::Remove(id) => f.debug_tuple("Remove").field(id).finish(),
        }
    }
}

/// Queue of module-set changes, drained by the scheduler after each module update.
#[derive(Debug, Default)]
pub struct ModuleCommands {
    queue: Vec<ModuleCommand>,
}

impl ModuleCommands {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a registration.
    pub fn register(&mut self, module: Box<dyn Module>) {
        self.queue.push(ModuleCommand::Register(module));
    }

    /// Queues a removal.
    pub fn remove(&mut self, id: ModuleId) {
        self.queue.push(ModuleCommand::Remove(id));
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Takes every queued command, in the order it was issued.
    pub fn drain(&mut self) -> std::vec::Drain<'_, ModuleCommand> {
        self.queue.drain(..)
    }
}

/// Everything a module may touch during its update.
pub struct FrameContext<'a> {
    tick: &'a mut TickEvent,
    input: &'a InputState,
    canvas: Option<&'a mut dyn Canvas>,
    commands: &'a mut ModuleCommands,
}

impl<'a> FrameContext<'a> {
    /// Assembles the context for one module invocation.
    pub fn new(
        tick: &'a mut TickEvent,
        input: &'a InputState,
        canvas: Option<&'a mut dyn Canvas>,
        commands: &'a mut ModuleCommands,
    ) -> Self {
        Self {
            tick,
            input,
            canvas,
            commands,
        }
    }

    /// The current frame's tick.
    pub fn tick(&self) -> &TickEvent {
        self.tick
    }

    /// Asks the loop to stop once this frame completes.
    pub fn request_stop(&mut self) {
        self.tick.request_stop();
    }

    /// Input as sampled at the start of this frame.
    pub fn input(&self) -> &InputState {
        self.input
    }

    /// The overlay's drawing surface, or `None` when running without an overlay.
    pub fn canvas(&mut self) -> Option<&mut (dyn Canvas + 'a)> {
        self.canvas.as_deref_mut()
    }

    /// Registers another module, effective from the next frame.
    pub fn register_module(&mut self, module: Box<dyn Module>) {
        self.commands.register(module);
    }

    /// Removes a module, effective immediately.
    pub fn remove_module(&mut self, id: ModuleId) {
        self.commands.remove(id);
    }
}
