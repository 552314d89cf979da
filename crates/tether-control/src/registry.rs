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


//! Module registry with priority ordering.

use tether_core::{Module, ModuleId, Priority};

/// Entry in the module registry.
struct ModuleEntry {
    id: ModuleId,
    module: Box<dyn Module>,
}

/// Owns the live module set and derives its execution order.
///
/// Entries are kept in registration order. The execution order is re-derived
/// on demand: descending priority, ties broken by registration order. Ids are
/// assigned monotonically and never reused.
pub struct ModuleRegistry {
    entries: Vec<ModuleEntry>,
    next_id: u64,
}

impl ModuleRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a module and returns its id.
    pub fn register(&mut self, module: Box<dyn Module>) -> ModuleId {
        let id = ModuleId(self.next_id);
        self.next_id += 1;
        log::info!(
            "ModuleRegistry: Registered '{}' {} (priority={})",
            module.name(),
            id,
            module.priority()
        );
        self.entries.push(ModuleEntry { id, module });
        id
    }

    /// Removes a module, returning it if it was registered.
    pub fn remove(&mut self, id: ModuleId) -> Option<Box<dyn Module>> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let entry = self.entries.remove(index);
        log::info!(
            "ModuleRegistry: Removed '{}' {}",
            entry.module.name(),
            entry.id
        );
        Some(entry.module)
    }

    /// Returns true if a module with this id is registered.
    pub fn contains(&self, id: ModuleId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Returns the module with the given id, if registered.
    pub fn get_mut(&mut self, id: ModuleId) -> Option<&mut (dyn Module + 'static)> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| e.module.as_mut())
    }

    /// Ids in execution order: highest priority first, stable on ties.
    pub fn execution_order(&self) -> Vec<ModuleId> {
        let mut keyed: Vec<(Priority, ModuleId)> = self
            .entries
            .iter()
            .map(|e| (e.module.priority(), e.id))
            .collect();
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        keyed.into_iter().map(|(_, id)| id).collect()
    }

    /// Returns the number of registered modules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no modules are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(id, name)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, &str)> {
        self.entries.iter().map(|e| (e.id, e.module.name()))
    }

    /// Drops every module. Ids keep counting from where they were.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("ModuleRegistry: Dropping {} module(s)", self.entries.len());
        }
        self.entries.clear();
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
