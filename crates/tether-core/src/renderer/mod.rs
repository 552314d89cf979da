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

//! The drawing surface modules paint on.
//!
//! Modules never own the overlay. They receive a `&mut dyn Canvas` for the
//! duration of their update and record draw calls into it; the overlay turns
//! the recorded [`DrawList`] into pixels when the frame is presented.

pub mod canvas;
pub mod draw_list;

pub use canvas::Canvas;
pub use draw_list::{DrawCommand, DrawList};
