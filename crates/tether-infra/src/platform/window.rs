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


//! Focus and geometry queries for the target's main window.
//!
//! On Windows these go through Win32. Elsewhere there is no portable way to
//! ask, so the target is treated as always focused and its bounds as unknown.

use tether_core::math::Rect;
use tether_core::platform::WindowGeometry;

/// Answers window questions for one process id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLocator {
    pid: u32,
}

impl WindowLocator {
    /// Creates a locator for the windows owned by `pid`.
    pub fn new(pid: u32) -> Self {
        Self { pid }
    }

    /// The process id whose windows are located.
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Returns `true` if the foreground window belongs to the process.
    pub fn is_foreground(&self) -> bool {
        if cfg!(windows) {
            sys::foreground_pid() == Some(self.pid)
        } else {
            true
        }
    }

    /// Outer bounds of the process's first visible top-level window.
    pub fn main_window_bounds(&self) -> Option<Rect> {
        sys::main_window_bounds(self.pid)
    }
}

impl WindowGeometry for WindowLocator {
    fn window_bounds(&self) -> Option<Rect> {
        self.main_window_bounds()
    }
}

#[cfg(windows)]
mod sys {
    use tether_core::math::Rect;
    use windows::Win32::Foundation::{BOOL, HWND, LPARAM, RECT};
    use windows::Win32::UI::WindowsAndMessaging::{
        EnumWindows, GetForegroundWindow, GetWindow, GetWindowRect, GetWindowThreadProcessId,
        IsWindowVisible, GW_OWNER,
    };

    struct Search {
        pid: u32,
        found: Option<HWND>,
    }

    fn window_pid(hwnd: HWND) -> u32 {
        let mut pid = 0u32;
        unsafe {
            let _ = GetWindowThreadProcessId(hwnd, Some(&mut pid));
        }
        pid
    }

    pub fn foreground_pid() -> Option<u32> {
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.0.is_null() {
            return None;
        }
        match window_pid(hwnd) {
            0 => None,
            pid => Some(pid),
        }
    }

    unsafe extern "system" fn find_main_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
        let search = &mut *(lparam.0 as *mut Search);
        if !IsWindowVisible(hwnd).as_bool() {
            return BOOL(1);
        }
        if !GetWindow(hwnd, GW_OWNER).unwrap_or_default().0.is_null() {
            return BOOL(1);
        }
        if window_pid(hwnd) != search.pid {
            return BOOL(1);
        }
        search.found = Some(hwnd);
        BOOL(0)
    }

    pub fn main_window_bounds(pid: u32) -> Option<Rect> {
        let mut search = Search { pid, found: None };
        unsafe {
            // Stopping the enumeration early makes EnumWindows return an error.
            let _ = EnumWindows(
                Some(find_main_window),
                LPARAM(&mut search as *mut Search as isize),
            );
        }
        let hwnd = search.found?;
        let mut rect = RECT::default();
        unsafe { GetWindowRect(hwnd, &mut rect) }.ok()?;
        Some(Rect::from_edges(
            rect.left as f32,
            rect.top as f32,
            rect.right as f32,
            rect.bottom as f32,
        ))
    }
}

#[cfg(not(windows))]
mod sys {
    use tether_core::math::Rect;

    pub fn foreground_pid() -> Option<u32> {
        None
    }

    pub fn main_window_bounds(_pid: u32) -> Option<Rect> {
        None
    }
}
