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


//! An overlay that records each frame's drawing and hands the finished frame
//! to whoever renders it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tether_core::math::{LinearRgba, Vec2};
use tether_core::platform::{OverlaySurface, WindowGeometry};
use tether_core::renderer::{Canvas, DrawList};

/// A frame handed over by [`BufferedOverlay::present`].
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedFrame {
    /// 1-based count of presented frames.
    pub sequence: u64,
    /// Screen position of the overlay when the frame was drawn.
    pub location: Vec2,
    /// Pointer position in overlay coordinates.
    pub pointer: Vec2,
    /// Everything drawn this frame, starting from the clear.
    pub draw_list: DrawList,
}

/// Shared handle to the most recently presented frame.
///
/// The overlay writes, a host renderer on any thread reads.
#[derive(Debug, Clone, Default)]
pub struct FrameSlot {
    inner: Arc<Mutex<Option<PresentedFrame>>>,
}

impl FrameSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    // The slot only ever holds whole frames, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Option<PresentedFrame>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            log::warn!("FrameSlot: lock was poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn publish(&self, frame: PresentedFrame) {
        *self.lock() = Some(frame);
    }

    /// A copy of the latest frame, if any was presented.
    pub fn latest(&self) -> Option<PresentedFrame> {
        self.lock().clone()
    }

    /// Takes the latest frame, leaving the slot empty until the next present.
    pub fn take(&self) -> Option<PresentedFrame> {
        self.lock().take()
    }
}

/// An [`OverlaySurface`] backed by a [`DrawList`].
///
/// With a [`WindowGeometry`] source attached, every update moves and resizes
/// the overlay to the target window's bounds.
pub struct BufferedOverlay {
    geometry: Option<Box<dyn WindowGeometry>>,
    location: Vec2,
    pointer: Vec2,
    uptime: Duration,
    draw_list: DrawList,
    slot: FrameSlot,
    sequence: u64,
    closed: bool,
}

impl BufferedOverlay {
    /// Creates a fixed overlay at the screen origin.
    pub fn new(viewport: Vec2) -> Self {
        Self {
            geometry: None,
            location: Vec2::ZERO,
            pointer: Vec2::ZERO,
            uptime: Duration::ZERO,
            draw_list: DrawList::new(viewport),
            slot: FrameSlot::new(),
            sequence: 0,
            closed: false,
        }
    }

    /// Creates an overlay that follows `geometry`, starting at its current
    /// bounds when they are known.
    pub fn tracking(geometry: Box<dyn WindowGeometry>) -> Self {
        let mut overlay = Self::new(Vec2::ZERO);
        overlay.geometry = Some(geometry);
        overlay.follow_geometry();
        overlay
    }

    /// The handle a renderer reads presented frames from.
    pub fn frames(&self) -> FrameSlot {
        self.slot.clone()
    }

    /// Total time passed to [`update`](OverlaySurface::update).
    pub fn uptime(&self) -> Duration {
        self.uptime
    }

    /// Returns `true` once the overlay has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn follow_geometry(&mut self) {
        let Some(bounds) = self.geometry.as_ref().and_then(|g| g.window_bounds()) else {
            return;
        };
        if bounds.origin != self.location {
            log::trace!(
                "BufferedOverlay: Moved to ({}, {})",
                bounds.origin.x,
                bounds.origin.y
            );
        }
        self.location = bounds.origin;
        self.draw_list.set_viewport(bounds.size);
    }
}

impl OverlaySurface for BufferedOverlay {
    fn location(&self) -> Vec2 {
        self.location
    }

    fn update(&mut self, elapsed: Duration, local_pointer: Vec2) {
        self.uptime += elapsed;
        self.pointer = local_pointer;
        self.follow_geometry();
    }

    fn clear(&mut self, color: LinearRgba) {
        self.draw_list.clear(color);
    }

    fn canvas(&mut self) -> &mut dyn Canvas {
        &mut self.draw_list
    }

    fn present(&mut self) {
        if self.closed {
            return;
        }
        self.sequence += 1;
        self.slot.publish(PresentedFrame {
            sequence: self.sequence,
            location: self.location,
            pointer: self.pointer,
            draw_list: self.draw_list.clone(),
        });
    }

    fn close(&mut self) {
        if !self.closed {
            log::debug!(
                "BufferedOverlay: Closed after {} presented frame(s)",
                self.sequence
            );
        }
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tether_core::math::Rect;

    struct MovingWindow {
        bounds: Arc<Mutex<Option<Rect>>>,
    }

    impl WindowGeometry for MovingWindow {
        fn window_bounds(&self) -> Option<Rect> {
            *self.bounds.lock().unwrap()
        }
    }

    #[test]
    fn overlay_follows_the_window() {
        let bounds = Arc::new(Mutex::new(Some(Rect::new(
            Vec2::new(10.0, 20.0),
            Vec2::new(640.0, 480.0),
        ))));
        let mut overlay = BufferedOverlay::tracking(Box::new(MovingWindow {
            bounds: bounds.clone(),
        }));
        assert_eq!(overlay.location(), Vec2::new(10.0, 20.0));

        *bounds.lock().unwrap() = Some(Rect::new(Vec2::new(50.0, 60.0), Vec2::new(800.0, 600.0)));
        overlay.update(Duration::from_millis(16), Vec2::ZERO);
        assert_eq!(overlay.location(), Vec2::new(50.0, 60.0));
        assert_eq!(overlay.canvas().viewport_size(), Vec2::new(800.0, 600.0));

        *bounds.lock().unwrap() = None;
        overlay.update(Duration::from_millis(16), Vec2::ZERO);
        assert_eq!(overlay.location(), Vec2::new(50.0, 60.0), "unknown bounds keep the last position");
        assert_eq!(overlay.uptime(), Duration::from_millis(32));
    }

    #[test]
    fn present_hands_over_only_this_frames_drawing() {
        let mut overlay = BufferedOverlay::new(Vec2::new(100.0, 100.0));
        let frames = overlay.frames();

        overlay.clear(LinearRgba::TRANSPARENT);
        overlay
            .canvas()
            .draw_line(LinearRgba::GREEN, Vec2::ZERO, Vec2::ONE);
        overlay.present();

        overlay.clear(LinearRgba::BLACK);
        overlay.update(Duration::ZERO, Vec2::new(3.0, 4.0));
        overlay.present();

        let latest = frames.latest().expect("a frame was presented");
        assert_eq!(latest.sequence, 2);
        assert!(latest.draw_list.is_empty());
        assert_eq!(latest.draw_list.clear_color(), LinearRgba::BLACK);
        assert_eq!(latest.pointer, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn closed_overlay_stops_presenting() {
        let mut overlay = BufferedOverlay::new(Vec2::new(100.0, 100.0));
        let frames = overlay.frames();
        overlay.close();
        overlay.present();

        assert!(overlay.is_closed());
        assert!(frames.take().is_none());
    }

    #[test]
    fn poisoned_slot_keeps_delivering_frames() {
        let mut overlay = BufferedOverlay::new(Vec2::new(100.0, 100.0));
        let frames = overlay.frames();
        let reader = frames.clone();
        let _ = std::thread::spawn(move || {
            let _guard = reader.inner.lock().unwrap();
            panic!("reader died while holding the slot");
        })
        .join();
        assert!(frames.inner.is_poisoned());

        overlay.clear(LinearRgba::TRANSPARENT);
        overlay.present();

        assert_eq!(frames.latest().map(|f| f.sequence), Some(1));
        assert!(frames.take().is_some());
        assert!(frames.take().is_none());
    }
}
