// src/ui/input.rs
//! Per-cycle touch sampling
//!
//! Touch drivers and windowing layers report edges (down, move, up) whenever
//! they happen, while widgets consume one sample per polling cycle.
//! [`TouchSampler`] sits between the two: it accumulates the edges seen since
//! the last cycle and replays them as [`TouchEvent`]s in [`TouchSampler::apply`].
//!
//! A touch that goes down and up again between two cycles is latched, so the
//! next cycle still delivers a press before the release.

use super::core::{TouchEvent, TouchPoint, Touchable};

/// Collects touch edges between polling cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchSampler {
    current: Option<TouchPoint>,
    last: TouchPoint,
    tap: Option<TouchPoint>,
}

impl Default for TouchSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchSampler {
    /// No touch yet; the last known point starts off-screen.
    pub fn new() -> Self {
        Self {
            current: None,
            last: TouchPoint::new(-1, -1),
            tap: None,
        }
    }

    pub fn touch_down(&mut self, point: TouchPoint) {
        self.current = Some(point);
        self.tap = Some(point);
    }

    /// Moves are ignored while no touch is held.
    pub fn touch_move(&mut self, point: TouchPoint) {
        if self.current.is_some() {
            self.current = Some(point);
        }
    }

    pub fn touch_up(&mut self, point: TouchPoint) {
        self.current = None;
        self.last = point;
    }

    pub fn is_touched(&self) -> bool {
        self.current.is_some()
    }

    /// Last known touch position
    pub fn last_point(&self) -> TouchPoint {
        self.last
    }

    /// Deliver this cycle's sample to every element.
    ///
    /// A held touch becomes a press followed by a drag at the current point.
    /// No touch becomes a release at the last known point, preceded by a press
    /// at the down point when the whole tap happened since the previous cycle.
    pub fn apply<T: Touchable>(&mut self, elements: &mut [T]) {
        let tap = self.tap.take();

        match self.current {
            Some(point) => {
                for element in elements.iter_mut() {
                    element.handle_touch(TouchEvent::Press(point));
                    element.handle_touch(TouchEvent::Drag(point));
                }
                self.last = point;
            }
            None => {
                for element in elements.iter_mut() {
                    if let Some(point) = tap {
                        element.handle_touch(TouchEvent::Press(point));
                    }
                    element.handle_touch(TouchEvent::Release(self.last));
                }
            }
        }
    }
}
