// src/ui/core.rs
//! Core UI traits and types for the touch button system

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::render::Renderer;

/// Represents a 2D touch point on the display
///
/// Coordinates are signed so samples that land off-screen (or come from a
/// miscalibrated controller) still hit-test as "outside" instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: i32,
    pub y: i32,
}

impl TouchPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<(u16, u16)> for TouchPoint {
    /// Raw controller coordinates
    fn from((x, y): (u16, u16)) -> Self {
        Self::new(x as i32, y as i32)
    }
}

impl From<Point> for TouchPoint {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

/// Touch events that can occur on the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEvent {
    /// Initial touch press at a point
    Press(TouchPoint),
    /// Sustained touch moved to a new point
    Drag(TouchPoint),
    /// Touch lifted; carries the last known point
    Release(TouchPoint),
}

/// Result from handling a touch event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchResult {
    /// Event changed this element's state
    Handled,
    /// Event was ignored, pass to next element
    NotHandled,
}

/// Trait for any UI element that can be drawn with dirty tracking
///
/// Implementors provide [`Drawable::render`], which unconditionally issues the
/// drawing calls. Callers use [`Drawable::draw`], which skips the work when the
/// element is clean and clears the dirty flag once rendering succeeds.
pub trait Drawable {
    /// Issue every drawing call for this element.
    fn render<R: Renderer>(&self, renderer: &mut R) -> Result<(), R::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rectangle;

    /// Check if this element needs to be redrawn
    fn is_dirty(&self) -> bool;

    /// Mark this element as clean (already drawn)
    fn mark_clean(&mut self);

    /// Mark this element as dirty (needs redraw)
    fn mark_dirty(&mut self);

    /// Redraw if dirty or `force` is set.
    ///
    /// Returns `Ok(true)` when drawing calls were issued. On a renderer error
    /// the element stays dirty so the next cycle retries.
    fn draw<R: Renderer>(&mut self, renderer: &mut R, force: bool) -> Result<bool, R::Error> {
        if !force && !self.is_dirty() {
            return Ok(false);
        }

        self.render(renderer)?;
        self.mark_clean();
        Ok(true)
    }
}

/// Trait for UI elements that respond to touch events
pub trait Touchable {
    /// Check if a point is within this element's hit region
    fn contains_point(&self, point: TouchPoint) -> bool;

    /// Handle a touch event, returns whether the element's state changed
    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult;
}

/// Half-open containment test: `x <= px < x + w` and `y <= py < y + h`.
///
/// Empty rectangles contain nothing.
pub fn rect_contains(rect: &Rectangle, point: TouchPoint) -> bool {
    let x = rect.top_left.x as i64;
    let y = rect.top_left.y as i64;
    let px = point.x as i64;
    let py = point.y as i64;

    px >= x && px < x + rect.size.width as i64 && py >= y && py < y + rect.size.height as i64
}
