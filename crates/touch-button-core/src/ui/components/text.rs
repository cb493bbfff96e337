// src/ui/components/text.rs
//! Shared state of text-bearing widgets
//!
//! [`TextWidget`] holds what every labelled widget needs regardless of how
//! it draws: a hit region, a label, an enabled flag, and the dirty flag.
//! Widgets embed it and delegate to it rather than re-implementing the
//! bookkeeping.

use embedded_graphics::primitives::Rectangle;

use crate::ui::core::{TouchPoint, rect_contains};

/// Maximum label length in bytes
pub const LABEL_CAPACITY: usize = 32;

/// Label string type used by text widgets
pub type Label = heapless::String<LABEL_CAPACITY>;

/// Geometry, label, enabled and dirty bookkeeping for a widget
///
/// Every mutator that can change what ends up on screen marks the widget
/// dirty. Only a completed redraw clears it (see `Drawable::draw`).
#[derive(Debug, Clone)]
pub struct TextWidget {
    bounds: Rectangle,
    label: Label,
    enabled: bool,
    dirty: bool,
}

impl TextWidget {
    /// Create an enabled widget. It starts dirty since it has never been drawn.
    pub fn new(bounds: Rectangle, label: &str) -> Self {
        Self {
            bounds,
            label: truncate_label(label),
            enabled: true,
            dirty: true,
        }
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Move or resize the widget. Marks dirty only if the bounds changed.
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Update the label text.
    ///
    /// Text beyond [`LABEL_CAPACITY`] bytes is cut at a character boundary.
    /// Marks dirty only if the stored label changed.
    pub fn set_label(&mut self, label: &str) {
        let label = truncate_label(label);
        if self.label != label {
            self.label = label;
            self.dirty = true;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns `true` if the flag changed.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled == enabled {
            return false;
        }
        self.enabled = enabled;
        self.dirty = true;
        true
    }

    pub fn contains(&self, point: TouchPoint) -> bool {
        rect_contains(&self.bounds, point)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

fn truncate_label(text: &str) -> Label {
    let mut label = Label::new();
    for c in text.chars() {
        if label.push(c).is_err() {
            break;
        }
    }
    label
}
