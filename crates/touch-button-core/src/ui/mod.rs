// src/ui/mod.rs
//! Touch button UI system for embedded displays
//!
//! This module provides:
//! - Core traits for drawable and touchable elements
//! - Per-cycle touch sampling
//! - A rendering seam over embedded-graphics draw targets
//! - The button component and its text-widget base
//! - Styling: colors, per-state color triples, text alignment

pub mod components;
pub mod core;
pub mod input;
pub mod render;
pub mod styling;

// Re-export commonly used items
pub use components::{Button, ButtonState, Callback, TextWidget};
pub use self::core::{Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
pub use input::TouchSampler;
pub use render::{EgRenderer, FontMetrics, Renderer};
pub use styling::{ButtonStyle, ColorPalette, StateColors, TextAlign};
