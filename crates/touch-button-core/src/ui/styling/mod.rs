//! Styling system for the button widget
//!
//! This module provides:
//! - Color definitions and palettes
//! - Text alignment and placement arithmetic
//! - Per-state button styles
//!
//! # Organization
//!
//! - [`colors`] - RGB565 color constants and palette management
//! - [`layout`] - The 9-way text alignment selector and text origin math
//! - [`style`] - Button style (color triples per state, shape, font)
//!
//! # Examples
//!
//! ```ignore
//! use touch_button_core::ui::styling::*;
//!
//! let style = ButtonStyle::default()
//!     .with_normal(StateColors::new(WHITE, BLACK, BLACK))
//!     .with_text_align(TextAlign::MiddleCenter)
//!     .with_padding(10);
//! ```

// Module declarations
pub mod colors;
pub mod layout;
pub mod style;

// Re-export commonly used items for convenience
pub use colors::{BLACK, BLUE, ColorPalette, DARK_GRAY, LIGHT_GRAY, OLIVE, RED, WHITE};
pub use layout::{HorizontalAlign, TextAlign, VerticalAlign};
pub use style::{ButtonStyle, StateColors};
