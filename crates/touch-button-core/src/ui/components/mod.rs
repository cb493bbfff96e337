// src/ui/components/mod.rs
//! UI components library

pub mod button;
pub mod text;

pub use button::{Button, ButtonState, Callback};
pub use text::TextWidget;
