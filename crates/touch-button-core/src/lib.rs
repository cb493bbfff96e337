//! Hardware-independent touch button widget
//!
//! This crate contains the platform-agnostic pieces of a touch-driven button
//! for embedded displays: the press/drag/release state machine, state-driven
//! style resolution, text placement, and a dirty-tracked redraw protocol.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod ui;
