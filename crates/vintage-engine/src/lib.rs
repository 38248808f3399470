//! Vintage engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the clock:
//! window loop, surface management, a renderer-agnostic draw list and the
//! circle/line/text renderers that consume it.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
