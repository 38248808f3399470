//! Logical-pixel geometry.
//!
//! Origin is the window's top-left corner with +y pointing down. Shaders map
//! to clip space through the [`Viewport`] uniform.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
