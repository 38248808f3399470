//! Font loading and text measurement.
//!
//! Glyph rasterization lives in `render::shapes::text`; this module only owns
//! parsed fonts and the layout math shared by measurement and rendering.

mod font_system;

pub use font_system::{anchored_origin, FontId, FontLoadError, FontSystem};
pub(crate) use font_system::measure_layout;
