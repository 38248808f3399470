//! Vintage analog clock.
//!
//! Each frame samples the wall clock once, records the dial, the hands and
//! the date/time label into a single draw list, and hands it to the engine.

pub mod driver;
pub mod face;
pub mod fonts;
pub mod geometry;
pub mod hands;
pub mod label;
pub mod layout;
pub mod time_sample;

/// Paint layers, back to front.
pub mod layer {
    use vintage_engine::scene::ZIndex;

    /// Border, face, depth ring, ticks and numerals.
    pub const FACE: ZIndex = ZIndex(0);
    pub const HANDS: ZIndex = ZIndex(1);
    /// Center cap, above the hands' origin.
    pub const CAP: ZIndex = ZIndex(2);
    pub const LABEL: ZIndex = ZIndex(3);
}

pub use driver::{ClockApp, ClockDriver, Phase};
pub use layout::{ClockLayout, Palette};
pub use time_sample::{FixedTimeSource, SystemTimeSource, TimeSample, TimeSource};
