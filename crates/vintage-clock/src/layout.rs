//! Clock layout: window geometry, dial proportions and the vintage palette.
//!
//! Built once at startup and handed to every builder by reference.

use vintage_engine::paint::Color;

use crate::geometry::Pixel;

/// Colors of the vintage theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub face: Color,
    pub border: Color,
    pub inner_ring: Color,
    pub tick: Color,
    pub numeral: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,
    pub second_hand: Color,
    pub cap_outer: Color,
    pub cap_inner: Color,
    pub label: Color,
}

impl Palette {
    /// Dark wood, parchment and rust.
    pub fn vintage() -> Self {
        Self {
            background: Color::rgb(45, 30, 20),
            face: Color::rgb(235, 220, 190),
            border: Color::rgb(90, 60, 35),
            inner_ring: Color::rgb(160, 120, 80),
            tick: Color::rgb(80, 50, 30),
            numeral: Color::rgb(50, 30, 20),
            hour_hand: Color::rgb(60, 40, 25),
            minute_hand: Color::rgb(70, 45, 25),
            second_hand: Color::rgb(140, 40, 30),
            cap_outer: Color::rgb(70, 40, 30),
            cap_inner: Color::rgb(230, 220, 200),
            label: Color::rgb(110, 75, 45),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::vintage()
    }
}

/// A radial stroke between two distances from the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickStyle {
    pub inner: f32,
    pub outer: f32,
    pub thickness: f32,
}

/// A hand drawn from the center outwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandStyle {
    pub length: f32,
    pub thickness: f32,
}

/// Immutable layout record.
///
/// Lengths are logical pixels. Radii and lengths derive from `radius`
/// in [`ClockLayout::vintage`]; changing one field does not rescale others.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockLayout {
    pub width: u32,
    pub height: u32,
    pub fps: u32,

    pub center: Pixel,
    pub radius: f32,

    /// Outer wooden disc, drawn behind the face.
    pub border_radius: f32,
    pub inner_ring_radius: f32,
    pub inner_ring_width: f32,

    pub hour_tick: TickStyle,
    pub minute_tick: TickStyle,
    pub numeral_radius: f32,

    pub hour_hand: HandStyle,
    pub minute_hand: HandStyle,
    pub second_hand: HandStyle,
    /// Tail of the second hand, opposite its tip.
    pub counterweight: HandStyle,

    pub cap_outer_radius: f32,
    pub cap_inner_radius: f32,

    /// Vertical offsets of the date and time lines below the center.
    pub date_offset: f32,
    pub time_offset: f32,

    pub numeral_size: f32,
    pub label_size: f32,

    pub palette: Palette,
}

impl ClockLayout {
    /// The 600×600 vintage dial.
    pub fn vintage() -> Self {
        let width = 600;
        let height = 600;
        let radius = 250.0;

        Self {
            width,
            height,
            fps: 60,

            center: Pixel::new(width as i32 / 2, height as i32 / 2),
            radius,

            border_radius: radius + 15.0,
            inner_ring_radius: radius - 20.0,
            inner_ring_width: 3.0,

            hour_tick: TickStyle { inner: radius - 35.0, outer: radius - 10.0, thickness: 4.0 },
            minute_tick: TickStyle { inner: radius - 25.0, outer: radius - 10.0, thickness: 2.0 },
            numeral_radius: radius - 65.0,

            hour_hand: HandStyle { length: radius - 120.0, thickness: 10.0 },
            minute_hand: HandStyle { length: radius - 80.0, thickness: 8.0 },
            second_hand: HandStyle { length: radius - 60.0, thickness: 3.0 },
            counterweight: HandStyle { length: 35.0, thickness: 3.0 },

            cap_outer_radius: 12.0,
            cap_inner_radius: 7.0,

            date_offset: 35.0,
            time_offset: 60.0,

            numeral_size: 44.0,
            label_size: 20.0,

            palette: Palette::vintage(),
        }
    }
}

impl Default for ClockLayout {
    fn default() -> Self {
        Self::vintage()
    }
}
