//! The static dial: wooden border, parchment disc, depth ring, ticks and
//! Roman numerals.

use vintage_engine::scene::DrawList;

use crate::fonts::ClockFonts;
use crate::geometry::{polar_to_pixel, Pixel};
use crate::layer;
use crate::layout::ClockLayout;

pub const ROMAN_NUMERALS: [&str; 12] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

/// One of the 60 minute marks around the rim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub index: u32,
    /// Screen angle in degrees (index 0 at -90°, 12 o'clock).
    pub angle: f64,
    /// Every fifth mark is an hour mark.
    pub is_hour: bool,
    pub start: Pixel,
    pub end: Pixel,
    pub thickness: f32,
}

/// Hour numeral placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Numeral {
    /// 1–12.
    pub hour: u32,
    pub text: &'static str,
    pub angle: f64,
    /// Point the numeral's bounding box is centered on.
    pub anchor: Pixel,
}

pub fn tick_marks(layout: &ClockLayout) -> Vec<TickMark> {
    (0..60u32)
        .map(|index| {
            let angle = f64::from(index) * 6.0 - 90.0;
            let is_hour = index % 5 == 0;
            let style = if is_hour { layout.hour_tick } else { layout.minute_tick };

            TickMark {
                index,
                angle,
                is_hour,
                start: polar_to_pixel(layout.center, style.inner, angle),
                end: polar_to_pixel(layout.center, style.outer, angle),
                thickness: style.thickness,
            }
        })
        .collect()
}

pub fn numerals(layout: &ClockLayout) -> Vec<Numeral> {
    (1..=12u32)
        .zip(ROMAN_NUMERALS)
        .map(|(hour, text)| {
            let angle = f64::from(hour % 12) * 30.0 - 90.0;
            Numeral {
                hour,
                text,
                angle,
                anchor: polar_to_pixel(layout.center, layout.numeral_radius, angle),
            }
        })
        .collect()
}

/// Records the dial on [`layer::FACE`], back to front.
pub fn draw_face(list: &mut DrawList, layout: &ClockLayout, fonts: &ClockFonts) {
    let palette = &layout.palette;
    let center = layout.center.to_vec2();

    list.push_solid_circle(layer::FACE, center, layout.border_radius, palette.border);
    list.push_solid_circle(layer::FACE, center, layout.radius, palette.face);
    list.push_ring(
        layer::FACE,
        center,
        layout.inner_ring_radius,
        layout.inner_ring_width,
        palette.inner_ring,
    );

    for tick in tick_marks(layout) {
        list.push_line(
            layer::FACE,
            tick.start.to_vec2(),
            tick.end.to_vec2(),
            tick.thickness,
            palette.tick,
        );
    }

    for numeral in numerals(layout) {
        list.push_centered_text(
            layer::FACE,
            numeral.text,
            fonts.numeral,
            layout.numeral_size,
            palette.numeral,
            numeral.anchor.to_vec2(),
        );
    }
}
