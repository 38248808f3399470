//! Date and 12-hour time beneath the center of the dial.

use vintage_engine::coords::Vec2;
use vintage_engine::scene::DrawList;

use crate::fonts::ClockFonts;
use crate::layer;
use crate::layout::ClockLayout;
use crate::time_sample::TimeSample;

/// e.g. `07 March 2025`.
pub fn format_date(sample: &TimeSample) -> String {
    sample.date.format("%d %B %Y").to_string()
}

/// e.g. `03:04:05 PM`.
pub fn format_time(sample: &TimeSample) -> String {
    sample.time.format("%I:%M:%S %p").to_string()
}

/// Records both lines on [`layer::LABEL`], horizontally centered on the dial.
pub fn draw_label(
    list: &mut DrawList,
    layout: &ClockLayout,
    fonts: &ClockFonts,
    sample: &TimeSample,
) {
    let center = layout.center.to_vec2();
    let lines = [
        (format_date(sample), layout.date_offset),
        (format_time(sample), layout.time_offset),
    ];

    for (text, offset) in lines {
        list.push_centered_text(
            layer::LABEL,
            text,
            fonts.label,
            layout.label_size,
            layout.palette.label,
            Vec2::new(center.x, center.y + offset),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_sample::sample_at;
    use vintage_engine::scene::DrawCmd;

    #[test]
    fn date_uses_day_month_name_year() {
        assert_eq!(format_date(&sample_at(15, 4, 5, 0)), "07 March 2025");
    }

    #[test]
    fn time_uses_twelve_hour_clock() {
        assert_eq!(format_time(&sample_at(15, 4, 5, 0)), "03:04:05 PM");
        assert_eq!(format_time(&sample_at(0, 0, 0, 0)), "12:00:00 AM");
        assert_eq!(format_time(&sample_at(12, 30, 59, 999)), "12:30:59 PM");
        assert_eq!(format_time(&sample_at(9, 5, 7, 0)), "09:05:07 AM");
    }

    #[test]
    fn lines_are_centered_below_the_center() {
        let layout = ClockLayout::vintage();
        let mut list = DrawList::new();
        draw_label(&mut list, &layout, &ClockFonts::placeholder(), &sample_at(15, 4, 5, 0));

        let texts: Vec<(String, Vec2)> = list
            .items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Text(t) if i.key.z == layer::LABEL => Some((t.text.clone(), t.position)),
                _ => None,
            })
            .collect();

        assert_eq!(
            texts,
            vec![
                ("07 March 2025".to_string(), Vec2::new(300.0, 335.0)),
                ("03:04:05 PM".to_string(), Vec2::new(300.0, 360.0)),
            ]
        );
    }
}
