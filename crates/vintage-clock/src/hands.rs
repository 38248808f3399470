//! Hour, minute and second hands plus the center cap.

use vintage_engine::paint::Color;
use vintage_engine::scene::DrawList;

use crate::geometry::{polar_to_pixel, Pixel};
use crate::layer;
use crate::layout::{ClockLayout, HandStyle};
use crate::time_sample::TimeSample;

/// Screen angles of the three hands, in degrees (-90° is 12 o'clock).
///
/// Every hand includes the sub-second fraction, so all three sweep
/// continuously instead of stepping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn from_sample(sample: &TimeSample) -> Self {
        let seconds = sample.second_fraction();
        let minutes = f64::from(sample.minute());
        let hours = f64::from(sample.hour12());

        Self {
            hour: (hours + minutes / 60.0 + seconds / 3600.0) * 30.0 - 90.0,
            minute: (minutes + seconds / 60.0) * 6.0 - 90.0,
            second: seconds * 6.0 - 90.0,
        }
    }

    /// Direction of the second hand's tail.
    #[inline]
    pub fn counterweight(&self) -> f64 {
        self.second + 180.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
    Counterweight,
}

/// A hand as a segment from the dial center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSegment {
    pub kind: HandKind,
    pub from: Pixel,
    pub to: Pixel,
    pub thickness: f32,
    pub color: Color,
}

/// Segments in paint order: hour, minute, second, counterweight.
pub fn hand_segments(layout: &ClockLayout, angles: &HandAngles) -> [HandSegment; 4] {
    let palette = &layout.palette;
    let segment = |kind, style: HandStyle, angle, color| HandSegment {
        kind,
        from: layout.center,
        to: polar_to_pixel(layout.center, style.length, angle),
        thickness: style.thickness,
        color,
    };

    [
        segment(HandKind::Hour, layout.hour_hand, angles.hour, palette.hour_hand),
        segment(HandKind::Minute, layout.minute_hand, angles.minute, palette.minute_hand),
        segment(HandKind::Second, layout.second_hand, angles.second, palette.second_hand),
        segment(
            HandKind::Counterweight,
            layout.counterweight,
            angles.counterweight(),
            palette.second_hand,
        ),
    ]
}

/// Records the hands on [`layer::HANDS`] and the cap on [`layer::CAP`].
pub fn draw_hands(list: &mut DrawList, layout: &ClockLayout, sample: &TimeSample) {
    let angles = HandAngles::from_sample(sample);

    for hand in hand_segments(layout, &angles) {
        list.push_line(
            layer::HANDS,
            hand.from.to_vec2(),
            hand.to.to_vec2(),
            hand.thickness,
            hand.color,
        );
    }

    let center = layout.center.to_vec2();
    let palette = &layout.palette;
    list.push_solid_circle(layer::CAP, center, layout.cap_outer_radius, palette.cap_outer);
    list.push_solid_circle(layer::CAP, center, layout.cap_inner_radius, palette.cap_inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_sample::sample_at;
    use vintage_engine::scene::DrawCmd;

    const EPS: f64 = 1e-9;

    fn forward_delta(from: f64, to: f64) -> f64 {
        (to - from).rem_euclid(360.0)
    }

    // ── angles ────────────────────────────────────────────────────────────

    #[test]
    fn top_of_the_minute_points_up() {
        let a = HandAngles::from_sample(&sample_at(10, 0, 0, 0));
        assert_eq!(a.second, -90.0);
        assert_eq!(a.minute, -90.0);
    }

    #[test]
    fn three_oclock_points_right() {
        let layout = ClockLayout::vintage();
        for h in [3, 15] {
            let a = HandAngles::from_sample(&sample_at(h, 0, 0, 0));
            assert_eq!(a.hour, 0.0);

            let hour = hand_segments(&layout, &a)[0];
            assert_eq!(hour.kind, HandKind::Hour);
            assert!(hour.to.x > layout.center.x);
            assert_eq!(hour.to.y, layout.center.y);
        }
    }

    #[test]
    fn six_oclock_points_down() {
        let layout = ClockLayout::vintage();
        let a = HandAngles::from_sample(&sample_at(6, 0, 0, 0));
        assert_eq!(a.hour, 90.0);

        let hour = hand_segments(&layout, &a)[0];
        assert_eq!(hour.to.x, layout.center.x);
        assert!(hour.to.y > layout.center.y);
    }

    #[test]
    fn sub_second_fraction_moves_every_hand() {
        let whole = HandAngles::from_sample(&sample_at(4, 20, 30, 0));
        let half = HandAngles::from_sample(&sample_at(4, 20, 30, 500));
        assert!((half.second - whole.second - 3.0).abs() < EPS);
        assert!((half.minute - whole.minute - 0.05).abs() < EPS);
        assert!((half.hour - whole.hour - 15.0 / 3600.0).abs() < EPS);
    }

    #[test]
    fn one_second_advances_each_hand_by_its_rate() {
        let cases = [
            (sample_at(4, 20, 30, 250), sample_at(4, 20, 31, 250)),
            // Across a minute and an hour boundary.
            (sample_at(11, 59, 59, 0), sample_at(12, 0, 0, 0)),
            (sample_at(23, 14, 59, 900), sample_at(23, 15, 0, 900)),
        ];

        for (before, after) in cases {
            let a = HandAngles::from_sample(&before);
            let b = HandAngles::from_sample(&after);
            assert!((forward_delta(a.second, b.second) - 6.0).abs() < EPS, "{before:?}");
            assert!((forward_delta(a.minute, b.minute) - 0.1).abs() < EPS, "{before:?}");
            assert!((forward_delta(a.hour, b.hour) - 30.0 / 3600.0).abs() < EPS, "{before:?}");
        }
    }

    // ── segments ──────────────────────────────────────────────────────────

    #[test]
    fn counterweight_is_opposite_the_second_hand() {
        let layout = ClockLayout::vintage();
        let a = HandAngles::from_sample(&sample_at(0, 0, 15, 0));
        let [_, _, second, tail] = hand_segments(&layout, &a);

        assert_eq!(second.kind, HandKind::Second);
        assert_eq!(tail.kind, HandKind::Counterweight);
        assert!(second.to.x > layout.center.x);
        assert!(tail.to.x < layout.center.x);
        assert_eq!(tail.color, second.color);
        assert_eq!(tail.thickness, layout.counterweight.thickness);
    }

    #[test]
    fn every_hand_starts_at_the_center() {
        let layout = ClockLayout::vintage();
        let a = HandAngles::from_sample(&sample_at(8, 47, 12, 333));
        for hand in hand_segments(&layout, &a) {
            assert_eq!(hand.from, layout.center);
        }
    }

    // ── recording ─────────────────────────────────────────────────────────

    #[test]
    fn cap_is_recorded_above_the_hands() {
        let layout = ClockLayout::vintage();
        let mut list = DrawList::new();
        draw_hands(&mut list, &layout, &sample_at(1, 2, 3, 0));

        let items = list.items();
        assert_eq!(items.len(), 6);
        assert!(items[..4].iter().all(|i| i.key.z == layer::HANDS));
        assert!(items[..4].iter().all(|i| matches!(i.cmd, DrawCmd::Line(_))));
        assert!(items[4..].iter().all(|i| i.key.z == layer::CAP));

        let radii: Vec<f32> = items[4..]
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Circle(c) => Some(c.radius),
                _ => None,
            })
            .collect();
        assert_eq!(radii, vec![layout.cap_outer_radius, layout.cap_inner_radius]);
        assert!(layer::CAP > layer::HANDS);
    }
}
