//! Polar to screen mapping around the dial center.

use vintage_engine::coords::Vec2;

/// Integer screen position (top-left origin, +Y down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Maps `(radius, angle_deg)` around `center` to a pixel.
///
/// Angles are in degrees on screen axes: 0° points right and grows
/// clockwise, so a dial position `p` uses `p - 90` to start at 12 o'clock.
/// Coordinates are truncated toward zero.
pub fn polar_to_pixel(center: Pixel, radius: f32, angle_deg: f64) -> Pixel {
    let theta = angle_deg.to_radians();
    let r = f64::from(radius);
    let x = f64::from(center.x) + r * theta.cos();
    let y = f64::from(center.y) + r * theta.sin();
    Pixel::new(x as i32, y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Pixel = Pixel::new(300, 300);

    fn distance(a: Pixel, b: Pixel) -> f64 {
        let dx = f64::from(a.x - b.x);
        let dy = f64::from(a.y - b.y);
        (dx * dx + dy * dy).sqrt()
    }

    #[test]
    fn points_lie_on_the_circle() {
        for r in [35.0f32, 130.0, 185.0, 250.0] {
            let mut angle = -180.0;
            while angle <= 540.0 {
                let p = polar_to_pixel(CENTER, r, angle);
                // Truncation moves each axis by less than one pixel.
                assert!(
                    (distance(p, CENTER) - f64::from(r)).abs() < 1.5,
                    "r={r} angle={angle} -> {p:?}"
                );
                angle += 7.5;
            }
        }
    }

    #[test]
    fn cardinal_directions() {
        assert_eq!(polar_to_pixel(CENTER, 100.0, -90.0), Pixel::new(300, 200));
        assert_eq!(polar_to_pixel(CENTER, 100.0, 0.0), Pixel::new(400, 300));
        assert_eq!(polar_to_pixel(CENTER, 100.0, 180.0), Pixel::new(200, 300));

        let down = polar_to_pixel(CENTER, 100.0, 90.0);
        assert_eq!(down.x, 300);
        assert_eq!(down.y, 400);
    }

    #[test]
    fn zero_radius_maps_to_center() {
        assert_eq!(polar_to_pixel(CENTER, 0.0, 123.4), CENTER);
    }

    #[test]
    fn coordinates_truncate_toward_zero() {
        // cos(45°) * 10 = 7.07..., truncated to 7.
        assert_eq!(polar_to_pixel(Pixel::new(0, 0), 10.0, 45.0), Pixel::new(7, 7));
        assert_eq!(polar_to_pixel(Pixel::new(0, 0), 10.0, 225.0), Pixel::new(-7, -7));
    }
}
