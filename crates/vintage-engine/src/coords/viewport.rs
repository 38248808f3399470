/// Drawable area in logical pixels.
///
/// Renderers upload this to their viewport uniform to map logical px to NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size clamped to at least one pixel per axis, as uploaded to shaders.
    #[inline]
    pub(crate) fn uniform_size(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_size_never_drops_below_one() {
        assert_eq!(Viewport::new(0.0, 0.0).uniform_size(), [1.0, 1.0]);
        assert_eq!(Viewport::new(0.5, 600.0).uniform_size(), [1.0, 600.0]);
    }
}
