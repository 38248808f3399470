use std::fmt;

use fontdue::layout::Layout;

use crate::coords::Vec2;
use crate::scene::TextAnchor;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

impl FontId {
    /// Builds a handle from a raw slot index.
    ///
    /// Draw commands referencing a slot the `FontSystem` does not hold are
    /// skipped by the text renderer with a warning.
    #[inline]
    pub const fn from_raw(index: usize) -> Self {
        Self(index)
    }
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is owned by the application
/// and passed to the scene renderer each frame so new glyphs can be
/// rasterized on demand.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        if bytes.is_empty() {
            return Err(FontLoadError("empty font data".to_string()));
        }
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Returns a reference to the underlying `fontdue::Font`, if `id` is valid.
    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Extent of an already laid-out block whose glyphs all come from `font`.
pub(crate) fn measure_layout(font: &fontdue::Font, layout: &Layout<()>, size: f32) -> Vec2 {
    let glyphs = layout.glyphs();
    if glyphs.is_empty() {
        return Vec2::new(0.0, size * 1.2);
    }

    // Pen position after each glyph rather than the bitmap right edge, so
    // trailing side bearings count toward the width the way advances do.
    let w = glyphs
        .iter()
        .map(|g| {
            let m = font.metrics_indexed(g.key.glyph_index, size);
            (g.x - m.xmin as f32 + m.advance_width).max(0.0)
        })
        .fold(0.0f32, f32::max);
    let h = layout.height().max(size);
    Vec2::new(w, h)
}

/// Top-left corner of a block of `extent` placed at `position` with `anchor`.
#[inline]
pub fn anchored_origin(position: Vec2, anchor: TextAnchor, extent: Vec2) -> Vec2 {
    match anchor {
        TextAnchor::TopLeft => position,
        TextAnchor::Center => position - extent * 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_garbage_bytes() {
        let mut fs = FontSystem::new();
        assert!(fs.load_font(&[]).is_err());
        assert!(fs.load_font(b"definitely not a font").is_err());
        assert!(fs.is_empty());
    }

    #[test]
    fn center_anchor_offsets_by_half_extent() {
        let origin = anchored_origin(
            Vec2::new(300.0, 335.0),
            TextAnchor::Center,
            Vec2::new(100.0, 20.0),
        );
        assert_eq!(origin, Vec2::new(250.0, 325.0));
    }

    #[test]
    fn top_left_anchor_is_identity() {
        let p = Vec2::new(12.0, 34.0);
        assert_eq!(anchored_origin(p, TextAnchor::TopLeft, Vec2::new(50.0, 50.0)), p);
    }
}
