//! Serif font discovery.

use std::path::Path;

use anyhow::{anyhow, Result};
use vintage_engine::text::{FontId, FontSystem};

/// Bold serif faces for the numerals, most preferred first.
const BOLD_SERIF: &[&str] = &[
    "/usr/share/fonts/truetype/msttcorefonts/Times_New_Roman_Bold.ttf",
    "/usr/share/fonts/TTF/timesbd.ttf",
    "/Library/Fonts/Times New Roman Bold.ttf",
    "/System/Library/Fonts/Supplemental/Times New Roman Bold.ttf",
    "C:\\Windows\\Fonts\\timesbd.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Bold.ttf",
    "/usr/share/fonts/liberation-serif/LiberationSerif-Bold.ttf",
    "/usr/share/fonts/TTF/LiberationSerif-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSerif-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSerif-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSerif-Bold.ttf",
    "/usr/share/fonts/noto/NotoSerif-Bold.ttf",
];

/// Regular serif faces for the date and time.
const REGULAR_SERIF: &[&str] = &[
    "/usr/share/fonts/truetype/msttcorefonts/Times_New_Roman.ttf",
    "/usr/share/fonts/TTF/times.ttf",
    "/Library/Fonts/Times New Roman.ttf",
    "/System/Library/Fonts/Supplemental/Times New Roman.ttf",
    "C:\\Windows\\Fonts\\times.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
    "/usr/share/fonts/liberation-serif/LiberationSerif-Regular.ttf",
    "/usr/share/fonts/TTF/LiberationSerif-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/TTF/DejaVuSerif.ttf",
    "/usr/share/fonts/truetype/noto/NotoSerif-Regular.ttf",
    "/usr/share/fonts/noto/NotoSerif-Regular.ttf",
];

/// Font handles used by the dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFonts {
    pub numeral: FontId,
    pub label: FontId,
}

impl ClockFonts {
    /// Handles that refer to no loaded font, for recording without a font system.
    #[cfg(test)]
    pub(crate) fn placeholder() -> Self {
        Self { numeral: FontId::from_raw(0), label: FontId::from_raw(1) }
    }
}

/// Loads the numeral and label faces into `fonts`.
///
/// A missing bold face falls back to the regular one. No usable regular
/// face is a fatal startup error.
pub fn load_clock_fonts(fonts: &mut FontSystem) -> Result<ClockFonts> {
    let label = load_first(fonts, REGULAR_SERIF).ok_or_else(|| {
        anyhow!("no serif font found; searched: {}", REGULAR_SERIF.join(", "))
    })?;

    let numeral = load_first(fonts, BOLD_SERIF).unwrap_or_else(|| {
        log::warn!("no bold serif font found; numerals use the regular face");
        label
    });

    Ok(ClockFonts { numeral, label })
}

/// Loads the first candidate that exists and parses.
fn load_first<P: AsRef<Path>>(fonts: &mut FontSystem, candidates: &[P]) -> Option<FontId> {
    for path in candidates {
        let path = path.as_ref();
        let Ok(bytes) = std::fs::read(path) else { continue };

        match fonts.load_font(&bytes) {
            Ok(id) => {
                log::info!("loaded font {}", path.display());
                return Some(id);
            }
            Err(e) => log::warn!("skipping {}: {e}", path.display()),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_candidates_yield_nothing() {
        let mut fonts = FontSystem::new();
        let found = load_first(&mut fonts, &["/nonexistent/vintage-clock/serif.ttf"]);
        assert!(found.is_none());
        assert!(fonts.is_empty());
    }

    #[test]
    fn unparsable_files_are_skipped() {
        let path = std::env::temp_dir().join(format!("vintage-clock-{}.ttf", std::process::id()));
        std::fs::write(&path, b"definitely not a font").expect("write temp file");

        let mut fonts = FontSystem::new();
        let found = load_first(&mut fonts, &[path.as_path()]);
        let _ = std::fs::remove_file(&path);

        assert!(found.is_none());
        assert!(fonts.is_empty());
    }
}
