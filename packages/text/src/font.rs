//! Font descriptors.
//!
//! A [`FontDescriptor`] only names a font. Resolving that name to glyphs is the
//! [`crate::Canvas`] implementation's job.

/// Point size used by the label and value helpers when none is given.
pub const DEFAULT_FONT_SIZE: f64 = 13.0;

/// Point size used for drawing when no font is given.
pub const DEFAULT_DRAW_FONT_SIZE: f64 = 12.0;

/// Name used for the platform's system font.
pub const SYSTEM_FONT_NAME: &str = "System";

/// A font family/face name and a point size.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// The face name, e.g. `Arial-BoldMT`.
    pub name: String,
    /// The size in points.
    pub size: f64,
}

impl FontDescriptor {
    /// A font with an explicit face name.
    #[must_use]
    pub fn new(name: impl Into<String>, size: f64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// The platform's system font.
    #[must_use]
    pub fn system(size: f64) -> Self {
        Self::new(SYSTEM_FONT_NAME, size)
    }

    /// The Arial face matching `bold` and `italic`.
    #[must_use]
    pub fn arial(size: f64, bold: bool, italic: bool) -> Self {
        let name = match (bold, italic) {
            (true, true) => "Arial-BoldItalicMT",
            (true, false) => "Arial-BoldMT",
            (false, true) => "Arial-ItalicMT",
            (false, false) => "ArialMT",
        };

        Self::new(name, size)
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::system(DEFAULT_DRAW_FONT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(false, false, "ArialMT" ; "regular")]
    #[test_case(true, false, "Arial-BoldMT" ; "bold")]
    #[test_case(false, true, "Arial-ItalicMT" ; "italic")]
    #[test_case(true, true, "Arial-BoldItalicMT" ; "bold_italic")]
    fn test_arial_faces(bold: bool, italic: bool, expected: &str) {
        let font = FontDescriptor::arial(14.0, bold, italic);
        assert_eq!(font.name, expected);
        assert_eq!(font.size, 14.0);
    }

    #[test_log::test]
    fn test_default_is_system_font() {
        assert_eq!(
            FontDescriptor::default(),
            FontDescriptor::new("System", 12.0)
        );
    }
}
