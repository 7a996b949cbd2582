//! Strings carrying runs of display attributes.

use std::{fmt, ops::Range};

use crate::{
    color::Color,
    font::{DEFAULT_FONT_SIZE, FontDescriptor},
};

/// An outline drawn around glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Outline color.
    pub color: Color,
    /// Outline width in points. Zero disables the outline.
    pub width: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            width: 0.0,
        }
    }
}

/// Font, fill color and optional outline for a span of text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextAttributes {
    /// Face and point size.
    pub font: FontDescriptor,
    /// Fill color of the glyphs.
    pub foreground: Color,
    /// Outline, if any.
    pub stroke: Option<Stroke>,
}

impl TextAttributes {
    /// Attributes with no outline.
    #[must_use]
    pub const fn new(font: FontDescriptor, foreground: Color) -> Self {
        Self {
            font,
            foreground,
            stroke: None,
        }
    }

    /// The same attributes with `stroke` as the outline.
    #[must_use]
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// A byte range of an [`AttributedText`] and the attributes applied to it.
///
/// `attributes` is `None` for plain text appended without attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRun {
    /// Byte range into [`AttributedText::as_str`].
    pub range: Range<usize>,
    /// Attributes for the range, or `None` for plain text.
    pub attributes: Option<TextAttributes>,
}

/// A string split into contiguous runs, each with its own attributes.
///
/// Runs always cover the whole string, never overlap, and adjacent runs never
/// share the same attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributedText {
    text: String,
    runs: Vec<AttributeRun>,
}

impl AttributedText {
    /// Plain text with no attributes.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::build(text.into(), None)
    }

    /// Text with `attributes` applied to all of it.
    #[must_use]
    pub fn with_attributes(text: impl Into<String>, attributes: TextAttributes) -> Self {
        Self::build(text.into(), Some(attributes))
    }

    fn build(text: String, attributes: Option<TextAttributes>) -> Self {
        let runs = if text.is_empty() {
            vec![]
        } else {
            vec![AttributeRun {
                range: 0..text.len(),
                attributes,
            }]
        };

        Self { text, runs }
    }

    /// The underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the text has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The attribute runs, in order.
    #[must_use]
    pub fn runs(&self) -> &[AttributeRun] {
        &self.runs
    }

    /// Appends plain text. It joins the last run if that run is also plain.
    pub fn push_str(&mut self, text: &str) {
        self.push_run(text, None);
    }

    /// Appends `other`, keeping its runs.
    pub fn append(&mut self, other: &Self) {
        for run in &other.runs {
            self.push_run(&other.text[run.range.clone()], run.attributes.clone());
        }
    }

    /// Consumes `self` and returns it with `more` appended, optionally separated
    /// by a plain newline.
    #[must_use]
    pub fn appending(mut self, more: &Self, new_line: bool) -> Self {
        if new_line {
            self.push_str("\n");
        }
        self.append(more);
        self
    }

    /// The attributes in effect at byte `index`, if any.
    #[must_use]
    pub fn attributes_at(&self, index: usize) -> Option<&TextAttributes> {
        self.runs
            .iter()
            .find(|run| run.range.contains(&index))
            .and_then(|run| run.attributes.as_ref())
    }

    fn push_run(&mut self, text: &str, attributes: Option<TextAttributes>) {
        if text.is_empty() {
            return;
        }

        let start = self.text.len();
        self.text.push_str(text);
        let end = self.text.len();

        match self.runs.last_mut() {
            Some(last) if last.attributes == attributes => last.range.end = end,
            _ => self.runs.push(AttributeRun {
                range: start..end,
                attributes,
            }),
        }
    }
}

impl From<&str> for AttributedText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AttributedText {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for AttributedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Builds [`AttributedText`] from string slices.
pub trait AttributedExt {
    /// Arial text, bold or regular, in `color`.
    #[must_use]
    fn attr(&self, bold: bool, size: f64, color: Color) -> AttributedText;

    /// Bold label text. Defaults to 13 pt light gray.
    #[must_use]
    fn as_label(&self, size: Option<f64>, color: Option<Color>) -> AttributedText;

    /// Regular value text. Defaults to 13 pt gray.
    #[must_use]
    fn as_value(&self, size: Option<f64>, color: Option<Color>) -> AttributedText;

    /// Like [`Self::attr`], with an outline.
    #[must_use]
    fn attr_stroked(
        &self,
        size: f64,
        bold: bool,
        color: Color,
        stroke_color: Color,
        stroke_width: f64,
    ) -> AttributedText;
}

impl AttributedExt for str {
    fn attr(&self, bold: bool, size: f64, color: Color) -> AttributedText {
        AttributedText::with_attributes(
            self,
            TextAttributes::new(FontDescriptor::arial(size, bold, false), color),
        )
    }

    fn as_label(&self, size: Option<f64>, color: Option<Color>) -> AttributedText {
        self.attr(
            true,
            size.unwrap_or(DEFAULT_FONT_SIZE),
            color.unwrap_or(Color::LIGHT_GRAY),
        )
    }

    fn as_value(&self, size: Option<f64>, color: Option<Color>) -> AttributedText {
        self.attr(
            false,
            size.unwrap_or(DEFAULT_FONT_SIZE),
            color.unwrap_or(Color::GRAY),
        )
    }

    fn attr_stroked(
        &self,
        size: f64,
        bold: bool,
        color: Color,
        stroke_color: Color,
        stroke_width: f64,
    ) -> AttributedText {
        let attributes = TextAttributes::new(FontDescriptor::arial(size, bold, false), color)
            .with_stroke(Stroke {
                color: stroke_color,
                width: stroke_width,
            });

        AttributedText::with_attributes(self, attributes)
    }
}
