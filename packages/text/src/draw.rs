//! Aligned text placement onto a [`Canvas`].
//!
//! The canvas measures and paints. This module only decides which attributes
//! are used and where the text box lands relative to an anchor point.

use crate::{
    alignment::{HorizontalAlignment, VerticalAlignment},
    attributed::TextAttributes,
    color::Color,
    font::FontDescriptor,
};

/// A point in canvas coordinates. `y` grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate, growing downward.
    pub y: f64,
}

impl Point {
    /// A point at (`x`, `y`).
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width and height in canvas units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// A size of `width` by `height`.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle anchored at its top-left `origin`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Width and height.
    pub size: Size,
}

impl Rect {
    /// A rectangle with its top-left corner at `origin`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// The right edge.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// The bottom edge.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }
}

/// A surface that can measure and paint text.
pub trait Canvas {
    /// The unconstrained size `text` occupies when drawn with `attributes`.
    fn measure(&self, text: &str, attributes: &TextAttributes) -> Size;

    /// Paints `text` inside `rect`.
    fn draw_text(&mut self, text: &str, rect: Rect, attributes: &TextAttributes);
}

/// How [`draw_text`] styles and positions text.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOptions {
    /// Font to measure and draw with.
    pub font: FontDescriptor,
    /// Fill color.
    pub color: Color,
    /// Horizontal placement relative to the anchor point.
    pub horizontal: HorizontalAlignment,
    /// Vertical placement relative to the anchor point.
    pub vertical: VerticalAlignment,
}

impl DrawOptions {
    /// Replaces the font.
    #[must_use]
    pub fn font(mut self, font: FontDescriptor) -> Self {
        self.font = font;
        self
    }

    /// Replaces the fill color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Replaces the horizontal alignment.
    #[must_use]
    pub const fn horizontal(mut self, horizontal: HorizontalAlignment) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Replaces the vertical alignment.
    #[must_use]
    pub const fn vertical(mut self, vertical: VerticalAlignment) -> Self {
        self.vertical = vertical;
        self
    }

    fn attributes(&self) -> TextAttributes {
        TextAttributes::new(self.font.clone(), self.color)
    }
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            font: FontDescriptor::default(),
            color: Color::BLACK,
            horizontal: HorizontalAlignment::default(),
            vertical: VerticalAlignment::default(),
        }
    }
}

/// The rectangle of `size` placed so that `point` sits at the given alignment
/// within it.
#[must_use]
pub fn aligned_rect(
    point: Point,
    size: Size,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
) -> Rect {
    Rect::new(
        Point::new(
            point.x - horizontal.offset(size.width),
            point.y - vertical.offset(size.height),
        ),
        size,
    )
}

/// Measures `text`, aligns it around `at` and draws it. Returns the rectangle
/// the text was drawn into.
pub fn draw_text(
    canvas: &mut impl Canvas,
    text: &str,
    at: Point,
    options: &DrawOptions,
) -> Rect {
    let attributes = options.attributes();
    let size = canvas.measure(text, &attributes);
    let rect = aligned_rect(at, size, options.horizontal, options.vertical);

    log::trace!(
        "draw_text: {text:?} at ({}, {}) {}/{} -> {rect:?}",
        at.x,
        at.y,
        options.horizontal,
        options.vertical,
    );

    canvas.draw_text(text, rect, &attributes);

    rect
}

/// The unconstrained size of `text` in `font`.
#[must_use]
pub fn text_size(canvas: &impl Canvas, text: &str, font: &FontDescriptor) -> Size {
    canvas.measure(text, &TextAttributes::new(font.clone(), Color::BLACK))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(HorizontalAlignment::Left, VerticalAlignment::Top, 100.0, 50.0 ; "left_top")]
    #[test_case(HorizontalAlignment::Center, VerticalAlignment::Middle, 85.0, 44.0 ; "center_middle")]
    #[test_case(HorizontalAlignment::Right, VerticalAlignment::Bottom, 70.0, 38.0 ; "right_bottom")]
    #[test_case(HorizontalAlignment::Justified, VerticalAlignment::Middle, 100.0, 44.0 ; "justified_middle")]
    fn test_aligned_rect(
        horizontal: HorizontalAlignment,
        vertical: VerticalAlignment,
        x: f64,
        y: f64,
    ) {
        let rect = aligned_rect(
            Point::new(100.0, 50.0),
            Size::new(30.0, 12.0),
            horizontal,
            vertical,
        );

        assert_eq!(rect.origin, Point::new(x, y));
        assert_eq!(rect.size, Size::new(30.0, 12.0));
    }

    #[test_log::test]
    fn test_rect_extents() {
        let rect = Rect::new(Point::new(1.0, 2.0), Size::new(3.0, 4.0));
        assert_eq!(rect.max_x(), 4.0);
        assert_eq!(rect.max_y(), 6.0);
    }

    #[test_log::test]
    fn test_default_options() {
        let options = DrawOptions::default();
        assert_eq!(options.font, FontDescriptor::system(12.0));
        assert_eq!(options.color, Color::BLACK);
        assert_eq!(options.horizontal, HorizontalAlignment::Center);
        assert_eq!(options.vertical, VerticalAlignment::Middle);
    }
}
