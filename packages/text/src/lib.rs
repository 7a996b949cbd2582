//! Attributed text, colors, fonts and aligned text placement for `strext`.
//!
//! Nothing here rasterizes glyphs. [`draw_text`] measures text through a caller
//! supplied [`Canvas`], places the resulting box around an anchor [`Point`]
//! according to [`HorizontalAlignment`] and [`VerticalAlignment`], and hands the
//! canvas the rectangle and [`TextAttributes`] to paint with.
//!
//! ```rust
//! use strext_text::{AttributedExt as _, Color};
//!
//! let line = "Name: ".as_label(None, None).appending(&"Ada".as_value(None, None), false);
//! assert_eq!(line.as_str(), "Name: Ada");
//! assert_eq!(line.attributes_at(0).map(|a| a.foreground), Some(Color::LIGHT_GRAY));
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod alignment;
pub mod attributed;
pub mod color;
pub mod draw;
pub mod font;

pub use alignment::{HorizontalAlignment, VerticalAlignment};
pub use attributed::{AttributeRun, AttributedExt, AttributedText, Stroke, TextAttributes};
pub use color::{Color, ParseColorError};
pub use draw::{Canvas, DrawOptions, Point, Rect, Size, aligned_rect, draw_text, text_size};
pub use font::{DEFAULT_FONT_SIZE, FontDescriptor};
