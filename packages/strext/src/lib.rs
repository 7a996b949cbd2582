//! `strext` unified package.
//!
//! Re-exports the `strext` crates behind feature flags.
//!
//! # Features
//!
//! * `all` - Enable every component with no optional features
//! * `all-default` - Enable every component with its default features
//! * `date-utils`, `string-utils`, `text` - Enable a single component

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Round-trip date parsing against an ordered list of candidate patterns.
#[cfg(feature = "date-utils")]
pub use strext_date_utils as date_utils;
/// `str` and `String` extension traits: case, trimming, padding, indexing and matching.
#[cfg(feature = "string-utils")]
pub use strext_string_utils as string_utils;
/// Attributed text, colors, fonts and aligned drawing onto a canvas.
#[cfg(feature = "text")]
pub use strext_text as text;
