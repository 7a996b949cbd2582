//! Horizontal and vertical text alignment.

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Where text sits relative to its anchor point horizontally.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum HorizontalAlignment {
    /// The anchor is the left edge.
    Left,
    /// The anchor is the horizontal center.
    #[default]
    Center,
    /// The anchor is the right edge.
    Right,
    /// Positioned like [`Self::Left`]; spacing is left to the canvas.
    Justified,
}

impl HorizontalAlignment {
    /// The display name, e.g. `"Center"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// How far left of the anchor the text box starts, for a box `width` wide.
    #[must_use]
    pub fn offset(self, width: f64) -> f64 {
        match self {
            Self::Left | Self::Justified => 0.0,
            Self::Center => width / 2.0,
            Self::Right => width,
        }
    }
}

/// Where text sits relative to its anchor point vertically.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum VerticalAlignment {
    /// The anchor is the top edge.
    Top,
    /// The anchor is the vertical middle.
    #[default]
    Middle,
    /// The anchor is the bottom edge.
    Bottom,
}

impl VerticalAlignment {
    /// The display name, e.g. `"Middle"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// How far above the anchor the text box starts, for a box `height` tall.
    #[must_use]
    pub fn offset(self, height: f64) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Middle => height / 2.0,
            Self::Bottom => height,
        }
    }
}
