// Copyright 2026 the Shapeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill and stroke styling.

use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A straight-alpha sRGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component, 255 is fully opaque.
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba8(0, 0, 0, 0);
    /// Black.
    pub const BLACK: Color = Color::rgb8(0, 0, 0);
    /// White.
    pub const WHITE: Color = Color::rgb8(255, 255, 255);
    /// Red.
    pub const RED: Color = Color::rgb8(255, 0, 0);
    /// Green, as in CSS (`#008000`).
    pub const GREEN: Color = Color::rgb8(0, 128, 0);
    /// Blue.
    pub const BLUE: Color = Color::rgb8(0, 0, 255);
    /// Yellow.
    pub const YELLOW: Color = Color::rgb8(255, 255, 0);
    /// Cyan.
    pub const CYAN: Color = Color::rgb8(0, 255, 255);
    /// Magenta.
    pub const MAGENTA: Color = Color::rgb8(255, 0, 255);
    /// Gray, as in CSS (`#808080`).
    pub const GRAY: Color = Color::rgb8(128, 128, 128);
    /// Orange, as in CSS (`#ffa500`).
    pub const ORANGE: Color = Color::rgb8(255, 165, 0);
    /// Purple, as in CSS (`#800080`).
    pub const PURPLE: Color = Color::rgb8(128, 0, 128);

    /// An opaque color from its components.
    #[inline]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    /// A color from its components, including alpha.
    #[inline]
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Look up a named color, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Color> {
        const NAMES: [(&str, Color); 13] = [
            ("black", Color::BLACK),
            ("white", Color::WHITE),
            ("red", Color::RED),
            ("green", Color::GREEN),
            ("blue", Color::BLUE),
            ("yellow", Color::YELLOW),
            ("cyan", Color::CYAN),
            ("magenta", Color::MAGENTA),
            ("gray", Color::GRAY),
            ("grey", Color::GRAY),
            ("orange", Color::ORANGE),
            ("purple", Color::PURPLE),
            ("transparent", Color::TRANSPARENT),
        ];
        NAMES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
    }

    /// Parse a color that may be `"none"`, which yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Fails the same way as [`Color::from_str`] for anything else.
    pub fn parse_optional(s: &str) -> Result<Option<Color>, ParseColorError> {
        if s.trim().eq_ignore_ascii_case("none") {
            Ok(None)
        } else {
            s.parse().map(Some)
        }
    }

    /// The same color with its alpha scaled by `factor`, clamped to `[0, 1]`.
    #[must_use]
    pub fn multiply_alpha(self, factor: f64) -> Color {
        let a = (f64::from(self.a) * factor.clamp(0.0, 1.0)).round();
        Color { a: a as u8, ..self }
    }

    /// Alpha as a fraction in `[0, 1]`.
    #[inline]
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Whether the color is fully transparent.
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a color name (`"blue"`) or a `#rrggbb` / `#rrggbbaa` hex code.
    fn from_str(s: &str) -> Result<Color, ParseColorError> {
        let s = s.trim();
        let Some(hex) = s.strip_prefix('#') else {
            return Color::from_name(s).ok_or(ParseColorError::UnknownName);
        };
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex);
        }
        let component = |ix: usize| {
            u8::from_str_radix(&hex[ix..ix + 2], 16).map_err(|_| ParseColorError::InvalidHex)
        };
        let a = if hex.len() == 8 { component(6)? } else { 255 };
        Ok(Color::rgba8(component(0)?, component(2)?, component(4)?, a))
    }
}

impl fmt::Display for Color {
    /// Formats as `#rrggbb`, or `#rrggbbaa` when not opaque.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// An error which can be returned when parsing a [`Color`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseColorError {
    /// The input is not a known color name.
    UnknownName,
    /// The input starts with `#` but is not 6 or 8 hex digits.
    InvalidHex,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::UnknownName => write!(f, "unknown color name"),
            ParseColorError::InvalidHex => write!(f, "invalid hex color"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseColorError {}

/// Styling options applied when a shape is drawn.
///
/// Every field is applied independently. A `None` color disables that part
/// of the drawing, like `"none"` in plotting libraries.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    /// Stroke color of the boundary. Defaults to black.
    pub edgecolor: Option<Color>,
    /// Fill color of the interior. Defaults to `None` (unfilled).
    pub facecolor: Option<Color>,
    /// Stroke width in points. Defaults to 2.
    pub linewidth: f64,
    /// Opacity of both fill and stroke, in `[0, 1]`. Defaults to 1.
    pub alpha: f64,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            edgecolor: Some(Color::BLACK),
            facecolor: None,
            linewidth: 2.0,
            alpha: 1.0,
        }
    }
}

impl Style {
    /// The default style: black 2pt outline, no fill, fully opaque.
    #[inline]
    pub fn new() -> Style {
        Style::default()
    }

    /// Set the stroke color; pass `None` to disable the stroke.
    #[must_use]
    pub fn with_edgecolor(mut self, color: impl Into<Option<Color>>) -> Style {
        self.edgecolor = color.into();
        self
    }

    /// Set the fill color; pass `None` to leave the interior unfilled.
    #[must_use]
    pub fn with_facecolor(mut self, color: impl Into<Option<Color>>) -> Style {
        self.facecolor = color.into();
        self
    }

    /// Set the stroke width in points.
    #[must_use]
    pub fn with_linewidth(mut self, linewidth: f64) -> Style {
        self.linewidth = linewidth;
        self
    }

    /// Set the opacity, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Style {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// The color to fill the interior with, with `alpha` applied.
    ///
    /// `None` when there is nothing visible to fill.
    pub fn fill_color(&self) -> Option<Color> {
        self.facecolor
            .map(|color| color.multiply_alpha(self.alpha))
            .filter(|color| !color.is_transparent())
    }

    /// The color to stroke the boundary with, with `alpha` applied.
    ///
    /// `None` when there is nothing visible to stroke, including a
    /// non-positive line width.
    pub fn stroke_color(&self) -> Option<Color> {
        if self.linewidth.is_nan() || self.linewidth <= 0.0 {
            return None;
        }
        self.edgecolor
            .map(|color| color.multiply_alpha(self.alpha))
            .filter(|color| !color.is_transparent())
    }

    /// Half the stroke width in points, or zero when nothing is stroked.
    pub fn stroke_extent(&self) -> f64 {
        if self.stroke_color().is_some() {
            0.5 * self.linewidth
        } else {
            0.0
        }
    }
}
