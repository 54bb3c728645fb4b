//! Colours and colour maps applied to progress bars.

use crate::error::ProgressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque RGB colour, rendered as lower-case `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or `#aarrggbb`; the `#` is optional and alpha is ignored.
    ///
    /// # Errors
    /// Returns [`ProgressError::InvalidColor`] for anything else.
    pub fn from_hex(raw: &str) -> Result<Self, ProgressError> {
        let trimmed = raw.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ProgressError::InvalidColor {
                message: format!("'{raw}' is not a #rrggbb or #aarrggbb hex colour").into(),
                context: None,
            });
        }

        let rgb = &hex[hex.len() - 6..];
        let channel = |i: usize| {
            u8::from_str_radix(&rgb[i..i + 2], 16).map_err(|e| ProgressError::InvalidColor {
                message: e.to_string().into(),
                context: Some(format!("Parsing '{raw}'").into()),
            })
        };

        Ok(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }

    /// Linear interpolation towards `other`; `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| {
            let (a, b) = (f64::from(a), f64::from(b));
            (b - a).mul_add(t, a).round().clamp(0.0, 255.0) as u8
        };
        Self { r: mix(self.r, other.r), g: mix(self.g, other.g), b: mix(self.b, other.b) }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ProgressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// ColorBrewer `RdBu`, dark red to dark blue.
const RED_BLUE: [Color; 11] = [
    Color::rgb(0x67, 0x00, 0x1f),
    Color::rgb(0xb2, 0x18, 0x2b),
    Color::rgb(0xd6, 0x60, 0x4d),
    Color::rgb(0xf4, 0xa5, 0x82),
    Color::rgb(0xfd, 0xdb, 0xc7),
    Color::rgb(0xf7, 0xf7, 0xf7),
    Color::rgb(0xd1, 0xe5, 0xf0),
    Color::rgb(0x92, 0xc5, 0xde),
    Color::rgb(0x43, 0x93, 0xc3),
    Color::rgb(0x21, 0x66, 0xac),
    Color::rgb(0x05, 0x30, 0x61),
];

/// Maps a bar's progress `t` (0 = empty, 1 = full) to a colour.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorMap {
    /// Same colour regardless of progress.
    Constant(Color),
    Gradient(Gradient),
}

/// Evenly spaced colour stops with linear interpolation in between.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<Color>,
    quantize: Option<u32>,
}

impl ColorMap {
    /// Builds a gradient from at least one stop.
    ///
    /// # Errors
    /// Returns [`ProgressError::InvalidColor`] if `stops` is empty.
    pub fn gradient(stops: Vec<Color>) -> Result<Self, ProgressError> {
        if stops.is_empty() {
            return Err(ProgressError::InvalidColor {
                message: "a gradient needs at least one colour stop".into(),
                context: None,
            });
        }
        Ok(Self::Gradient(Gradient { stops, quantize: None }))
    }

    /// Parses hex stops (see [`Color::from_hex`]) into a gradient.
    ///
    /// # Errors
    /// Returns [`ProgressError::InvalidColor`] for empty lists or malformed colours.
    pub fn from_hex_stops<S: AsRef<str>>(stops: &[S]) -> Result<Self, ProgressError> {
        let stops =
            stops.iter().map(|s| Color::from_hex(s.as_ref())).collect::<Result<Vec<_>, _>>()?;
        Self::gradient(stops)
    }

    /// Diverging red-to-blue palette.
    #[must_use]
    pub fn red_blue() -> Self {
        Self::Gradient(Gradient { stops: RED_BLUE.to_vec(), quantize: None })
    }

    /// Snaps lookups to multiples of `1 / steps`; `0` disables snapping.
    #[must_use]
    pub fn quantized(self, steps: u32) -> Self {
        match self {
            Self::Gradient(gradient) => Self::Gradient(Gradient {
                quantize: (steps > 0).then_some(steps),
                ..gradient
            }),
            constant @ Self::Constant(_) => constant,
        }
    }

    /// Colour at position `t`; values outside `[0, 1]` (and NaN) are clamped.
    #[must_use]
    pub fn sample(&self, t: f64) -> Color {
        match self {
            Self::Constant(color) => *color,
            Self::Gradient(gradient) => gradient.sample(t),
        }
    }
}

impl Gradient {
    #[must_use]
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    #[must_use]
    pub const fn quantize(&self) -> Option<u32> {
        self.quantize
    }

    fn sample(&self, t: f64) -> Color {
        let mut t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if let Some(steps) = self.quantize {
            let steps = f64::from(steps);
            t = ((t * steps).round_ties_even() / steps).clamp(0.0, 1.0);
        }

        match self.stops.as_slice() {
            [] => Color::rgb(0, 0, 0),
            [only] => *only,
            stops => {
                let segments = stops.len() - 1;
                let pos = t * segments as f64;
                let index = (pos.floor() as usize).min(segments - 1);
                stops[index].lerp(stops[index + 1], pos - index as f64)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_accepts_optional_hash_and_alpha() {
        assert_eq!(Color::from_hex("#8E1DCC").unwrap(), Color::rgb(0x8e, 0x1d, 0xcc));
        assert_eq!(Color::from_hex("e94040").unwrap(), Color::rgb(0xe9, 0x40, 0x40));
        assert_eq!(Color::from_hex("#00112233").unwrap(), Color::rgb(0x11, 0x22, 0x33));
    }

    #[test]
    fn hex_parsing_rejects_garbage() {
        for raw in ["", "#12345", "#1234567", "#gg0000", "#ééé", "##e94040", "###e94040"] {
            let err = Color::from_hex(raw).unwrap_err();
            assert!(matches!(err, ProgressError::InvalidColor { .. }), "{raw}");
        }
    }

    #[test]
    fn color_renders_lowercase_hex() {
        assert_eq!(Color::rgb(0xF9, 0xF9, 0xF9).to_string(), "#f9f9f9");
        assert_eq!(Color::rgb(0, 1, 255).to_string(), "#0001ff");
    }

    #[test]
    fn gradient_interpolates_between_stops() {
        let map = ColorMap::from_hex_stops(&["#000000", "#ffffff"]).unwrap();
        assert_eq!(map.sample(0.0), Color::rgb(0, 0, 0));
        assert_eq!(map.sample(1.0), Color::rgb(255, 255, 255));
        assert_eq!(map.sample(0.5), Color::rgb(128, 128, 128));
        assert_eq!(map.sample(-3.0), Color::rgb(0, 0, 0));
        assert_eq!(map.sample(1.5), Color::rgb(255, 255, 255));
        assert_eq!(map.sample(f64::NAN), Color::rgb(0, 0, 0));
    }

    #[test]
    fn quantized_gradient_snaps_to_stops() {
        let map = ColorMap::red_blue().quantized(10);
        assert_eq!(map.sample(0.0).to_string(), "#67001f");
        assert_eq!(map.sample(0.52).to_string(), "#f7f7f7");
        assert_eq!(map.sample(0.96).to_string(), "#053061");
        assert_eq!(map.sample(0.12), map.sample(0.1));
    }

    #[test]
    fn constant_map_ignores_progress() {
        let map = ColorMap::Constant(Color::rgb(1, 2, 3)).quantized(4);
        assert_eq!(map.sample(0.0), map.sample(0.9));
    }

    #[test]
    fn empty_gradient_is_rejected() {
        assert!(ColorMap::gradient(Vec::new()).is_err());
    }

    #[test]
    fn color_serializes_as_hex_string() {
        let color: Color = serde_json::from_str("\"#3ec5e3\"").unwrap();
        assert_eq!(color, Color::rgb(0x3e, 0xc5, 0xe3));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#3ec5e3\"");
    }
}
