//! Color types and color parsing.
//!
//! Provides an 8-bit RGBA color with the CSS-style names and hex notation
//! accepted by the drawing API. The `Display` form is lowercase hex and
//! round-trips through [`Rgba::parse`], which is what the plot text format
//! relies on.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 128, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::new(255, 255, 0, 255);
    /// Opaque cyan.
    pub const CYAN: Self = Self::new(0, 255, 255, 255);
    /// Opaque magenta.
    pub const MAGENTA: Self = Self::new(255, 0, 255, 255);
    /// Opaque orange.
    pub const ORANGE: Self = Self::new(255, 165, 0, 255);
    /// Opaque purple.
    pub const PURPLE: Self = Self::new(128, 0, 128, 255);
    /// Opaque mid gray.
    pub const GRAY: Self = Self::new(128, 128, 128, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Scale the alpha channel by a factor in `0.0..=1.0`.
    #[must_use]
    pub fn scale_alpha(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        self.with_alpha((f32::from(self.a) * factor) as u8)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Parse a color from a name or hex string.
    ///
    /// Accepts CSS-style names (`"red"`, `"blue"`, ...), single-letter
    /// shorthands (`"r"`, `"k"`, ...), and hex notation (`#rgb`,
    /// `#rrggbb`, `#rrggbbaa`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if the string matches none of the
    /// accepted forms.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex).ok_or_else(|| Error::InvalidColor(s.to_string()));
        }

        match s.to_ascii_lowercase().as_str() {
            "black" | "k" => Ok(Self::BLACK),
            "white" | "w" => Ok(Self::WHITE),
            "red" | "r" => Ok(Self::RED),
            "green" | "g" => Ok(Self::GREEN),
            "blue" | "b" => Ok(Self::BLUE),
            "yellow" | "y" => Ok(Self::YELLOW),
            "cyan" | "c" => Ok(Self::CYAN),
            "magenta" | "m" => Ok(Self::MAGENTA),
            "orange" => Ok(Self::ORANGE),
            "purple" => Ok(Self::PURPLE),
            "gray" | "grey" => Ok(Self::GRAY),
            _ => Err(Error::InvalidColor(s.to_string())),
        }
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        let nibble = |c: u8| char::from(c).to_digit(16).map(|d| d as u8);
        let byte = |hi: u8, lo: u8| Some(nibble(hi)? * 16 + nibble(lo)?);

        let b = hex.as_bytes();
        match b.len() {
            // #rgb expands each nibble, CSS style
            3 => Some(Self::rgb(
                nibble(b[0])? * 17,
                nibble(b[1])? * 17,
                nibble(b[2])? * 17,
            )),
            6 => Some(Self::rgb(
                byte(b[0], b[1])?,
                byte(b[2], b[3])?,
                byte(b[4], b[5])?,
            )),
            8 => Some(Self::new(
                byte(b[0], b[1])?,
                byte(b[2], b[3])?,
                byte(b[4], b[5])?,
                byte(b[6], b[7])?,
            )),
            _ => None,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(Rgba::parse("red").unwrap(), Rgba::RED);
        assert_eq!(Rgba::parse("Blue").unwrap(), Rgba::BLUE);
        assert_eq!(Rgba::parse("k").unwrap(), Rgba::BLACK);
        assert_eq!(Rgba::parse("grey").unwrap(), Rgba::GRAY);
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(Rgba::parse("#ff0000").unwrap(), Rgba::RED);
        assert_eq!(Rgba::parse("#f00").unwrap(), Rgba::RED);
        assert_eq!(
            Rgba::parse("#11223344").unwrap(),
            Rgba::new(0x11, 0x22, 0x33, 0x44)
        );
    }

    #[test]
    fn test_invalid_colors() {
        assert!(Rgba::parse("chartreuse-ish").is_err());
        assert!(Rgba::parse("#12345").is_err());
        assert!(Rgba::parse("#gggggg").is_err());
        assert!(Rgba::parse("").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let opaque = Rgba::rgb(18, 52, 86);
        assert_eq!(opaque.to_string(), "#123456");
        assert_eq!(Rgba::parse(&opaque.to_string()).unwrap(), opaque);

        let translucent = Rgba::new(18, 52, 86, 128);
        assert_eq!(translucent.to_string(), "#12345680");
        assert_eq!(Rgba::parse(&translucent.to_string()).unwrap(), translucent);
    }

    #[test]
    fn test_from_str_trait() {
        let color: Rgba = "magenta".parse().unwrap();
        assert_eq!(color, Rgba::MAGENTA);
    }

    #[test]
    fn test_with_alpha() {
        let semi_red = Rgba::RED.with_alpha(128);
        assert_eq!(semi_red.r, 255);
        assert_eq!(semi_red.a, 128);
    }

    #[test]
    fn test_scale_alpha() {
        let scaled = Rgba::RED.scale_alpha(0.4);
        assert_eq!(scaled.a, 102);
        // Factor is clamped
        assert_eq!(Rgba::RED.scale_alpha(2.0).a, 255);
    }

    #[test]
    fn test_to_array_from_array() {
        let color = Rgba::new(10, 20, 30, 40);
        assert_eq!(Rgba::from_array(color.to_array()), color);
    }
}
