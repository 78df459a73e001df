// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Colour types

use thiserror::Error;

/// 4-part colour data, floating point
///
/// This is the type passed to immediate-mode [`Gl`](super::Gl) calls, with
/// components between 0 and 1 in RGBA order.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Transparent black
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Opaque white
    pub const WHITE: Self = Self::grey(1.0);
    /// Opaque black
    pub const BLACK: Self = Self::grey(0.0);

    /// Construct from R-G-B-A components
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Construct from opaque R-G-B
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Construct from grey-scale
    pub const fn grey(s: f32) -> Self {
        Self::rgb(s, s, s)
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl From<Rgb8> for Rgba {
    fn from(c: Rgb8) -> Self {
        let f = |x: u8| f32::from(x) / 255.0;
        Rgba::rgb(f(c.0[0]), f(c.0[1]), f(c.0[2]))
    }
}

/// 3-part colour data, `u8`, sRGB colour space
///
/// This is the colour type used by label colours and theme palettes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8(pub [u8; 3]);

impl Rgb8 {
    /// Opaque white
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Construct from R-G-B components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgb8([r, g, b])
    }

    /// Construct from grey-scale
    pub const fn grey(s: u8) -> Self {
        Self::rgb(s, s, s)
    }

    /// Format to a string like `#123456`
    pub fn format_html(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0[0], self.0[1], self.0[2])
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(c: [u8; 3]) -> Self {
        Rgb8(c)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Incorrect input length
    #[error("input has unexpected length (expected optional `#` then 6 bytes)")]
    Length,
    /// Invalid hex byte
    #[error("input byte is not a valid hex byte (expected 0-9, a-f or A-F)")]
    InvalidHex,
}

/// Parse sRGB colour designator from a string
///
/// Accepts:
///
/// -   optional `#` prefix
/// -   upper and lower case hex digits
/// -   six (RGB) digits
impl std::str::FromStr for Rgb8 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.as_bytes();
        let s = s.strip_prefix(b"#").unwrap_or(s);
        if s.len() != 6 {
            return Err(ParseError::Length);
        }

        fn val(c: u8) -> Result<u8, ParseError> {
            match c {
                b'A'..=b'F' => Ok(c - b'A' + 10),
                b'a'..=b'f' => Ok(c - b'a' + 10),
                b'0'..=b'9' => Ok(c - b'0'),
                _ => Err(ParseError::InvalidHex),
            }
        }

        fn byte(s: &[u8]) -> Result<u8, ParseError> {
            Ok((val(s[0])? << 4) | val(s[1])?)
        }

        Ok(Rgb8([byte(&s[0..2])?, byte(&s[2..4])?, byte(&s[4..6])?]))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.format_html())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_html() {
        assert_eq!("#CECECE".parse::<Rgb8>(), Ok(Rgb8::grey(0xCE)));
        assert_eq!("ffffcc".parse::<Rgb8>(), Ok(Rgb8::rgb(0xFF, 0xFF, 0xCC)));
        assert_eq!("#12345".parse::<Rgb8>(), Err(ParseError::Length));
        assert_eq!("#12345G".parse::<Rgb8>(), Err(ParseError::InvalidHex));
        assert_eq!("".parse::<Rgb8>(), Err(ParseError::Length));
    }

    #[test]
    fn format_html() {
        assert_eq!(Rgb8::rgb(0x0A, 0xFF, 0x3C).format_html(), "#0AFF3C");
    }
}
