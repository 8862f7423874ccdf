//! Color types for components.
//!
//! A color is either one of the sixteen classic chat colors or an arbitrary
//! RGB triple.

use std::fmt;

use crate::error::ColorParseError;

/// The sixteen classic named chat colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    /// Every named color, in palette order.
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// The lowercase snake_case name of this color.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// Look up a named color, ignoring case. `grey` spellings are accepted.
    pub fn from_name(name: &str) -> Option<NamedColor> {
        let name = name.to_lowercase().replace("grey", "gray");
        Self::ALL.into_iter().find(|color| color.name() == name)
    }

    /// The RGB value of this color.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0x00, 0x00, 0x00),
            NamedColor::DarkBlue => (0x00, 0x00, 0xAA),
            NamedColor::DarkGreen => (0x00, 0xAA, 0x00),
            NamedColor::DarkAqua => (0x00, 0xAA, 0xAA),
            NamedColor::DarkRed => (0xAA, 0x00, 0x00),
            NamedColor::DarkPurple => (0xAA, 0x00, 0xAA),
            NamedColor::Gold => (0xFF, 0xAA, 0x00),
            NamedColor::Gray => (0xAA, 0xAA, 0xAA),
            NamedColor::DarkGray => (0x55, 0x55, 0x55),
            NamedColor::Blue => (0x55, 0x55, 0xFF),
            NamedColor::Green => (0x55, 0xFF, 0x55),
            NamedColor::Aqua => (0x55, 0xFF, 0xFF),
            NamedColor::Red => (0xFF, 0x55, 0x55),
            NamedColor::LightPurple => (0xFF, 0x55, 0xFF),
            NamedColor::Yellow => (0xFF, 0xFF, 0x55),
            NamedColor::White => (0xFF, 0xFF, 0xFF),
        }
    }
}

/// A component color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the named chat colors.
    Named(NamedColor),
    /// RGB color components.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Build an RGB color from a packed `0xRRGGBB` value.
    pub const fn from_hex(value: u32) -> Self {
        Color::Rgb(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Parse a color from a string.
    ///
    /// Supports:
    /// - Named colors: `gold`, `dark_gray`, `yellow`, etc.
    /// - Hex colors: `#RGB`, `#RRGGBB`
    /// - RGB function: `rgb(r, g, b)`, in any case
    ///
    /// # Examples
    ///
    /// ```
    /// use component::{Color, NamedColor};
    ///
    /// assert_eq!(Color::parse("gold").unwrap(), Color::Named(NamedColor::Gold));
    /// assert_eq!(Color::parse("#FA342D").unwrap(), Color::Rgb(0xFA, 0x34, 0x2D));
    /// assert_eq!(Color::parse("rgb(255, 94, 110)").unwrap(), Color::Rgb(255, 94, 110));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();

        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if let Some(inner) = input
            .get(..4)
            .filter(|prefix| prefix.eq_ignore_ascii_case("rgb("))
            .and_then(|_| input[4..].strip_suffix(')'))
        {
            return Self::parse_rgb_func(inner);
        }

        NamedColor::from_name(input)
            .map(Color::Named)
            .ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
    }

    /// Parse a hex color (without the # prefix).
    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(format!("#{}", hex));
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            // #RGB
            3 => {
                let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
                let expand = |nibble: u32| (nibble & 0xF) as u8 * 17;
                Ok(Color::Rgb(
                    expand(value >> 8),
                    expand(value >> 4),
                    expand(value),
                ))
            }
            // #RRGGBB
            6 => {
                let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
                Ok(Color::from_hex(value))
            }
            _ => Err(invalid()),
        }
    }

    /// Parse an RGB function (the part inside the parentheses).
    fn parse_rgb_func(input: &str) -> Result<Self, ColorParseError> {
        let parts: Vec<&str> = input.split(',').map(|s| s.trim()).collect();

        if parts.len() != 3 {
            return Err(ColorParseError::InvalidRgb(format!("rgb({})", input)));
        }

        let channel = |part: &str, label: &str| {
            part.parse::<u8>()
                .map_err(|_| ColorParseError::InvalidRgb(format!("invalid {}: {}", label, part)))
        };

        Ok(Color::Rgb(
            channel(parts[0], "red")?,
            channel(parts[1], "green")?,
            channel(parts[2], "blue")?,
        ))
    }

    /// Convert the color to RGB components.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Named(named) => named.to_rgb(),
            Color::Rgb(r, g, b) => (*r, *g, *b),
        }
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(named) => f.write_str(named.name()),
            Color::Rgb(r, g, b) => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}
