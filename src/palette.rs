//! The colors used by [`ComponentText`](crate::ComponentText).
//!
//! The default palette is the fixed visual vocabulary shared by every
//! message. A custom palette can be built from color strings for callers that
//! render somewhere the defaults do not fit.

use component::{Color, ColorParseError, NamedColor};

/// The main color.
pub const MAIN: Color = Color::Named(NamedColor::Gold);

/// The accent color, used for titles.
pub const ACCENT: Color = Color::Named(NamedColor::Yellow);

/// A gray color, used for property names.
pub const GRAY: Color = Color::Named(NamedColor::Gray);

/// A dark gray color, used for the information separator.
pub const DARK_GRAY: Color = Color::Named(NamedColor::DarkGray);

/// The call to action color.
pub const CALL_TO_ACTION: Color = Color::from_hex(0xFA342D);

/// The error color.
pub const ERROR: Color = Color::from_hex(0xFF5E6E);

/// The warning color.
pub const WARNING: Color = Color::from_hex(0xEBD94D);

/// The set of colors a formatter renders with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    pub main: Color,
    pub accent: Color,
    pub gray: Color,
    pub dark_gray: Color,
    pub call_to_action: Color,
    pub error: Color,
    pub warning: Color,
}

impl Palette {
    /// The standard palette.
    pub const DEFAULT: Palette = Palette {
        main: MAIN,
        accent: ACCENT,
        gray: GRAY,
        dark_gray: DARK_GRAY,
        call_to_action: CALL_TO_ACTION,
        error: ERROR,
        warning: WARNING,
    };

    /// Start building a palette from the standard colors.
    ///
    /// # Examples
    ///
    /// ```
    /// use orefield_text::{Color, Palette};
    ///
    /// let palette = Palette::builder()
    ///     .accent("#55FFFF")
    ///     .error("rgb(255, 0, 0)")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(palette.accent, Color::Rgb(0x55, 0xFF, 0xFF));
    /// assert_eq!(palette.main, Palette::DEFAULT.main);
    /// ```
    pub fn builder() -> PaletteBuilder {
        PaletteBuilder {
            palette: Palette::DEFAULT,
            error: None,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::DEFAULT
    }
}

/// Builds a [`Palette`] from color strings.
///
/// Each setter accepts anything [`Color::parse`] does. The first string that
/// fails to parse is reported by [`build`](PaletteBuilder::build); later
/// setters are ignored once an error has been recorded.
#[derive(Clone, Debug)]
pub struct PaletteBuilder {
    palette: Palette,
    error: Option<ColorParseError>,
}

impl PaletteBuilder {
    /// Set the category label color.
    pub fn main(self, color: &str) -> Self {
        self.set(color, |palette, color| palette.main = color)
    }

    /// Set the title and group header color.
    pub fn accent(self, color: &str) -> Self {
        self.set(color, |palette, color| palette.accent = color)
    }

    /// Set the property name color.
    pub fn gray(self, color: &str) -> Self {
        self.set(color, |palette, color| palette.gray = color)
    }

    /// Set the information separator color.
    pub fn dark_gray(self, color: &str) -> Self {
        self.set(color, |palette, color| palette.dark_gray = color)
    }

    /// Set the call to action color.
    pub fn call_to_action(self, color: &str) -> Self {
        self.set(color, |palette, color| palette.call_to_action = color)
    }

    /// Set the `Error: ` label color.
    pub fn error(self, color: &str) -> Self {
        self.set(color, |palette, color| palette.error = color)
    }

    /// Set the `Warning: ` label color.
    pub fn warning(self, color: &str) -> Self {
        self.set(color, |palette, color| palette.warning = color)
    }

    fn set(mut self, input: &str, assign: impl FnOnce(&mut Palette, Color)) -> Self {
        if self.error.is_some() {
            return self;
        }

        match Color::parse(input) {
            Ok(color) => assign(&mut self.palette, color),
            Err(err) => {
                log::debug!("Rejected palette color {:?}: {}", input, err);
                self.error = Some(err);
            }
        }
        self
    }

    /// Finish the palette, or return the first color that failed to parse.
    pub fn build(self) -> Result<Palette, ColorParseError> {
        match self.error {
            Some(err) => Err(err),
            None => {
                log::trace!("Built palette: {:?}", self.palette);
                Ok(self.palette)
            }
        }
    }
}
