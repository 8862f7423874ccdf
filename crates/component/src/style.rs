//! Style types for components.
//!
//! A Style combines an optional color and a set of decorations.

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// Text decorations (modifiers) independent of color.
    ///
    /// # Example
    ///
    /// ```
    /// use component::Decorations;
    ///
    /// let decorations = Decorations::BOLD | Decorations::ITALIC;
    /// assert!(decorations.contains(Decorations::BOLD));
    /// assert!(!decorations.contains(Decorations::UNDERLINE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Decorations: u8 {
        /// Bold/increased intensity.
        const BOLD      = 0b0000_0001;
        /// Dim/decreased intensity.
        const DIM       = 0b0000_0010;
        /// Italic text.
        const ITALIC    = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE = 0b0000_1000;
        /// Strikethrough text.
        const STRIKE    = 0b0001_0000;
        /// Reverse video (swap fg/bg).
        const REVERSE   = 0b0010_0000;
        /// Blinking text.
        const BLINK     = 0b0100_0000;
    }
}

/// A complete style: color plus decorations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground (text) color.
    pub color: Option<Color>,
    /// Decorations applied to the text.
    pub decorations: Decorations,
}

impl Style {
    /// Create a new empty style.
    pub const fn new() -> Self {
        Self {
            color: None,
            decorations: Decorations::empty(),
        }
    }

    /// Create a style from a color and decorations.
    pub const fn style(color: Color, decorations: Decorations) -> Self {
        Self {
            color: Some(color),
            decorations,
        }
    }

    /// Create a style with only a color.
    pub const fn colored(color: Color) -> Self {
        Self {
            color: Some(color),
            decorations: Decorations::empty(),
        }
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.decorations.is_empty()
    }

    /// Returns true if the style has the given decoration.
    pub fn has_decoration(&self, decoration: Decorations) -> bool {
        self.decorations.contains(decoration)
    }

    /// Apply another style on top of this one.
    ///
    /// A color set in `other` overrides the color in `self`.
    /// Decorations are OR'd together.
    pub fn apply(&self, other: &Style) -> Style {
        Style {
            color: other.color.or(self.color),
            decorations: self.decorations | other.decorations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;

    #[test]
    fn style_apply() {
        let base = Style::style(Color::Named(NamedColor::Gold), Decorations::BOLD);
        let overlay = Style {
            color: None,
            decorations: Decorations::ITALIC,
        };

        let combined = base.apply(&overlay);
        assert_eq!(combined.color, Some(Color::Named(NamedColor::Gold)));
        assert!(combined.has_decoration(Decorations::BOLD));
        assert!(combined.has_decoration(Decorations::ITALIC));
    }

    #[test]
    fn style_apply_overrides_color() {
        let base = Style::colored(Color::Named(NamedColor::Gray));
        let overlay = Style::colored(Color::from_hex(0xFA342D));

        assert_eq!(base.apply(&overlay).color, Some(Color::from_hex(0xFA342D)));
    }

    #[test]
    fn style_is_empty() {
        assert!(Style::new().is_empty());
        assert!(!Style::colored(Color::Named(NamedColor::Red)).is_empty());
        assert!(
            !Style {
                color: None,
                decorations: Decorations::BOLD,
            }
            .is_empty()
        );
    }
}
