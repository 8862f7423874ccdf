//! ANSI rendering of components for terminal output.

use std::fmt::Write;

use crossterm::style::{Attribute, Color as TermColor, ContentStyle};

use crate::color::{Color, NamedColor};
use crate::component::Component;
use crate::style::{Decorations, Style};

/// Render every segment of `component` with its resolved style.
pub(crate) fn render(component: &Component) -> String {
    let mut out = String::new();
    for segment in component.segments() {
        let _ = write!(out, "{}", content_style(&segment.style).apply(segment.text));
    }
    out
}

fn content_style(style: &Style) -> ContentStyle {
    let mut content_style = ContentStyle::new();
    content_style.foreground_color = style.color.map(term_color);

    for (decoration, attribute) in [
        (Decorations::BOLD, Attribute::Bold),
        (Decorations::DIM, Attribute::Dim),
        (Decorations::ITALIC, Attribute::Italic),
        (Decorations::UNDERLINE, Attribute::Underlined),
        (Decorations::STRIKE, Attribute::CrossedOut),
        (Decorations::REVERSE, Attribute::Reverse),
        (Decorations::BLINK, Attribute::SlowBlink),
    ] {
        if style.has_decoration(decoration) {
            content_style.attributes.set(attribute);
        }
    }

    content_style
}

/// Map a component color onto the terminal palette.
///
/// Named colors use the matching 16-color terminal slot so they follow the
/// user's terminal theme.
fn term_color(color: Color) -> TermColor {
    match color {
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Named(named) => match named {
            NamedColor::Black => TermColor::Black,
            NamedColor::DarkBlue => TermColor::DarkBlue,
            NamedColor::DarkGreen => TermColor::DarkGreen,
            NamedColor::DarkAqua => TermColor::DarkCyan,
            NamedColor::DarkRed => TermColor::DarkRed,
            NamedColor::DarkPurple => TermColor::DarkMagenta,
            NamedColor::Gold => TermColor::DarkYellow,
            NamedColor::Gray => TermColor::Grey,
            NamedColor::DarkGray => TermColor::DarkGrey,
            NamedColor::Blue => TermColor::Blue,
            NamedColor::Green => TermColor::Green,
            NamedColor::Aqua => TermColor::Cyan,
            NamedColor::Red => TermColor::Red,
            NamedColor::LightPurple => TermColor::Magenta,
            NamedColor::Yellow => TermColor::Yellow,
            NamedColor::White => TermColor::White,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_style_maps_decorations() {
        let style = content_style(&Style::style(
            Color::from_hex(0xFA342D),
            Decorations::BOLD | Decorations::UNDERLINE,
        ));

        assert_eq!(
            style.foreground_color,
            Some(TermColor::Rgb {
                r: 0xFA,
                g: 0x34,
                b: 0x2D
            })
        );
        assert!(style.attributes.has(Attribute::Bold));
        assert!(style.attributes.has(Attribute::Underlined));
        assert!(!style.attributes.has(Attribute::Italic));
    }

    #[test]
    fn named_colors_use_terminal_slots() {
        assert_eq!(term_color(NamedColor::Gold.into()), TermColor::DarkYellow);
        assert_eq!(term_color(NamedColor::DarkGray.into()), TermColor::DarkGrey);
    }

    #[test]
    fn render_keeps_text() {
        let rendered = Component::text("CLICK HERE")
            .color(Color::from_hex(0xFA342D))
            .decorate(Decorations::BOLD)
            .to_ansi();

        assert!(rendered.starts_with('\u{1b}'));
        assert!(rendered.contains("CLICK HERE"));
    }
}
