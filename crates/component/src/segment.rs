//! Segment type for flattened component trees.

use crate::style::Style;

/// A run of text with its fully resolved style.
///
/// Segments are produced by [`Component::segments`](crate::Component::segments):
/// each one borrows the content of a single node and carries the style that
/// node ends up with once every ancestor's style has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The text of this segment.
    pub text: &'a str,
    /// The effective style of this segment.
    pub style: Style,
}

impl<'a> Segment<'a> {
    /// Create a new segment.
    pub fn new(text: &'a str, style: Style) -> Self {
        Self { text, style }
    }

    /// Returns true if this segment carries no styling.
    pub fn is_plain(&self) -> bool {
        self.style.is_empty()
    }

    /// Returns the length of this segment in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if this segment has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, NamedColor};

    #[test]
    fn segment_new() {
        let segment = Segment::new("hub-1", Style::default());
        assert_eq!(segment.text, "hub-1");
        assert_eq!(segment.len(), 5);
        assert!(segment.is_plain());
    }

    #[test]
    fn segment_styled() {
        let segment = Segment::new("TPS: ", Style::colored(Color::Named(NamedColor::Gray)));
        assert!(!segment.is_plain());
        assert!(!segment.is_empty());
    }
}
