//! The immutable component tree.

use std::borrow::Cow;
use std::fmt;

use crate::color::Color;
use crate::segment::Segment;
use crate::style::{Decorations, Style};

/// A node of rich text.
///
/// A component has its own text content, a style, and an ordered list of
/// children rendered after the content. Children inherit the style of their
/// parent and may override the color or add decorations.
///
/// Builder methods take `self` by value and return the modified component,
/// so a value is never changed once it has been shared.
///
/// # Examples
///
/// ```
/// use component::{Component, Decorations, NamedColor};
///
/// let greeting = Component::empty()
///     .append(Component::text("Hello").color(NamedColor::Gold.into()).decorate(Decorations::BOLD))
///     .append(Component::text(", world!"));
///
/// assert_eq!(greeting.plain_text(), "Hello, world!");
/// assert_eq!(greeting.children().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Component {
    content: Cow<'static, str>,
    style: Style,
    children: Vec<Component>,
}

impl Component {
    /// A component with no content, no style and no children.
    pub const fn empty() -> Self {
        Self {
            content: Cow::Borrowed(""),
            style: Style::new(),
            children: Vec::new(),
        }
    }

    /// A styled text leaf built from a static string, usable in constants.
    pub const fn const_text(content: &'static str, style: Style) -> Self {
        Self {
            content: Cow::Borrowed(content),
            style,
            children: Vec::new(),
        }
    }

    /// An unstyled text leaf.
    pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
        Self {
            content: content.into(),
            style: Style::new(),
            children: Vec::new(),
        }
    }

    /// A text leaf with the given style.
    pub fn styled(content: impl Into<Cow<'static, str>>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
            children: Vec::new(),
        }
    }

    /// Set the color of this component.
    pub fn color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Add decorations to this component.
    pub fn decorate(mut self, decorations: Decorations) -> Self {
        self.style.decorations |= decorations;
        self
    }

    /// Merge `style` onto this component's own style.
    ///
    /// Children are left untouched; they pick the merged style up through
    /// inheritance unless they override it.
    pub fn merge_style(mut self, style: &Style) -> Self {
        self.style = self.style.apply(style);
        self
    }

    /// Append a child after the existing children.
    pub fn append(mut self, child: impl Into<Component>) -> Self {
        self.children.push(child.into());
        self
    }

    /// The text content of this node, excluding children.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The style of this node, excluding inherited style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The children of this node.
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Returns true if neither this node nor any child carries text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.children.iter().all(Component::is_empty)
    }

    /// The concatenated text of this node and its descendants, unstyled.
    pub fn plain_text(&self) -> String {
        self.segments().iter().map(|segment| segment.text).collect()
    }

    /// Flatten the tree into styled segments, depth first.
    ///
    /// Each node's effective style is its parent's effective style with the
    /// node's own style applied on top. Nodes without content produce no
    /// segment.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut segments = Vec::new();
        self.collect_segments(Style::new(), &mut segments);
        segments
    }

    fn collect_segments<'a>(&'a self, inherited: Style, out: &mut Vec<Segment<'a>>) {
        let style = inherited.apply(&self.style);
        if !self.content.is_empty() {
            out.push(Segment::new(&self.content, style));
        }
        for child in &self.children {
            child.collect_segments(style, out);
        }
    }

    /// Render this component as text with ANSI escape sequences.
    pub fn to_ansi(&self) -> String {
        crate::ansi::render(self)
    }
}

impl From<&'static str> for Component {
    fn from(content: &'static str) -> Self {
        Component::text(content)
    }
}

impl From<String> for Component {
    fn from(content: String) -> Self {
        Component::text(content)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments() {
            f.write_str(segment.text)?;
        }
        Ok(())
    }
}
