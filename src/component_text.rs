//! [`Text`] implemented for [`Component`].

use component::{Component, Decorations, Style};
use text::preconditions::require;
use text::{Category, INDENT, IntoProperties, Property, Result, SEPARATOR, Text};

use crate::palette::{self, Palette};

/// The information separator fragment: [`SEPARATOR`] and a space in dark gray.
pub const SEPARATOR_COMPONENT: Component =
    Component::const_text("\u{2192} ", Style::colored(palette::DARK_GRAY));

/// The unstyled indent fragment placed before each property of a group.
pub const INDENT_COMPONENT: Component = Component::const_text(INDENT, Style::new());

/// The label placed before error messages.
pub const ERROR_COMPONENT: Component =
    Component::const_text("Error: ", Style::colored(palette::ERROR));

/// The label placed before warning messages.
pub const WARNING_COMPONENT: Component =
    Component::const_text("Warning: ", Style::colored(palette::WARNING));

/// The style merged onto calls to action.
pub const CALL_TO_ACTION_STYLE: Style =
    Style::style(palette::CALL_TO_ACTION, Decorations::BOLD);

/// Formats messages as [`Component`] trees.
///
/// The fixed fragments (separator, labels, the `OREFIELD` title) are built
/// once from the palette when the formatter is created and cloned into each
/// message.
///
/// # Examples
///
/// ```
/// use orefield_text::{Category, Component, ComponentText, Text};
///
/// let text = ComponentText::new();
/// let message = text
///     .information(&Category::CHAT, Component::text("Hello, world!"))
///     .unwrap();
///
/// assert_eq!(message.plain_text(), "CHAT \u{2192} Hello, world!");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentText {
    palette: Palette,
    separator: Component,
    error_label: Component,
    warning_label: Component,
    call_to_action_style: Style,
    orefield_title: Component,
}

impl ComponentText {
    /// A formatter using the standard palette.
    pub fn new() -> Self {
        Self::with_palette(Palette::DEFAULT)
    }

    /// A formatter using a custom palette.
    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            separator: Component::styled(
                format!("{} ", SEPARATOR),
                Style::colored(palette.dark_gray),
            ),
            error_label: Component::styled("Error: ", Style::colored(palette.error)),
            warning_label: Component::styled("Warning: ", Style::colored(palette.warning)),
            call_to_action_style: Style::style(palette.call_to_action, Decorations::BOLD),
            orefield_title: title_component(&palette, "OREFIELD"),
        }
    }

    /// The palette this formatter renders with.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    fn header(&self, text: &str) -> Component {
        header_component(&self.palette, text)
    }
}

impl Default for ComponentText {
    fn default() -> Self {
        Self::new()
    }
}

/// Titles and group headers share this leaf.
fn header_component(palette: &Palette, text: &str) -> Component {
    Component::styled(
        text.to_string(),
        Style::style(palette.accent, Decorations::BOLD),
    )
}

fn title_component(palette: &Palette, title: &str) -> Component {
    Component::empty().append(header_component(palette, title))
}

impl Text<Component> for ComponentText {
    fn title<'a>(&self, title: impl Into<Option<&'a str>>) -> Result<Component> {
        let title = require(title.into(), "title")?;

        Ok(title_component(&self.palette, title))
    }

    fn orefield(&self) -> Component {
        self.orefield_title.clone()
    }

    fn information<'a>(
        &self,
        category: impl Into<Option<&'a Category>>,
        message: impl Into<Option<Component>>,
    ) -> Result<Component> {
        let category = require(category.into(), "category")?;
        let message = require(message.into(), "message")?;

        Ok(Component::empty()
            .append(Component::styled(
                format!("{} ", category.name()),
                Style::style(self.palette.main, Decorations::BOLD),
            ))
            .append(self.separator.clone())
            .append(message))
    }

    fn error(&self, message: impl Into<Option<Component>>) -> Result<Component> {
        let message = require(message.into(), "message")?;

        Ok(self.error_label.clone().append(message))
    }

    fn warning(&self, message: impl Into<Option<Component>>) -> Result<Component> {
        let message = require(message.into(), "message")?;

        Ok(self.warning_label.clone().append(message))
    }

    fn call_to_action(&self, message: impl Into<Option<Component>>) -> Result<Component> {
        let message = require(message.into(), "message")?;

        Ok(message.merge_style(&self.call_to_action_style))
    }

    fn property(&self, property: impl Into<Option<Property<Component>>>) -> Result<Component> {
        let property = require(property.into(), "property")?;
        let (property_name, value) = property.into_parts();

        Ok(Component::empty()
            .append(Component::styled(
                format!("{}: ", property_name),
                Style::colored(self.palette.gray),
            ))
            .append(value))
    }

    fn property_group<'a>(
        &self,
        group_name: impl Into<Option<&'a str>>,
        properties: impl IntoProperties<Component>,
    ) -> Result<Vec<Component>> {
        let group_name = require(group_name.into(), "group_name")?;
        let entries = require(properties.into_properties(), "properties")?;

        // Line 0 is the header, so entry i lands on line i + 1.
        let properties = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| require(entry, &format!("properties[{}]", i + 1)))
            .collect::<Result<Vec<_>>>()?;

        let mut lines = Vec::with_capacity(properties.len() + 1);
        lines.push(self.header(group_name));
        for property in properties {
            lines.push(INDENT_COMPONENT.append(self.property(property)?));
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fragments_match_constants() {
        let text = ComponentText::new();
        assert_eq!(text.separator, SEPARATOR_COMPONENT);
        assert_eq!(text.error_label, ERROR_COMPONENT);
        assert_eq!(text.warning_label, WARNING_COMPONENT);
        assert_eq!(text.call_to_action_style, CALL_TO_ACTION_STYLE);
    }

    #[test]
    fn separator_constant_uses_separator_glyph() {
        assert_eq!(SEPARATOR_COMPONENT.content(), format!("{} ", SEPARATOR));
        assert_eq!(INDENT_COMPONENT.content(), "  ");
    }

    #[test]
    fn orefield_is_built_once() {
        let text = ComponentText::new();
        assert_eq!(text.orefield(), text.orefield_title);
        assert_eq!(text.orefield(), text.title("OREFIELD").unwrap());
    }

    #[test]
    fn title_wraps_group_header() {
        let palette = Palette::builder().accent("aqua").build().unwrap();
        let text = ComponentText::with_palette(palette);

        let title = text.title("SERVER").unwrap();
        let header = text.header("SERVER");

        assert_eq!(title.children(), std::slice::from_ref(&header));
        assert_eq!(
            header.style(),
            &Style::style(palette.accent, Decorations::BOLD)
        );
    }

    #[test]
    fn custom_palette_recolors_fragments() {
        let palette = Palette::builder().dark_gray("white").build().unwrap();
        let text = ComponentText::with_palette(palette);

        assert_eq!(text.separator.style().color, Some(palette.dark_gray));
        assert_eq!(text.separator.content(), SEPARATOR_COMPONENT.content());
    }
}
