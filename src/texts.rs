//! Free functions over a shared [`ComponentText`].
//!
//! Each function forwards to the formatter returned by [`component_text`],
//! which is created with the standard palette on first use.
//!
//! ```
//! use orefield_text::{texts, Component};
//!
//! let error = texts::error(Component::text("Player not found.")).unwrap();
//! assert_eq!(error.plain_text(), "Error: Player not found.");
//! ```

use once_cell::sync::Lazy;

use component::Component;
use text::{Category, IntoProperties, Property, Result, Text};

use crate::component_text::ComponentText;

static COMPONENT_TEXT: Lazy<ComponentText> = Lazy::new(|| {
    log::debug!("Initializing shared component formatter");
    ComponentText::new()
});

/// The shared formatter.
pub fn component_text() -> &'static ComponentText {
    &COMPONENT_TEXT
}

/// See [`Text::title`].
pub fn title<'a>(title: impl Into<Option<&'a str>>) -> Result<Component> {
    component_text().title(title)
}

/// See [`Text::category_title`].
pub fn category_title<'a>(category: impl Into<Option<&'a Category>>) -> Result<Component> {
    component_text().category_title(category)
}

/// See [`Text::orefield`].
pub fn orefield() -> Component {
    component_text().orefield()
}

/// See [`Text::information`].
pub fn information<'a>(
    category: impl Into<Option<&'a Category>>,
    message: impl Into<Option<Component>>,
) -> Result<Component> {
    component_text().information(category, message)
}

/// See [`Text::error`].
pub fn error(message: impl Into<Option<Component>>) -> Result<Component> {
    component_text().error(message)
}

/// See [`Text::warning`].
pub fn warning(message: impl Into<Option<Component>>) -> Result<Component> {
    component_text().warning(message)
}

/// See [`Text::call_to_action`].
pub fn call_to_action(message: impl Into<Option<Component>>) -> Result<Component> {
    component_text().call_to_action(message)
}

/// See [`Text::property`].
pub fn property(property: impl Into<Option<Property<Component>>>) -> Result<Component> {
    component_text().property(property)
}

/// See [`Text::named_property`].
pub fn named_property<'a>(
    property_name: impl Into<Option<&'a str>>,
    value: impl Into<Option<Component>>,
) -> Result<Component> {
    component_text().named_property(property_name, value)
}

/// See [`Text::property_group`].
pub fn property_group<'a>(
    group_name: impl Into<Option<&'a str>>,
    properties: impl IntoProperties<Component>,
) -> Result<Vec<Component>> {
    component_text().property_group(group_name, properties)
}
