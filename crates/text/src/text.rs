//! The message formatting contract.

use crate::category::Category;
use crate::error::Result;
use crate::preconditions::require;
use crate::properties::IntoProperties;
use crate::property::Property;

/// The separator between a category label and the message body in
/// [`Text::information`].
pub const SEPARATOR: char = '\u{2192}';

/// The indent for properties inside a [`Text::property_group`].
pub const INDENT: &str = "  ";

/// Builds styled messages of type `M` from semantic inputs.
///
/// Implementations are stateless: every operation is a pure function of its
/// arguments, and an operation given equal inputs returns equal output.
///
/// Arguments that may be absent are accepted as `impl Into<Option<T>>`, so a
/// value can be passed directly and `None` stands for a missing one. Every
/// operation checks all of its arguments before building anything and fails
/// with [`TextError::MissingValue`](crate::TextError::MissingValue) naming
/// the first absent one.
pub trait Text<M> {
    /// A title: `title` in the accent color and bold.
    fn title<'a>(&self, title: impl Into<Option<&'a str>>) -> Result<M>;

    /// A title built from a category's display name.
    ///
    /// The same as calling `title(category.display_name())`.
    fn category_title<'a>(&self, category: impl Into<Option<&'a Category>>) -> Result<M> {
        let category = require(category.into(), "category")?;
        self.title(category.display_name())
    }

    /// The `OREFIELD` title, built once and reused.
    fn orefield(&self) -> M;

    /// An informational message: the category name, the [`SEPARATOR`], then
    /// `message` unmodified.
    fn information<'a>(
        &self,
        category: impl Into<Option<&'a Category>>,
        message: impl Into<Option<M>>,
    ) -> Result<M>;

    /// An error message: an `Error: ` label followed by `message`.
    fn error(&self, message: impl Into<Option<M>>) -> Result<M>;

    /// A warning message: a `Warning: ` label followed by `message`.
    fn warning(&self, message: impl Into<Option<M>>) -> Result<M>;

    /// `message` with the call to action style merged onto it.
    fn call_to_action(&self, message: impl Into<Option<M>>) -> Result<M>;

    /// A property: `name: ` followed by the property's value.
    fn property(&self, property: impl Into<Option<Property<M>>>) -> Result<M>;

    /// A property built from its parts.
    ///
    /// The same as calling `property(Property::of(property_name, value))`.
    fn named_property<'a>(
        &self,
        property_name: impl Into<Option<&'a str>>,
        value: impl Into<Option<M>>,
    ) -> Result<M> {
        let property_name = require(property_name.into(), "property_name")?;
        let value = require(value.into(), "value")?;
        self.property(Property::of(property_name, value)?)
    }

    /// A property group: a header line with `group_name`, then one indented
    /// line per property, in input order.
    ///
    /// An absent entry fails with a parameter named `properties[i]`, where
    /// `i` is the line the entry would have occupied (the header is line 0).
    fn property_group<'a>(
        &self,
        group_name: impl Into<Option<&'a str>>,
        properties: impl IntoProperties<M>,
    ) -> Result<Vec<M>>;
}
