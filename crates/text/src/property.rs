//! Name/value properties.

use crate::error::Result;
use crate::preconditions::require;

/// A named value rendered as `name: value`.
///
/// `V` is the message type of the formatter the property is passed to, so
/// the value is always a rich text fragment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Property<V> {
    property_name: String,
    value: V,
}

impl<V> Property<V> {
    /// Create a property, failing if `property_name` is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use text::Property;
    ///
    /// let players = Property::of("Players", "53/100").unwrap();
    /// assert_eq!(players.property_name(), "Players");
    /// assert_eq!(*players.value(), "53/100");
    ///
    /// assert!(Property::of(None::<&str>, "53/100").is_err());
    /// ```
    pub fn of<'a>(property_name: impl Into<Option<&'a str>>, value: V) -> Result<Self> {
        let property_name = require(property_name.into(), "property_name")?;

        Ok(Self {
            property_name: property_name.to_string(),
            value,
        })
    }

    /// The label of this property.
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// The value of this property.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consume the property and return its value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Split the property into its name and value.
    pub fn into_parts(self) -> (String, V) {
        (self.property_name, self.value)
    }
}
