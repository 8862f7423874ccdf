//! Informational and system message categories.

use std::borrow::Cow;
use std::fmt;

use crate::error::Result;
use crate::preconditions::check_argument;

/// The topic of an informational message, e.g. [`Category::CHAT`].
///
/// A category has a machine `name`, intended to be unique across an
/// application, and a `display_name` used as the rendered label. Two
/// categories are equal when both fields are equal.
///
/// # Examples
///
/// ```
/// use text::Category;
///
/// let staff = Category::of("STAFF", "STAFF").unwrap();
/// assert_eq!(staff, Category::STAFF);
/// assert_eq!(staff.to_string(), "STAFF");
/// assert_eq!(staff.name(), "STAFF");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Category {
    name: Cow<'static, str>,
    display_name: Cow<'static, str>,
}

impl Category {
    /// Chat related messages (e.g. changing chat channels).
    pub const CHAT: Category = Category::well_known("CHAT");

    /// Moderation messages.
    pub const PUNISH: Category = Category::well_known("PUNISH");

    /// Messages related to discord and discord linking.
    pub const DISCORD: Category = Category::well_known("DISCORD");

    /// Staff messages.
    pub const STAFF: Category = Category::well_known("STAFF");

    /// Developer messages (e.g. debugging).
    pub const DEV: Category = Category::well_known("DEV");

    /// Network-wide messages.
    pub const NETWORK: Category = Category::well_known("NETWORK");

    /// General messages from the server itself.
    pub const OREFIELD: Category = Category::well_known("OREFIELD");

    /// Every predefined category.
    pub const WELL_KNOWN: [Category; 7] = [
        Category::CHAT,
        Category::PUNISH,
        Category::DISCORD,
        Category::STAFF,
        Category::DEV,
        Category::NETWORK,
        Category::OREFIELD,
    ];

    const fn well_known(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            display_name: Cow::Borrowed(name),
        }
    }

    /// Create a category, failing if either string is empty.
    pub fn of(
        name: impl Into<Cow<'static, str>>,
        display_name: impl Into<Cow<'static, str>>,
    ) -> Result<Self> {
        let name: Cow<'static, str> = name.into();
        let display_name: Cow<'static, str> = display_name.into();
        check_argument(!name.is_empty(), "name", "cannot be empty")?;
        check_argument(!display_name.is_empty(), "display_name", "cannot be empty")?;

        Ok(Self { name, display_name })
    }

    /// The machine-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The human-readable label.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::error::TextError;

    #[test]
    fn well_known_names_match_display_names() {
        for category in Category::WELL_KNOWN {
            assert_eq!(category.name(), category.display_name());
            assert_eq!(category.to_string(), category.name());
        }
    }

    #[test]
    fn custom_category_keeps_both_names() {
        let category = Category::of("BUILD_TEAM", "BUILD TEAM").unwrap();
        assert_eq!(category.name(), "BUILD_TEAM");
        assert_eq!(category.to_string(), "BUILD TEAM");
    }

    #[test]
    fn hashing_is_structural() {
        let set: HashSet<Category> = Category::WELL_KNOWN.into_iter().collect();
        let chat = Category::of(String::from("CHAT"), String::from("CHAT")).unwrap();

        assert!(set.contains(&chat));
        assert!(!set.contains(&Category::of("CHAT", "Chat").unwrap()));
        assert_eq!(set.len(), Category::WELL_KNOWN.len());
    }

    #[test]
    fn empty_strings_are_rejected() {
        assert_eq!(
            Category::of("", "CHAT"),
            Err(TextError::InvalidValue {
                parameter: "name".to_string(),
                reason: "cannot be empty".to_string(),
            })
        );
        assert_eq!(
            Category::of("CHAT", "").unwrap_err().parameter(),
            "display_name"
        );
    }
}
