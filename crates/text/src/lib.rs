//! Consistent formatting for user-facing messages.
//!
//! This crate defines *what* a formatted message looks like, independent of
//! the rich text library that renders it:
//!
//! - [`Text`] - the formatting operations (titles, information, errors,
//!   warnings, calls to action, properties and property groups), generic
//!   over the message type `M`
//! - [`Category`] - the topic of an informational message
//! - [`Property`] - a named value rendered as `name: value`
//! - [`TextError`] - the failure raised for absent or invalid arguments
//!
//! Adapters implement [`Text`] for a concrete rich text type and pick the
//! colors; the layout rules, [`SEPARATOR`] and [`INDENT`] live here.

pub mod category;
pub mod error;
pub mod preconditions;
pub mod properties;
pub mod property;
pub mod text;

pub use category::Category;
pub use error::{Result, TextError};
pub use properties::IntoProperties;
pub use property::Property;
pub use text::{INDENT, SEPARATOR, Text};
