//! Styled user-facing messages for OreField.
//!
//! This crate gives every caller one way to build titles, categorized
//! announcements, errors, warnings, calls to action and key/value properties,
//! so colors and layout are chosen in exactly one place.
//!
//! - [`ComponentText`] implements the [`Text`] contract for [`Component`]
//!   trees, using a [`Palette`]
//! - [`texts`] exposes the same operations as free functions over a shared
//!   formatter
//!
//! # Usage
//!
//! ```
//! use orefield_text::{texts, Category, Component, Property};
//!
//! let welcome = texts::information(&Category::NETWORK, Component::text("Welcome back!")).unwrap();
//! assert_eq!(welcome.plain_text(), "NETWORK \u{2192} Welcome back!");
//!
//! let lines = texts::property_group(
//!     "SERVER",
//!     vec![
//!         Property::of("TPS", Component::text("20")).unwrap(),
//!         Property::of("Players", Component::text("53/100")).unwrap(),
//!     ],
//! )
//! .unwrap();
//! assert_eq!(lines[1].plain_text(), "  TPS: 20");
//! ```

pub mod component_text;
pub mod error;
mod log_init;
pub mod palette;
pub mod texts;

pub use component_text::ComponentText;
pub use error::{Error, Result};
pub use log_init::init_logger;
pub use palette::{Palette, PaletteBuilder};

pub use component::{Color, Component, Decorations, NamedColor, Segment, Style};
pub use text::{Category, INDENT, IntoProperties, Property, SEPARATOR, Text, TextError};

// Re-export the member crates and log so users can reach everything from here.
pub use component;
pub use log;
pub use text;
