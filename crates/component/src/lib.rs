//! Immutable rich text components.
//!
//! This crate provides the rich text building blocks used to format
//! user-facing messages: text leaves with a color and decorations, composed
//! into trees by appending children.
//!
//! # Overview
//!
//! - [`Component`] - an immutable node with content, a [`Style`] and children
//! - [`Style`] - an optional [`Color`] plus a set of [`Decorations`]
//! - [`Segment`] - a run of text with its resolved style, produced by
//!   flattening a component tree
//!
//! Styles cascade: a child inherits its parent's style and may override the
//! color or add decorations. [`Style::apply`] defines the merge rule.
//!
//! # Usage
//!
//! ```
//! use component::{Color, Component, Decorations, NamedColor, Style};
//!
//! let message = Component::text("Error: ")
//!     .color(Color::from_hex(0xFF5E6E))
//!     .append(Component::text("Player not found."));
//!
//! assert_eq!(message.plain_text(), "Error: Player not found.");
//!
//! let bold_gold = Style::style(NamedColor::Gold.into(), Decorations::BOLD);
//! assert!(bold_gold.has_decoration(Decorations::BOLD));
//! ```

mod ansi;
pub mod color;
pub mod component;
pub mod error;
pub mod segment;
pub mod style;

// Re-export main types at crate root
pub use color::{Color, NamedColor};
pub use component::Component;
pub use error::ColorParseError;
pub use segment::Segment;
pub use style::{Decorations, Style};
