//! Component library for Solstice
//!
//! This crate provides the component layer: typed style fragments,
//! design tokens, the type ramp, layout primitives, and the themed
//! component catalog built on `solstice-theme`.
//!
//! # Styling Model
//!
//! Every component carries optional appearance props and a [`style`]
//! fragment. Styling resolves in three layers:
//!
//! - Component props (`accent_color`, `color_mode` on the component) win
//! - Provider state (the [`ThemeState`](solstice_theme::ThemeState)
//!   snapshot passed into `computed_styles`) fills what props leave unset
//! - Token defaults cover the rest
//!
//! Style fragments compose with [`StyleProps::merge`]: overrides win
//! field by field, untouched fields survive.
//!
//! # Modules
//!
//! - [`style`] - Style fragments, merge rules, and layout enums
//! - [`tokens`] - Design tokens (spacing, radius, sizing, borders)
//! - [`typography`] - Type ramp and the text component
//! - [`layout`] - Flex containers and the pressable wrapper
//! - [`button`] - Filled and outlined buttons
//! - [`radio`] - Radio buttons and radio groups
//! - [`select`] - Option picker
//! - [`tab_bar`] - Bottom tab bar
//! - [`message`] - Inline status messages
//! - [`modal`] - Modal header chrome
//!
//! # Example
//!
//! ```rust
//! use solstice_theme::{AccentColor, ThemeState};
//! use solstice_ui::button::Button;
//! use solstice_ui::layout::Stack;
//! use solstice_ui::typography::{Text, TypographyVariant};
//!
//! // Snapshot taken from the mounted provider
//! let state = ThemeState::default();
//!
//! // A medium emerald button
//! let button = Button::new("Save").with_accent(AccentColor::Emerald);
//! let styles = button.computed_styles(&state);
//! assert_eq!(styles.height, 40.0);
//!
//! // A vertical stack with an 8px gap
//! let stack = Stack::vstack().with_space(2.0);
//! assert_eq!(stack.spacing_px(), 8.0);
//!
//! // A title from the type ramp
//! let heading = Text::new("Solstice").with_variant(TypographyVariant::TitleOne);
//! assert_eq!(heading.computed_styles(&state).text.font_size, 30.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod button;
pub mod layout;
pub mod message;
pub mod modal;
pub mod radio;
pub mod select;
pub mod style;
pub mod tab_bar;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use style::{
    Alignment, ComponentId, Dimension, EdgeValues, EventHandler,
    FlexDirection, JustifyContent, StyleProps,
};

pub use tokens::{
    border, font_weight, line_height, radius, sizing, spacing, tracking,
};

pub use typography::{
    font_size, Text, TextStyle, TextStyles, TypographyVariant,
};

pub use layout::{
    AspectRatio, Center, Container, FlexStyles, Pressable, Stack, View,
    ZStack, CONTAINER_MAX_WIDTH,
};
