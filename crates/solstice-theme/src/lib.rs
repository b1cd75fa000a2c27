//! Theme resolution for Solstice
//!
//! This crate provides the theming layer: color modes, accent colors,
//! palettes, gradients, and the resolver that turns provider state plus
//! per-component overrides into concrete values.
//!
//! # Resolution Precedence
//!
//! Every themeable value resolves through the same chain:
//! 1. An explicit per-component override, when given
//! 2. The nearest mounted [`state::ThemeProvider`]
//! 3. The operating system appearance, folded in at mount time
//!
//! Accent colors come from a closed palette; `primary` is the default when
//! nothing overrides it.
//!
//! # Modules
//!
//! - [`mode`] - Color modes and mode-keyed value pairs
//! - [`accent`] - The closed accent color palette
//! - [`palette`] - Color scales and hex utilities
//! - [`gradient`] - Gradient stops, fills, and interaction states
//! - [`state`] - Theme configuration, provider, and provider stack
//! - [`resolver`] - The resolution operations
//! - [`error`] - Configuration errors
//!
//! # Example
//!
//! ```rust
//! use solstice_theme::{
//!     AccentColor, ColorMode, ColorModePreference, InteractionState,
//!     ThemeConfig, ThemeProvider,
//! };
//! use solstice_theme::resolver::{resolve_color_mode, resolve_gradient};
//!
//! // Mount a provider
//! let config = ThemeConfig::new()
//!     .with_color_mode(ColorModePreference::Light)
//!     .with_accent(AccentColor::Emerald);
//! let provider = ThemeProvider::new(config);
//!
//! // Resolve against a snapshot
//! let state = provider.state();
//! let mode = resolve_color_mode(None, &state);
//! assert_eq!(mode, ColorMode::Light);
//!
//! // Three-stop accent gradient
//! let gradient = resolve_gradient(state.accent, mode, InteractionState::Rest);
//! assert_eq!(gradient.stop_count(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accent;
pub mod error;
pub mod gradient;
pub mod mode;
pub mod palette;
pub mod resolver;
pub mod state;

// Re-export commonly used types
pub use accent::AccentColor;

pub use error::{ConfigError, Result};

pub use gradient::{Fill, Gradient, GradientStop, InteractionState};

pub use mode::{ColorMode, ColorModePreference, ModeValue};

pub use palette::{
    dark_surface, parse_hex_color, rgb_to_hex, Color, ColorScale, DARK_SURFACE, NEUTRAL,
};

pub use resolver::{
    resolve_accent_color, resolve_color_mode, resolve_fill, resolve_gradient, resolve_value,
};

pub use state::{
    set_system_appearance_detector, system_color_mode, SystemAppearanceDetector, ThemeConfig,
    ThemeProvider, ThemeStack, ThemeState,
};
