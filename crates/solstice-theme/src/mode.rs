//! Color modes and mode-dependent value pairs
//!
//! [`ColorMode`] is the concrete light/dark mode active for a resolution
//! call. [`ColorModePreference`] is the configuration-level trio a host
//! supplies before the provider pins the mode down (`System` follows the OS
//! appearance at mount). [`ModeValue`] carries a light/dark pair for callers
//! that want a mode-dependent value.

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Mode
// =============================================================================

/// Light or dark rendering mode
///
/// Exactly one mode is active for any given resolution call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light rendering mode
    #[default]
    Light,
    /// Dark rendering mode
    Dark,
}

impl ColorMode {
    /// Check whether this is the dark mode
    pub fn is_dark(&self) -> bool {
        matches!(self, ColorMode::Dark)
    }

    /// Get the opposite mode
    pub fn toggled(&self) -> ColorMode {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Light => write!(f, "light"),
            ColorMode::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(format!("Unknown color mode: {}", s)),
        }
    }
}

// =============================================================================
// Color Mode Preference
// =============================================================================

/// Host preference for the provider's initial color mode
///
/// `System` defers to the OS appearance, read once when the provider mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModePreference {
    /// Follow the operating system appearance
    #[default]
    System,
    /// Always light
    Light,
    /// Always dark
    Dark,
}

impl ColorModePreference {
    /// Resolve the preference to a concrete mode, consulting `detect` only
    /// for the `System` case
    pub fn resolve_with(self, detect: impl FnOnce() -> ColorMode) -> ColorMode {
        match self {
            ColorModePreference::System => detect(),
            ColorModePreference::Light => ColorMode::Light,
            ColorModePreference::Dark => ColorMode::Dark,
        }
    }
}

// =============================================================================
// Mode-Dependent Values
// =============================================================================

/// A light/dark value pair
///
/// Callers build one of these when a value (color, icon name, numeric style)
/// depends on the active mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModeValue<T> {
    /// Value used in light mode
    pub light: T,
    /// Value used in dark mode
    pub dark: T,
}

impl<T> ModeValue<T> {
    /// Create a new light/dark pair
    pub fn new(light: T, dark: T) -> Self {
        Self { light, dark }
    }

    /// Borrow the value for the given mode
    pub fn resolve(&self, mode: ColorMode) -> &T {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// Consume the pair, returning the value for the given mode
    pub fn into_resolved(self, mode: ColorMode) -> T {
        match mode {
            ColorMode::Light => self.light,
            ColorMode::Dark => self.dark,
        }
    }
}
