//! Theme provider state and provider nesting
//!
//! A [`ThemeProvider`] owns the active color mode, subtree-default accent,
//! and the gradients flag for one mounted scope. Handles are cheap clones
//! sharing the same state, so a mode change is visible to every handle on
//! its next [`state`](ThemeProvider::state) read. [`ThemeStack`] models
//! provider nesting: the innermost provider shadows the outer ones, and an
//! empty stack is the configuration error the contract surfaces at
//! initialization time.

use crate::accent::AccentColor;
use crate::error::ConfigError;
use crate::mode::{ColorMode, ColorModePreference};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// System Appearance
// =============================================================================

/// Function that reports the operating system appearance
pub type SystemAppearanceDetector = fn() -> ColorMode;

fn os_appearance() -> ColorMode {
    match dark_light::detect() {
        dark_light::Mode::Dark => ColorMode::Dark,
        dark_light::Mode::Light => ColorMode::Light,
    }
}

static SYSTEM_APPEARANCE: Lazy<Mutex<SystemAppearanceDetector>> =
    Lazy::new(|| Mutex::new(os_appearance));

/// Replace the system appearance detector, returning the previous one
///
/// Tests install a fixed detector so provider construction is deterministic;
/// restore the returned detector afterwards.
pub fn set_system_appearance_detector(
    detector: SystemAppearanceDetector,
) -> SystemAppearanceDetector {
    let mut current = SYSTEM_APPEARANCE.lock();
    std::mem::replace(&mut *current, detector)
}

/// Read the current system appearance through the installed detector
pub fn system_color_mode() -> ColorMode {
    let detector = *SYSTEM_APPEARANCE.lock();
    detector()
}

// =============================================================================
// Configuration
// =============================================================================

/// Construction-time configuration for a [`ThemeProvider`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    /// Initial color mode preference
    pub color_mode: ColorModePreference,
    /// Subtree-default accent color
    pub accent: AccentColor,
    /// Whether components paint gradient fills
    pub gradients: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color_mode: ColorModePreference::System,
            accent: AccentColor::Primary,
            gradients: true,
        }
    }
}

impl ThemeConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color mode preference
    pub fn with_color_mode(mut self, preference: ColorModePreference) -> Self {
        self.color_mode = preference;
        self
    }

    /// Set the subtree-default accent
    pub fn with_accent(mut self, accent: AccentColor) -> Self {
        self.accent = accent;
        self
    }

    /// Enable or disable gradient fills
    pub fn with_gradients(mut self, enabled: bool) -> Self {
        self.gradients = enabled;
        self
    }
}

// =============================================================================
// Theme State
// =============================================================================

/// Snapshot of provider state passed by reference into resolution calls
///
/// `Copy` so a component takes one snapshot per styling pass; a mode change
/// mid-pass cannot produce a half-updated set of styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeState {
    /// Active color mode
    pub color_mode: ColorMode,
    /// Subtree-default accent
    pub accent: AccentColor,
    /// Whether components paint gradient fills
    pub gradients: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Light,
            accent: AccentColor::Primary,
            gradients: true,
        }
    }
}

// =============================================================================
// Theme Provider
// =============================================================================

#[derive(Debug)]
struct ProviderState {
    color_mode: ColorMode,
    accent: AccentColor,
    gradients: bool,
}

/// Subtree-scoped theme state
///
/// Created once per provider mount. Clones share the underlying state.
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    inner: Arc<RwLock<ProviderState>>,
}

impl ThemeProvider {
    /// Mount a provider from configuration
    ///
    /// A `System` preference reads the OS appearance here, once; later OS
    /// changes reach the provider through [`set_color_mode`](Self::set_color_mode).
    pub fn new(config: ThemeConfig) -> Self {
        let color_mode = config.color_mode.resolve_with(system_color_mode);
        tracing::info!(
            %color_mode,
            accent = %config.accent,
            gradients = config.gradients,
            "theme provider mounted"
        );
        Self {
            inner: Arc::new(RwLock::new(ProviderState {
                color_mode,
                accent: config.accent,
                gradients: config.gradients,
            })),
        }
    }

    /// Take a state snapshot for a styling pass
    pub fn state(&self) -> ThemeState {
        let state = self.inner.read();
        ThemeState {
            color_mode: state.color_mode,
            accent: state.accent,
            gradients: state.gradients,
        }
    }

    /// Get the active color mode
    pub fn color_mode(&self) -> ColorMode {
        self.inner.read().color_mode
    }

    /// Set the color mode
    ///
    /// Setting the already-active mode is a no-op, so repeated invocations
    /// with the same mode are indistinguishable from a single one.
    pub fn set_color_mode(&self, mode: ColorMode) {
        let mut state = self.inner.write();
        if state.color_mode == mode {
            tracing::debug!(%mode, "color mode unchanged");
            return;
        }
        tracing::info!(from = %state.color_mode, to = %mode, "color mode changed");
        state.color_mode = mode;
    }

    /// Flip between light and dark
    pub fn toggle_color_mode(&self) {
        let next = self.color_mode().toggled();
        self.set_color_mode(next);
    }

    /// Set the subtree-default accent
    pub fn set_accent(&self, accent: AccentColor) {
        self.inner.write().accent = accent;
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(ThemeConfig::default())
    }
}

// =============================================================================
// Provider Stack
// =============================================================================

/// Provider nesting for a render tree
///
/// Push on provider mount, pop on unmount. [`active`](ThemeStack::active)
/// returns the innermost provider; components look their provider up once at
/// initialization, so [`ConfigError::MissingProvider`] surfaces there and
/// resolution itself never fails.
#[derive(Debug, Clone, Default)]
pub struct ThemeStack {
    providers: Vec<ThemeProvider>,
}

impl ThemeStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Push a provider (innermost last)
    pub fn push(&mut self, provider: ThemeProvider) {
        self.providers.push(provider);
        tracing::debug!(depth = self.providers.len(), "theme provider pushed");
    }

    /// Pop the innermost provider
    pub fn pop(&mut self) -> Option<ThemeProvider> {
        let popped = self.providers.pop();
        if popped.is_some() {
            tracing::debug!(depth = self.providers.len(), "theme provider popped");
        }
        popped
    }

    /// Get the innermost provider
    pub fn active(&self) -> Result<&ThemeProvider, ConfigError> {
        self.providers.last().ok_or(ConfigError::MissingProvider)
    }

    /// Take a state snapshot of the innermost provider
    pub fn active_state(&self) -> Result<ThemeState, ConfigError> {
        Ok(self.active()?.state())
    }

    /// Get the stack depth
    pub fn depth(&self) -> usize {
        self.providers.len()
    }

    /// Check whether any provider is mounted
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Configuration Tests
    // ==========================================================================

    #[test]
    fn test_config_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.color_mode, ColorModePreference::System);
        assert_eq!(config.accent, AccentColor::Primary);
        assert!(config.gradients);
    }

    #[test]
    fn test_config_builder() {
        let config = ThemeConfig::new()
            .with_color_mode(ColorModePreference::Dark)
            .with_accent(AccentColor::Emerald)
            .with_gradients(false);
        assert_eq!(config.color_mode, ColorModePreference::Dark);
        assert_eq!(config.accent, AccentColor::Emerald);
        assert!(!config.gradients);
    }

    #[test]
    fn test_config_serde_camel_case() {
        let config = ThemeConfig::new().with_color_mode(ColorModePreference::Light);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"colorMode\":\"light\""));

        // Missing fields fall back to defaults
        let parsed: ThemeConfig = serde_json::from_str("{\"gradients\":false}").unwrap();
        assert_eq!(parsed.color_mode, ColorModePreference::System);
        assert_eq!(parsed.accent, AccentColor::Primary);
        assert!(!parsed.gradients);
    }

    // ==========================================================================
    // Provider Tests
    // ==========================================================================

    #[test]
    fn test_provider_explicit_preference() {
        let provider =
            ThemeProvider::new(ThemeConfig::new().with_color_mode(ColorModePreference::Dark));
        assert_eq!(provider.color_mode(), ColorMode::Dark);

        let provider =
            ThemeProvider::new(ThemeConfig::new().with_color_mode(ColorModePreference::Light));
        assert_eq!(provider.color_mode(), ColorMode::Light);
    }

    #[test]
    fn test_provider_system_preference_uses_detector() {
        let previous = set_system_appearance_detector(|| ColorMode::Dark);
        let provider =
            ThemeProvider::new(ThemeConfig::new().with_color_mode(ColorModePreference::System));
        let mode = provider.color_mode();
        set_system_appearance_detector(previous);
        assert_eq!(mode, ColorMode::Dark);
    }

    #[test]
    fn test_set_color_mode_is_idempotent() {
        let provider =
            ThemeProvider::new(ThemeConfig::new().with_color_mode(ColorModePreference::Light));

        provider.set_color_mode(ColorMode::Dark);
        let first = provider.state();
        provider.set_color_mode(ColorMode::Dark);
        let second = provider.state();

        assert_eq!(first.color_mode, ColorMode::Dark);
        assert_eq!(first, second);
    }

    #[test]
    fn test_toggle_color_mode() {
        let provider =
            ThemeProvider::new(ThemeConfig::new().with_color_mode(ColorModePreference::Light));
        provider.toggle_color_mode();
        assert_eq!(provider.color_mode(), ColorMode::Dark);
        provider.toggle_color_mode();
        assert_eq!(provider.color_mode(), ColorMode::Light);
    }

    #[test]
    fn test_clones_share_state() {
        let provider =
            ThemeProvider::new(ThemeConfig::new().with_color_mode(ColorModePreference::Light));
        let handle = provider.clone();

        provider.set_color_mode(ColorMode::Dark);
        assert_eq!(handle.color_mode(), ColorMode::Dark);

        handle.set_accent(AccentColor::Rose);
        assert_eq!(provider.state().accent, AccentColor::Rose);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let provider =
            ThemeProvider::new(ThemeConfig::new().with_color_mode(ColorModePreference::Light));
        let snapshot = provider.state();
        provider.set_color_mode(ColorMode::Dark);

        // The old snapshot keeps the mode it was taken with; the next read
        // observes the change
        assert_eq!(snapshot.color_mode, ColorMode::Light);
        assert_eq!(provider.state().color_mode, ColorMode::Dark);
    }

    // ==========================================================================
    // Provider Stack Tests
    // ==========================================================================

    #[test]
    fn test_empty_stack_is_missing_provider() {
        let stack = ThemeStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.active().unwrap_err(), ConfigError::MissingProvider);
        assert_eq!(
            stack.active_state().unwrap_err(),
            ConfigError::MissingProvider
        );
    }

    #[test]
    fn test_nested_provider_shadows_outer() {
        let mut stack = ThemeStack::new();
        stack.push(ThemeProvider::new(
            ThemeConfig::new()
                .with_color_mode(ColorModePreference::Light)
                .with_accent(AccentColor::Blue),
        ));
        stack.push(ThemeProvider::new(
            ThemeConfig::new()
                .with_color_mode(ColorModePreference::Dark)
                .with_accent(AccentColor::Rose),
        ));

        let state = stack.active_state().unwrap();
        assert_eq!(state.color_mode, ColorMode::Dark);
        assert_eq!(state.accent, AccentColor::Rose);
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_pop_restores_outer_provider() {
        let mut stack = ThemeStack::new();
        stack.push(ThemeProvider::new(
            ThemeConfig::new().with_color_mode(ColorModePreference::Light),
        ));
        stack.push(ThemeProvider::new(
            ThemeConfig::new().with_color_mode(ColorModePreference::Dark),
        ));

        assert!(stack.pop().is_some());
        let state = stack.active_state().unwrap();
        assert_eq!(state.color_mode, ColorMode::Light);

        assert!(stack.pop().is_some());
        assert!(stack.pop().is_none());
        assert!(stack.is_empty());
    }
}
