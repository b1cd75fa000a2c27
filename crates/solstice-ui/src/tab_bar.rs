//! Tab bar component
//!
//! The bar owns the active selection through `active_index`. Accent
//! resolution runs the usual three-level chain, with one extra rung: a
//! per-tab accent beats the bar's accent, which beats the provider. Tab
//! labels render in caption typography.

use crate::style::{ComponentId, EventHandler};
use crate::typography::TypographyVariant;
use serde::{Deserialize, Serialize};
use solstice_theme::palette::WHITE;
use solstice_theme::resolver::{resolve_accent_color, resolve_color_mode, resolve_value};
use solstice_theme::{AccentColor, Color, ColorMode, ThemeState, DARK_SURFACE, NEUTRAL};

/// Default tab icon size in pixels
const DEFAULT_ICON_SIZE: f32 = 24.0;

/// A single tab
///
/// A tab renders its icon, its label, or both; construct with
/// [`Tab::new`], [`Tab::icon_only`], or [`Tab::label_only`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    /// Tab label, rendered as caption text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Icon size override in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<f32>,
    /// Per-tab accent override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<AccentColor>,
    /// Per-tab color mode override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<ColorMode>,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
}

impl Tab {
    /// Create a tab with an icon and a label
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            icon: Some(icon.into()),
            ..Default::default()
        }
    }

    /// Create an icon-only tab
    pub fn icon_only(icon: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            ..Default::default()
        }
    }

    /// Create a label-only tab
    pub fn label_only(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// Override the accent color for this tab only
    pub fn with_accent(mut self, accent: AccentColor) -> Self {
        self.accent_color = Some(accent);
        self
    }

    /// Override the color mode for this tab only
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = Some(mode);
        self
    }

    /// Set the icon size in pixels
    pub fn with_icon_size(mut self, size: f32) -> Self {
        self.icon_size = Some(size);
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Effective icon size in pixels
    pub fn icon_size_px(&self) -> f32 {
        self.icon_size.unwrap_or(DEFAULT_ICON_SIZE)
    }
}

/// Tab bar component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBar {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Tabs in display order
    #[serde(default)]
    pub tabs: Vec<Tab>,
    /// Index of the focused tab
    #[serde(default)]
    pub active_index: usize,
    /// Bar-level accent override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<AccentColor>,
    /// Bar-level color mode override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<ColorMode>,
}

impl TabBar {
    /// Create an empty tab bar
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tab
    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.tabs.push(tab);
        self
    }

    /// Set the focused tab index
    pub fn with_active_index(mut self, index: usize) -> Self {
        self.active_index = index;
        self
    }

    /// Override the accent color for the whole bar
    pub fn with_accent(mut self, accent: AccentColor) -> Self {
        self.accent_color = Some(accent);
        self
    }

    /// Override the color mode for the whole bar
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = Some(mode);
        self
    }

    /// Whether the tab at `index` is focused
    pub fn is_focused(&self, index: usize) -> bool {
        self.active_index == index
    }

    /// Get the computed styles for the bar surface
    pub fn computed_styles(&self, state: &ThemeState) -> TabBarStyles {
        let mode = resolve_color_mode(self.color_mode, state);

        TabBarStyles {
            background: resolve_value(WHITE, DARK_SURFACE[2], mode).to_string(),
            border_top_color: resolve_value(NEUTRAL.s200, DARK_SURFACE[5], mode).to_string(),
        }
    }

    /// Get the computed styles for the tab at `index`
    ///
    /// The tab's own accent and mode overrides beat the bar's, which beat
    /// the provider state.
    pub fn tab_styles(&self, index: usize, state: &ThemeState) -> Option<TabStyles> {
        let tab = self.tabs.get(index)?;
        let mode = resolve_color_mode(tab.color_mode.or(self.color_mode), state);
        let accent = resolve_accent_color(tab.accent_color.or(self.accent_color), state);
        let scale = accent.scale();

        let tint = if self.is_focused(index) {
            resolve_value(scale.s500, scale.s300, mode)
        } else {
            resolve_value(NEUTRAL.s500, NEUTRAL.s400, mode)
        };

        Some(TabStyles {
            tint: tint.to_string(),
            icon_size: tab.icon_size_px(),
            label_variant: TypographyVariant::Caption,
        })
    }
}

/// Computed bar surface styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarStyles {
    /// Bar background color
    pub background: Color,
    /// Hairline separator above the bar
    pub border_top_color: Color,
}

/// Computed per-tab styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabStyles {
    /// Icon and label tint
    pub tint: Color,
    /// Icon size in pixels
    pub icon_size: f32,
    /// Typography for the label
    pub label_variant: TypographyVariant,
}

// =============================================================================
// Tests
// =============================================================================
