//! Radio group component
//!
//! A group owns the selection: a radio is selected iff its value equals the
//! group's selected value, where a controlled `value` beats the uncontrolled
//! `default_value`. Ring tinting keeps the usual precedence of state flags:
//! disabled beats invalid beats the accent tint.

use crate::style::{ComponentId, EventHandler};
use crate::tokens::{border, sizing, spacing};
use serde::{Deserialize, Serialize};
use solstice_theme::palette::RED;
use solstice_theme::resolver::{resolve_accent_color, resolve_color_mode, resolve_value};
use solstice_theme::{AccentColor, Color, ColorMode, ThemeState, NEUTRAL};

/// Radio control sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadioSize {
    /// Small radio (16px)
    Sm,
    /// Medium radio (20px)
    #[default]
    Md,
    /// Large radio (24px)
    Lg,
}

impl RadioSize {
    /// Control diameter in pixels
    pub fn diameter(&self) -> f32 {
        match self {
            Self::Sm => sizing::radio::SM,
            Self::Md => sizing::radio::MD,
            Self::Lg => sizing::radio::LG,
        }
    }
}

fn default_space() -> f32 {
    4.0
}

/// A single radio option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Radio {
    /// Value reported when this radio is selected
    pub value: String,
    /// Visible label
    pub label: String,
    /// Control size
    #[serde(default)]
    pub size: RadioSize,
    /// Gap between control and label, in grid units
    #[serde(default = "default_space")]
    pub space: f32,
    /// Whether the radio is disabled
    #[serde(default)]
    pub is_disabled: bool,
    /// Whether the pointer is over the radio
    #[serde(default)]
    pub is_hovered: bool,
    /// Whether the radio is currently pressed
    #[serde(default)]
    pub is_pressed: bool,
    /// Whether the radio has focus
    #[serde(default)]
    pub is_focused: bool,
    /// Whether the radio is in an invalid group
    #[serde(default)]
    pub is_invalid: bool,
    /// Whether keyboard focus should be shown
    #[serde(default)]
    pub is_focus_visible: bool,
    /// Per-component accent override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<AccentColor>,
    /// Per-component color mode override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<ColorMode>,
}

impl Default for Radio {
    fn default() -> Self {
        Self {
            value: String::new(),
            label: String::new(),
            size: RadioSize::default(),
            space: default_space(),
            is_disabled: false,
            is_hovered: false,
            is_pressed: false,
            is_focused: false,
            is_invalid: false,
            is_focus_visible: false,
            accent_color: None,
            color_mode: None,
        }
    }
}

impl Radio {
    /// Create a radio with a value and label
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    /// Set the control size
    pub fn with_size(mut self, size: RadioSize) -> Self {
        self.size = size;
        self
    }

    /// Override the accent color for this radio only
    pub fn with_accent(mut self, accent: AccentColor) -> Self {
        self.accent_color = Some(accent);
        self
    }

    /// Override the color mode for this radio only
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = Some(mode);
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    /// Set invalid state
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.is_invalid = invalid;
        self
    }

    /// Set pressed state
    pub fn pressed(mut self, pressed: bool) -> Self {
        self.is_pressed = pressed;
        self
    }

    /// Set hovered state
    pub fn hovered(mut self, hovered: bool) -> Self {
        self.is_hovered = hovered;
        self
    }

    /// Set visible keyboard focus
    pub fn focus_visible(mut self, visible: bool) -> Self {
        self.is_focus_visible = visible;
        self
    }

    /// Gap between control and label in pixels
    pub fn spacing_px(&self) -> f32 {
        spacing::resolve(self.space)
    }

    /// Get the computed styles for this radio
    ///
    /// `selected` comes from the owning group, see
    /// [`RadioGroup::is_selected`].
    pub fn computed_styles(&self, state: &ThemeState, selected: bool) -> RadioStyles {
        let mode = resolve_color_mode(self.color_mode, state);
        let accent = resolve_accent_color(self.accent_color, state);
        let scale = accent.scale();

        let ring = if self.is_disabled {
            resolve_value(NEUTRAL.s300, NEUTRAL.s700, mode)
        } else if self.is_invalid {
            resolve_value(RED.s500, RED.s400, mode)
        } else if selected {
            if self.is_pressed {
                resolve_value(scale.s400, scale.s200, mode)
            } else {
                resolve_value(scale.s500, scale.s300, mode)
            }
        } else if self.is_hovered || self.is_pressed {
            // Accent preview before selection
            resolve_value(scale.s400, scale.s500, mode)
        } else {
            resolve_value(NEUTRAL.s400, NEUTRAL.s600, mode)
        };

        let dot_color = if selected {
            Some(ring.to_string())
        } else {
            None
        };

        let label_color = if self.is_disabled {
            resolve_value(NEUTRAL.s400, NEUTRAL.s600, mode)
        } else {
            resolve_value(NEUTRAL.s900, NEUTRAL.s50, mode)
        };

        let focus_ring_color = if self.is_focus_visible && !self.is_disabled {
            Some(resolve_value(scale.s200, scale.s800, mode).to_string())
        } else {
            None
        };

        RadioStyles {
            diameter: self.size.diameter(),
            border_color: ring.to_string(),
            border_width: border::MEDIUM,
            dot_color,
            label_color: label_color.to_string(),
            focus_ring_color,
            opacity: if self.is_disabled { 0.7 } else { 1.0 },
        }
    }
}

/// Computed radio styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioStyles {
    /// Control diameter
    pub diameter: f32,
    /// Ring color
    pub border_color: Color,
    /// Ring width
    pub border_width: f32,
    /// Inner dot color, present when selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot_color: Option<Color>,
    /// Label text color
    pub label_color: Color,
    /// Focus ring color, present under visible keyboard focus
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_ring_color: Option<Color>,
    /// Opacity
    pub opacity: f32,
}

/// A group of radio options sharing one selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioGroup {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Form name shared by the group
    pub name: String,
    /// Controlled selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Uncontrolled initial selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Gap between radios, in grid units
    #[serde(default = "default_space")]
    pub space: f32,
    /// On change event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change: Option<EventHandler>,
    /// Radios in the group
    #[serde(default)]
    pub children: Vec<Radio>,
}

impl Default for RadioGroup {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            value: None,
            default_value: None,
            space: default_space(),
            on_change: None,
            children: Vec::new(),
        }
    }
}

impl RadioGroup {
    /// Create a new group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the controlled selection
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the uncontrolled initial selection
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Set the gap between radios, in grid units
    pub fn with_space(mut self, space: f32) -> Self {
        self.space = space;
        self
    }

    /// Add a radio to the group
    pub fn with_radio(mut self, radio: Radio) -> Self {
        self.children.push(radio);
        self
    }

    /// Set on change handler
    pub fn on_change(mut self, handler: impl Into<String>) -> Self {
        self.on_change = Some(handler.into());
        self
    }

    /// The effective selection: controlled value beats the default
    pub fn selected_value(&self) -> Option<&str> {
        self.value.as_deref().or(self.default_value.as_deref())
    }

    /// Whether the given radio is the selected one
    pub fn is_selected(&self, radio: &Radio) -> bool {
        self.selected_value() == Some(radio.value.as_str())
    }

    /// Gap between radios in pixels
    pub fn spacing_px(&self) -> f32 {
        spacing::resolve(self.space)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn light_state() -> ThemeState {
        ThemeState {
            color_mode: ColorMode::Light,
            accent: AccentColor::Primary,
            gradients: true,
        }
    }

    fn dark_state() -> ThemeState {
        ThemeState {
            color_mode: ColorMode::Dark,
            ..light_state()
        }
    }

    // ==========================================================================
    // Selection Tests
    // ==========================================================================

    #[test]
    fn test_controlled_value_beats_default() {
        let group = RadioGroup::new("plan")
            .with_default_value("free")
            .with_value("pro");
        assert_eq!(group.selected_value(), Some("pro"));
    }

    #[test]
    fn test_default_value_used_when_uncontrolled() {
        let group = RadioGroup::new("plan").with_default_value("free");
        assert_eq!(group.selected_value(), Some("free"));
    }

    #[test]
    fn test_no_selection() {
        let group = RadioGroup::new("plan");
        assert_eq!(group.selected_value(), None);

        let radio = Radio::new("free", "Free");
        assert!(!group.is_selected(&radio));
    }

    #[test]
    fn test_is_selected_matches_by_value() {
        let group = RadioGroup::new("plan")
            .with_value("pro")
            .with_radio(Radio::new("free", "Free"))
            .with_radio(Radio::new("pro", "Pro"));

        assert!(!group.is_selected(&group.children[0]));
        assert!(group.is_selected(&group.children[1]));
    }

    // ==========================================================================
    // Style Tests
    // ==========================================================================

    #[test]
    fn test_selected_ring_uses_accent() {
        let radio = Radio::new("a", "A").with_accent(AccentColor::Emerald);

        let styles = radio.computed_styles(&light_state(), true);
        assert_eq!(styles.border_color, "#10B981");
        assert_eq!(styles.dot_color, Some("#10B981".to_string()));

        let styles = radio.computed_styles(&dark_state(), true);
        assert_eq!(styles.border_color, "#6EE7B7");
    }

    #[test]
    fn test_unselected_ring_is_neutral() {
        let radio = Radio::new("a", "A");
        let styles = radio.computed_styles(&light_state(), false);
        assert_eq!(styles.border_color, NEUTRAL.s400);
        assert_eq!(styles.dot_color, None);
    }

    #[test]
    fn test_invalid_forces_red_even_when_selected() {
        let radio = Radio::new("a", "A")
            .with_accent(AccentColor::Emerald)
            .invalid(true);

        let styles = radio.computed_styles(&light_state(), true);
        assert_eq!(styles.border_color, RED.s500);
    }

    #[test]
    fn test_disabled_beats_invalid() {
        let radio = Radio::new("a", "A").invalid(true).disabled(true);

        let styles = radio.computed_styles(&light_state(), true);
        assert_eq!(styles.border_color, NEUTRAL.s300);
        assert!(styles.opacity < 1.0);
    }

    #[test]
    fn test_pressed_selection_shifts_lighter() {
        let radio = Radio::new("a", "A").pressed(true);
        let styles = radio.computed_styles(&light_state(), true);
        // Indigo 400 instead of the resting 500
        assert_eq!(styles.border_color, "#818CF8");
    }

    #[test]
    fn test_focus_ring_only_when_visible() {
        let radio = Radio::new("a", "A").focus_visible(true);
        let styles = radio.computed_styles(&light_state(), false);
        assert!(styles.focus_ring_color.is_some());

        let radio = Radio::new("a", "A");
        let styles = radio.computed_styles(&light_state(), false);
        assert!(styles.focus_ring_color.is_none());
    }

    #[test]
    fn test_diameters_follow_size() {
        assert_eq!(RadioSize::Sm.diameter(), 16.0);
        assert_eq!(RadioSize::Md.diameter(), 20.0);
        assert_eq!(RadioSize::Lg.diameter(), 24.0);
    }

    #[test]
    fn test_space_defaults_to_four_units() {
        let group = RadioGroup::new("plan");
        assert_eq!(group.spacing_px(), 16.0);

        let radio = Radio::new("a", "A");
        assert_eq!(radio.spacing_px(), 16.0);
    }

    #[test]
    fn test_group_serde_defaults() {
        let group: RadioGroup = serde_json::from_str(r#"{"name":"plan"}"#).unwrap();
        assert_eq!(group.space, 4.0);
        assert!(group.children.is_empty());

        let json = serde_json::to_string(&RadioGroup::new("plan").with_value("a")).unwrap();
        assert!(json.contains(r#""value":"a""#));
        assert!(!json.contains("defaultValue"));
    }
}
