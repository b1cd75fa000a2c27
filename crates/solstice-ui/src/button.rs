//! Button component
//!
//! The accent surface component: filled buttons paint the resolved accent
//! fill (gradient or solid fallback), outlined buttons border with the
//! accent instead. Pressing shifts the fill one step lighter in light mode;
//! dark mode keeps the flat dark surface in every state.

use crate::style::{is_default_style, ComponentId, EventHandler, StyleProps};
use crate::tokens::{border, radius, sizing};
use serde::{Deserialize, Serialize};
use solstice_theme::resolver::{resolve_accent_color, resolve_color_mode, resolve_fill, resolve_value};
use solstice_theme::{AccentColor, Color, ColorMode, Fill, InteractionState, ThemeState, DARK_SURFACE, NEUTRAL};

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Accent-filled button
    #[default]
    Filled,
    /// Outlined button with accent border
    Outlined,
}

/// Button sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Small button (32px)
    Sm,
    /// Medium button (40px)
    #[default]
    Md,
    /// Large button (48px)
    Lg,
}

impl ButtonSize {
    /// Button height in pixels
    pub fn height(&self) -> f32 {
        match self {
            Self::Sm => sizing::button::SM_HEIGHT,
            Self::Md => sizing::button::MD_HEIGHT,
            Self::Lg => sizing::button::LG_HEIGHT,
        }
    }

    /// Horizontal padding in pixels
    pub fn padding_x(&self) -> f32 {
        match self {
            Self::Sm => sizing::button::SM_PADDING_X,
            Self::Md => sizing::button::MD_PADDING_X,
            Self::Lg => sizing::button::LG_PADDING_X,
        }
    }
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Button title text
    pub title: String,
    /// Button style variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Button size
    #[serde(default)]
    pub size: ButtonSize,
    /// Per-component accent override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<AccentColor>,
    /// Per-component color mode override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<ColorMode>,
    /// Whether the button is currently pressed
    #[serde(default)]
    pub is_pressed: bool,
    /// Whether the button is disabled
    #[serde(default)]
    pub is_disabled: bool,
    /// Icon name rendered before the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_left: Option<String>,
    /// Icon name rendered after the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_right: Option<String>,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Accessibility label read by screen readers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
    /// Additional style fragment
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Button {
    /// Create a new button with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            accent_color: None,
            color_mode: None,
            is_pressed: false,
            is_disabled: false,
            icon_left: None,
            icon_right: None,
            on_press: None,
            accessibility_label: None,
            style: StyleProps::default(),
        }
    }

    /// Set the button variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Override the accent color for this button only
    pub fn with_accent(mut self, accent: AccentColor) -> Self {
        self.accent_color = Some(accent);
        self
    }

    /// Override the color mode for this button only
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = Some(mode);
        self
    }

    /// Set pressed state
    pub fn pressed(mut self, pressed: bool) -> Self {
        self.is_pressed = pressed;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    /// Set the leading icon
    pub fn with_icon_left(mut self, icon: impl Into<String>) -> Self {
        self.icon_left = Some(icon.into());
        self
    }

    /// Set the trailing icon
    pub fn with_icon_right(mut self, icon: impl Into<String>) -> Self {
        self.icon_right = Some(icon.into());
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Set custom style
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Current interaction state
    pub fn interaction_state(&self) -> InteractionState {
        if self.is_pressed {
            InteractionState::Pressed
        } else {
            InteractionState::Rest
        }
    }

    /// Get the computed styles for this button
    pub fn computed_styles(&self, state: &ThemeState) -> ButtonStyles {
        let mode = resolve_color_mode(self.color_mode, state);
        let accent = resolve_accent_color(self.accent_color, state);
        let effective = ThemeState {
            color_mode: mode,
            accent,
            ..*state
        };

        let (fill, text_color, border_color, border_width) = if self.is_disabled {
            let surface = resolve_value(NEUTRAL.s200, DARK_SURFACE[3], mode).to_string();
            let text = resolve_value(NEUTRAL.s500, NEUTRAL.s600, mode).to_string();
            (Fill::Solid(surface), text, None, border::NONE)
        } else {
            match self.variant {
                ButtonVariant::Filled => {
                    let fill = resolve_fill(&effective, accent, self.interaction_state());
                    let text = resolve_value("#FFFFFF", NEUTRAL.s300, mode).to_string();
                    (fill, text, None, border::NONE)
                }
                ButtonVariant::Outlined => {
                    let scale = accent.scale();
                    let text = resolve_value(scale.s600, scale.s300, mode).to_string();
                    let edge = resolve_value(scale.s500, scale.s400, mode).to_string();
                    (
                        Fill::Solid("transparent".to_string()),
                        text,
                        Some(edge),
                        border::THIN,
                    )
                }
            }
        };

        ButtonStyles {
            fill,
            text_color,
            border_color,
            border_width,
            height: self.size.height(),
            padding_x: self.size.padding_x(),
            border_radius: radius::LG,
            opacity: if self.is_disabled { 0.7 } else { 1.0 },
        }
    }
}

/// Computed button styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyles {
    /// Background fill
    pub fill: Fill,
    /// Title text color
    pub text_color: Color,
    /// Border color (outlined variant)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Border width
    pub border_width: f32,
    /// Button height
    pub height: f32,
    /// Horizontal padding
    pub padding_x: f32,
    /// Border radius
    pub border_radius: f32,
    /// Opacity
    pub opacity: f32,
}

// =============================================================================
// Tests
// =============================================================================
