//! Message component
//!
//! Inline feedback banner. The message kind picks the accent: info renders
//! in the primary accent, errors in red, success in emerald. Dark mode
//! flattens the surface to the neutral dark ramp and keeps the kind visible
//! through the leading border tint.

use crate::style::ComponentId;
use crate::tokens::{border, radius};
use serde::{Deserialize, Serialize};
use solstice_theme::resolver::{resolve_color_mode, resolve_value};
use solstice_theme::{AccentColor, Color, ColorMode, ThemeState, DARK_SURFACE, NEUTRAL};

/// Message kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Informational message
    #[default]
    Info,
    /// Error message
    Error,
    /// Success message
    Success,
}

impl MessageKind {
    /// The accent this kind renders in
    pub fn accent(&self) -> AccentColor {
        match self {
            Self::Info => AccentColor::Primary,
            Self::Error => AccentColor::Red,
            Self::Success => AccentColor::Emerald,
        }
    }
}

/// Message component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Message kind
    #[serde(rename = "type", default)]
    pub kind: MessageKind,
    /// Optional bold lead-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Message body text
    pub body: String,
    /// Per-component color mode override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<ColorMode>,
}

impl Message {
    /// Create an info message
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: MessageKind::default(),
            title: None,
            body: body.into(),
            color_mode: None,
        }
    }

    /// Create an error message
    pub fn error(body: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            ..Self::new(body)
        }
    }

    /// Create a success message
    pub fn success(body: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            ..Self::new(body)
        }
    }

    /// Set the lead-in title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Override the color mode for this message only
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = Some(mode);
        self
    }

    /// Get the computed styles for this message
    pub fn computed_styles(&self, state: &ThemeState) -> MessageStyles {
        let mode = resolve_color_mode(self.color_mode, state);
        let scale = self.kind.accent().scale();

        MessageStyles {
            background: resolve_value(scale.s100, DARK_SURFACE[4], mode).to_string(),
            text_color: resolve_value(scale.s900, NEUTRAL.s50, mode).to_string(),
            border_color: resolve_value(scale.s500, scale.s400, mode).to_string(),
            border_width: border::MEDIUM,
            border_radius: radius::MD,
        }
    }
}

/// Computed message styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStyles {
    /// Banner surface color
    pub background: Color,
    /// Body text color
    pub text_color: Color,
    /// Leading border tint
    pub border_color: Color,
    /// Leading border width
    pub border_width: f32,
    /// Corner radius
    pub border_radius: f32,
}

// =============================================================================
// Tests
// =============================================================================
