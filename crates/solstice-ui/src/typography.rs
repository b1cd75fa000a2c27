//! Typography system for Solstice
//!
//! This module provides the type ramp as semantic variants plus a themed
//! [`Text`] node. Variant names follow platform conventions (large title
//! down to caption); each maps to a concrete [`TextStyle`].

use crate::style::{is_default_style, ComponentId, StyleProps};
use crate::tokens::{font_weight, line_height, tracking};
use serde::{Deserialize, Serialize};
use solstice_theme::resolver::{resolve_color_mode, resolve_value};
use solstice_theme::{Color, ColorMode, ThemeState, NEUTRAL};

// =============================================================================
// Font Size Scale
// =============================================================================

/// Font size scale in pixels
pub mod font_size {
    /// Extra small (12px)
    pub const XS: f32 = 12.0;
    /// Small (14px)
    pub const SM: f32 = 14.0;
    /// Medium (16px)
    pub const MD: f32 = 16.0;
    /// Large (18px)
    pub const LG: f32 = 18.0;
    /// Extra large (20px)
    pub const XL: f32 = 20.0;
    /// 2x large (24px)
    pub const XL2: f32 = 24.0;
    /// 3x large (30px)
    pub const XL3: f32 = 30.0;
    /// 4x large (36px)
    pub const XL4: f32 = 36.0;

    /// Get font size by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(XS),
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "2xl" => Some(XL2),
            "3xl" => Some(XL3),
            "4xl" => Some(XL4),
            _ => None,
        }
    }
}

// =============================================================================
// Typography Style
// =============================================================================

/// A typography style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (300 - 800)
    pub font_weight: u16,
    /// Line height multiplier
    pub line_height: f32,
    /// Letter spacing in em
    pub letter_spacing: f32,
    /// Font family override (None = system default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(font_size: f32, font_weight: u16) -> Self {
        Self {
            font_size,
            font_weight,
            line_height: line_height::NORMAL,
            letter_spacing: tracking::DEFAULT,
            font_family: None,
        }
    }

    /// Set line height
    pub fn with_line_height(mut self, lh: f32) -> Self {
        self.line_height = lh;
        self
    }

    /// Set letter spacing
    pub fn with_letter_spacing(mut self, ls: f32) -> Self {
        self.letter_spacing = ls;
        self
    }

    /// Set font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Calculate the actual line height in pixels
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }
}

// =============================================================================
// Typography Variants
// =============================================================================

/// Typography variant identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TypographyVariant {
    /// Large title (36px heavy)
    LargeTitle,
    /// First-level title (30px bold)
    TitleOne,
    /// Second-level title (24px bold)
    TitleTwo,
    /// Third-level title (20px semi-bold)
    TitleThree,
    /// Headline (18px semi-bold)
    Headline,
    /// Body text (16px regular)
    #[default]
    Body,
    /// Callout (16px medium)
    Callout,
    /// Subhead (14px regular)
    Subhead,
    /// Footnote (12px regular)
    Footnote,
    /// Caption (12px light)
    Caption,
}

impl TypographyVariant {
    /// Get the text style for this variant
    pub fn style(&self) -> TextStyle {
        match self {
            Self::LargeTitle => TextStyle::new(font_size::XL4, font_weight::HEAVY)
                .with_line_height(line_height::TIGHT)
                .with_letter_spacing(tracking::TIGHT),
            Self::TitleOne => TextStyle::new(font_size::XL3, font_weight::BOLD)
                .with_line_height(line_height::TIGHT)
                .with_letter_spacing(tracking::TIGHT),
            Self::TitleTwo => TextStyle::new(font_size::XL2, font_weight::BOLD)
                .with_line_height(line_height::SNUG),
            Self::TitleThree => TextStyle::new(font_size::XL, font_weight::SEMI_BOLD)
                .with_line_height(line_height::SNUG),
            Self::Headline => TextStyle::new(font_size::LG, font_weight::SEMI_BOLD),
            Self::Body => TextStyle::new(font_size::MD, font_weight::NORMAL),
            Self::Callout => TextStyle::new(font_size::MD, font_weight::MEDIUM),
            Self::Subhead => TextStyle::new(font_size::SM, font_weight::NORMAL),
            Self::Footnote => TextStyle::new(font_size::XS, font_weight::NORMAL)
                .with_letter_spacing(tracking::WIDE),
            Self::Caption => TextStyle::new(font_size::XS, font_weight::LIGHT)
                .with_letter_spacing(tracking::WIDE),
        }
    }
}

// =============================================================================
// Text Component
// =============================================================================

/// Themed text node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Text content
    pub content: String,
    /// Typography variant
    #[serde(default)]
    pub variant: TypographyVariant,
    /// Explicit color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Per-component color mode override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<ColorMode>,
    /// Number of lines to show before trimming
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_lines: Option<u32>,
    /// Accessibility label read by screen readers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
    /// Additional style fragment
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Text {
    /// Create body text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            variant: TypographyVariant::default(),
            color: None,
            color_mode: None,
            number_of_lines: None,
            accessibility_label: None,
            style: StyleProps::default(),
        }
    }

    /// Set the typography variant
    pub fn with_variant(mut self, variant: TypographyVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set an explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Override the color mode for this node only
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = Some(mode);
        self
    }

    /// Limit the number of rendered lines
    pub fn with_number_of_lines(mut self, lines: u32) -> Self {
        self.number_of_lines = Some(lines);
        self
    }

    /// Set custom style
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Get the computed styles for this text node
    ///
    /// Color precedence: the explicit `color` prop, then the style
    /// fragment, then the mode default (near-black on light, near-white
    /// on dark).
    pub fn computed_styles(&self, state: &ThemeState) -> TextStyles {
        let mode = resolve_color_mode(self.color_mode, state);
        let color = self
            .color
            .clone()
            .or_else(|| self.style.color.clone())
            .unwrap_or_else(|| {
                resolve_value(NEUTRAL.s900, NEUTRAL.s50, mode).to_string()
            });

        TextStyles {
            text: self.variant.style(),
            color,
        }
    }
}

/// Computed text styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyles {
    /// Resolved typography
    pub text: TextStyle,
    /// Resolved text color
    pub color: Color,
}

// =============================================================================
// Tests
// =============================================================================
