//! Typed style fragments
//!
//! Components carry a [`StyleProps`] fragment instead of an open prop bag.
//! Merging two fragments is explicit and field-by-field: for every field
//! independently, the override's `Some` wins and the base fills the gaps.
//! Shorthand spacing props collapse through [`StyleProps::resolved_margin`]
//! and [`StyleProps::resolved_padding`] with per-side precedence
//! side > axis > uniform.

use serde::{Deserialize, Serialize};
use solstice_theme::Color;

// =============================================================================
// Common Types
// =============================================================================

/// Component identifier
pub type ComponentId = String;

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

/// Style properties that can be applied to any component
///
/// All fields are optional; an unset field means "inherit" when the fragment
/// is merged over a base, and "unstyled" when it reaches the renderer. All
/// spacing values are pixels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProps {
    /// Margin on all sides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
    /// Top margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    /// Bottom margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    /// Left margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f32>,
    /// Right margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f32>,
    /// Horizontal margin (left and right)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_x: Option<f32>,
    /// Vertical margin (top and bottom)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_y: Option<f32>,
    /// Padding on all sides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    /// Top padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f32>,
    /// Bottom padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f32>,
    /// Left padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f32>,
    /// Right padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f32>,
    /// Horizontal padding (left and right)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<f32>,
    /// Vertical padding (top and bottom)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<f32>,
    /// Width constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// Height constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Foreground/text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Border radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Border width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Opacity (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Cross-axis alignment of children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Alignment>,
    /// Cross-axis alignment of this element within its parent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<Alignment>,
    /// Main-axis distribution of children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    /// Flex grow factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
}

impl StyleProps {
    /// Create an empty style fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge an override fragment over this one
    ///
    /// Field-level precedence: for every field independently, the override's
    /// `Some` wins, otherwise this fragment's value is kept. Neither input
    /// is mutated.
    pub fn merge(&self, overrides: &StyleProps) -> StyleProps {
        StyleProps {
            margin: overrides.margin.or(self.margin),
            margin_top: overrides.margin_top.or(self.margin_top),
            margin_bottom: overrides.margin_bottom.or(self.margin_bottom),
            margin_left: overrides.margin_left.or(self.margin_left),
            margin_right: overrides.margin_right.or(self.margin_right),
            margin_x: overrides.margin_x.or(self.margin_x),
            margin_y: overrides.margin_y.or(self.margin_y),
            padding: overrides.padding.or(self.padding),
            padding_top: overrides.padding_top.or(self.padding_top),
            padding_bottom: overrides.padding_bottom.or(self.padding_bottom),
            padding_left: overrides.padding_left.or(self.padding_left),
            padding_right: overrides.padding_right.or(self.padding_right),
            padding_x: overrides.padding_x.or(self.padding_x),
            padding_y: overrides.padding_y.or(self.padding_y),
            width: overrides.width.clone().or_else(|| self.width.clone()),
            height: overrides.height.clone().or_else(|| self.height.clone()),
            background_color: overrides
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            color: overrides.color.clone().or_else(|| self.color.clone()),
            border_radius: overrides.border_radius.or(self.border_radius),
            border_width: overrides.border_width.or(self.border_width),
            border_color: overrides
                .border_color
                .clone()
                .or_else(|| self.border_color.clone()),
            opacity: overrides.opacity.or(self.opacity),
            align_items: overrides.align_items.or(self.align_items),
            align_self: overrides.align_self.or(self.align_self),
            justify_content: overrides.justify_content.or(self.justify_content),
            flex: overrides.flex.or(self.flex),
        }
    }

    /// Collapse the margin shorthands into per-side values
    pub fn resolved_margin(&self) -> EdgeValues {
        resolve_edges(
            self.margin,
            self.margin_x,
            self.margin_y,
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
            self.margin_left,
        )
    }

    /// Collapse the padding shorthands into per-side values
    pub fn resolved_padding(&self) -> EdgeValues {
        resolve_edges(
            self.padding,
            self.padding_x,
            self.padding_y,
            self.padding_top,
            self.padding_right,
            self.padding_bottom,
            self.padding_left,
        )
    }
}

/// True when a style fragment carries no values
///
/// Used by components to skip serializing empty fragments.
pub(crate) fn is_default_style(style: &StyleProps) -> bool {
    style == &StyleProps::default()
}

/// Per-side spacing after shorthand resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeValues {
    /// Top edge
    pub top: f32,
    /// Right edge
    pub right: f32,
    /// Bottom edge
    pub bottom: f32,
    /// Left edge
    pub left: f32,
}

/// Resolve uniform/axis/side shorthands, each side independently
fn resolve_edges(
    uniform: Option<f32>,
    horizontal: Option<f32>,
    vertical: Option<f32>,
    top: Option<f32>,
    right: Option<f32>,
    bottom: Option<f32>,
    left: Option<f32>,
) -> EdgeValues {
    let base = uniform.unwrap_or(0.0);
    EdgeValues {
        top: top.or(vertical).unwrap_or(base),
        right: right.or(horizontal).unwrap_or(base),
        bottom: bottom.or(vertical).unwrap_or(base),
        left: left.or(horizontal).unwrap_or(base),
    }
}

/// Dimension value (pixels, percentage, auto)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Dimension {
    /// Fixed pixel value
    Pixels(f32),
    /// Percentage of parent
    Percent(String),
    /// Auto-size
    #[default]
    Auto,
}

impl Dimension {
    /// Create a pixel dimension
    pub fn px(value: f32) -> Self {
        Dimension::Pixels(value)
    }

    /// Create a percentage dimension
    pub fn percent(value: f32) -> Self {
        Dimension::Percent(format!("{}%", value))
    }

    /// Create an auto dimension
    pub fn auto() -> Self {
        Dimension::Auto
    }

    /// Full width/height of the parent
    pub fn full() -> Self {
        Dimension::percent(100.0)
    }
}

/// Alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    /// Stretch to fill
    #[default]
    Stretch,
    /// Align to start
    Start,
    /// Align to center
    Center,
    /// Align to end
    End,
    /// Baseline alignment
    Baseline,
}

/// Justify content options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Start (default)
    #[default]
    Start,
    /// Center
    Center,
    /// End
    End,
    /// Space between
    SpaceBetween,
    /// Space around
    SpaceAround,
    /// Space evenly
    SpaceEvenly,
}

/// Flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    /// Row (horizontal)
    Row,
    /// Column (vertical)
    #[default]
    Column,
    /// Row reversed
    RowReverse,
    /// Column reversed
    ColumnReverse,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Merge Tests
    // ==========================================================================

    #[test]
    fn test_merge_override_wins_per_field() {
        let base = StyleProps {
            color: Some("#111111".to_string()),
            margin_bottom: Some(8.0),
            opacity: Some(0.5),
            ..Default::default()
        };
        let overrides = StyleProps {
            color: Some("#FFFFFF".to_string()),
            padding: Some(4.0),
            ..Default::default()
        };

        let merged = base.merge(&overrides);
        assert_eq!(merged.color, Some("#FFFFFF".to_string()));
        assert_eq!(merged.margin_bottom, Some(8.0));
        assert_eq!(merged.padding, Some(4.0));
        assert_eq!(merged.opacity, Some(0.5));
    }

    #[test]
    fn test_merge_unset_fields_stay_unset() {
        let merged = StyleProps::default().merge(&StyleProps::default());
        assert!(is_default_style(&merged));
    }

    #[test]
    fn test_merge_does_not_mutate_inputs() {
        let base = StyleProps {
            flex: Some(1.0),
            ..Default::default()
        };
        let overrides = StyleProps {
            flex: Some(2.0),
            ..Default::default()
        };

        let merged = base.merge(&overrides);
        assert_eq!(merged.flex, Some(2.0));
        assert_eq!(base.flex, Some(1.0));
        assert_eq!(overrides.flex, Some(2.0));
    }

    // ==========================================================================
    // Edge Resolution Tests
    // ==========================================================================

    #[test]
    fn test_resolved_margin_side_beats_axis_beats_uniform() {
        let style = StyleProps {
            margin: Some(4.0),
            margin_x: Some(8.0),
            margin_top: Some(16.0),
            ..Default::default()
        };

        let edges = style.resolved_margin();
        assert_eq!(edges.top, 16.0);
        assert_eq!(edges.right, 8.0);
        assert_eq!(edges.left, 8.0);
        assert_eq!(edges.bottom, 4.0);
    }

    #[test]
    fn test_resolved_padding_defaults_to_zero() {
        let edges = StyleProps::default().resolved_padding();
        assert_eq!(edges, EdgeValues::default());
    }

    #[test]
    fn test_resolved_padding_axis_fills_both_sides() {
        let style = StyleProps {
            padding_y: Some(12.0),
            ..Default::default()
        };

        let edges = style.resolved_padding();
        assert_eq!(edges.top, 12.0);
        assert_eq!(edges.bottom, 12.0);
        assert_eq!(edges.left, 0.0);
        assert_eq!(edges.right, 0.0);
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_style_serializes_camel_case_and_skips_none() {
        let style = StyleProps {
            margin_bottom: Some(4.0),
            background_color: Some("#FAFAFA".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r##"{"marginBottom":4.0,"backgroundColor":"#FAFAFA"}"##);
    }

    #[test]
    fn test_dimension_untagged_serde() {
        assert_eq!(
            serde_json::to_string(&Dimension::px(24.0)).unwrap(),
            "24.0"
        );
        assert_eq!(
            serde_json::to_string(&Dimension::full()).unwrap(),
            r#""100%""#
        );

        let px: Dimension = serde_json::from_str("24.0").unwrap();
        assert_eq!(px, Dimension::Pixels(24.0));
        let pct: Dimension = serde_json::from_str(r#""50%""#).unwrap();
        assert_eq!(pct, Dimension::Percent("50%".to_string()));
    }

    #[test]
    fn test_flex_enums_kebab_case() {
        assert_eq!(
            serde_json::to_string(&JustifyContent::SpaceBetween).unwrap(),
            r#""space-between""#
        );
        assert_eq!(
            serde_json::to_string(&FlexDirection::RowReverse).unwrap(),
            r#""row-reverse""#
        );
        assert_eq!(
            serde_json::to_string(&Alignment::Center).unwrap(),
            r#""center""#
        );
    }
}
