//! Layout primitives
//!
//! Typed flex containers: views, stacks, centering, the prose container,
//! aspect boxes, and the pressable wrapper. Layout is theme-free; color
//! enters through each primitive's [`StyleProps`] fragment. [`Pressable`]
//! is the bridge into the theme layer: it turns its pressed flag into an
//! [`InteractionState`] for gradient-aware children.

use crate::style::{
    is_default_style, Alignment, ComponentId, EdgeValues, EventHandler, FlexDirection,
    JustifyContent, StyleProps,
};
use crate::tokens::spacing;
use serde::{Deserialize, Serialize};
use solstice_theme::InteractionState;

// =============================================================================
// View
// =============================================================================

/// Generic styled box
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Style fragment
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl View {
    /// Create an unstyled view
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style fragment
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Resolved per-side padding
    pub fn padding(&self) -> EdgeValues {
        self.style.resolved_padding()
    }

    /// Resolved per-side margin
    pub fn margin(&self) -> EdgeValues {
        self.style.resolved_margin()
    }
}

// =============================================================================
// Stack
// =============================================================================

/// Linear flex container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Main axis direction
    #[serde(default)]
    pub direction: FlexDirection,
    /// Gap between children, in grid units
    #[serde(default)]
    pub space: f32,
    /// Cross-axis alignment of children
    #[serde(default)]
    pub align: Alignment,
    /// Main-axis distribution of children
    #[serde(default)]
    pub justify: JustifyContent,
    /// Whether children are laid out in reverse order
    #[serde(default)]
    pub reversed: bool,
    /// Style fragment
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Stack {
    /// Create a vertical stack
    pub fn vstack() -> Self {
        Self {
            direction: FlexDirection::Column,
            ..Default::default()
        }
    }

    /// Create a horizontal stack
    pub fn hstack() -> Self {
        Self {
            direction: FlexDirection::Row,
            ..Default::default()
        }
    }

    /// Set the gap between children, in grid units
    pub fn with_space(mut self, space: f32) -> Self {
        self.space = space;
        self
    }

    /// Set cross-axis alignment
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set main-axis distribution
    pub fn with_justify(mut self, justify: JustifyContent) -> Self {
        self.justify = justify;
        self
    }

    /// Reverse the layout order
    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    /// Set the style fragment
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Gap between children in pixels
    pub fn spacing_px(&self) -> f32 {
        spacing::resolve(self.space)
    }

    /// Direction after applying `reversed`
    pub fn effective_direction(&self) -> FlexDirection {
        match (self.direction, self.reversed) {
            (FlexDirection::Row, true) => FlexDirection::RowReverse,
            (FlexDirection::Column, true) => FlexDirection::ColumnReverse,
            (FlexDirection::RowReverse, true) => FlexDirection::Row,
            (FlexDirection::ColumnReverse, true) => FlexDirection::Column,
            (direction, false) => direction,
        }
    }

    /// Get the computed flex styles
    pub fn computed_styles(&self) -> FlexStyles {
        FlexStyles {
            direction: self.effective_direction(),
            gap: self.spacing_px(),
            align_items: self.align,
            justify_content: self.justify,
        }
    }
}

/// Computed flex container styles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexStyles {
    /// Main axis direction
    pub direction: FlexDirection,
    /// Gap between children in pixels
    pub gap: f32,
    /// Cross-axis alignment
    pub align_items: Alignment,
    /// Main-axis distribution
    pub justify_content: JustifyContent,
}

// =============================================================================
// ZStack
// =============================================================================

/// Overlapping children, later children on top
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZStack {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Alignment of children within the stack
    #[serde(default)]
    pub align: Alignment,
    /// Style fragment
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl ZStack {
    /// Create a z-stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Set child alignment
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Get the computed flex styles
    pub fn computed_styles(&self) -> FlexStyles {
        FlexStyles {
            direction: FlexDirection::Column,
            gap: 0.0,
            align_items: self.align,
            justify_content: JustifyContent::Start,
        }
    }
}

// =============================================================================
// Center
// =============================================================================

/// Centers its children on both axes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Center {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Style fragment
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Center {
    /// Create a centering container
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the computed flex styles
    pub fn computed_styles(&self) -> FlexStyles {
        FlexStyles {
            direction: FlexDirection::Column,
            gap: 0.0,
            align_items: Alignment::Center,
            justify_content: JustifyContent::Center,
        }
    }
}

// =============================================================================
// Container
// =============================================================================

/// Default prose column width in pixels
pub const CONTAINER_MAX_WIDTH: f32 = 768.0;

fn default_max_width() -> f32 {
    CONTAINER_MAX_WIDTH
}

/// Width-capped prose column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Maximum content width in pixels
    #[serde(default = "default_max_width")]
    pub max_width: f32,
    /// Whether children are centered horizontally
    #[serde(default)]
    pub center_content: bool,
    /// Style fragment
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            id: None,
            max_width: default_max_width(),
            center_content: false,
            style: StyleProps::default(),
        }
    }
}

impl Container {
    /// Create a container with the default width cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum content width
    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = max_width;
        self
    }

    /// Center children horizontally
    pub fn centered(mut self, centered: bool) -> Self {
        self.center_content = centered;
        self
    }

    /// Get the computed flex styles
    pub fn computed_styles(&self) -> FlexStyles {
        FlexStyles {
            direction: FlexDirection::Column,
            gap: 0.0,
            align_items: if self.center_content {
                Alignment::Center
            } else {
                Alignment::Stretch
            },
            justify_content: JustifyContent::Start,
        }
    }
}

// =============================================================================
// AspectRatio
// =============================================================================

fn default_ratio() -> f32 {
    1.0
}

/// Fixes the width to height ratio of its child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectRatio {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Width divided by height
    #[serde(default = "default_ratio")]
    pub ratio: f32,
    /// Style fragment
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self {
            id: None,
            ratio: default_ratio(),
            style: StyleProps::default(),
        }
    }
}

impl AspectRatio {
    /// Create a box with the given width to height ratio
    pub fn new(ratio: f32) -> Self {
        Self {
            ratio,
            ..Default::default()
        }
    }

    /// Widescreen 16:9 box
    pub fn widescreen() -> Self {
        Self::new(16.0 / 9.0)
    }

    /// Square box
    pub fn square() -> Self {
        Self::new(1.0)
    }

    /// Height for a given width under this ratio
    pub fn height_for_width(&self, width: f32) -> f32 {
        width / self.ratio
    }
}

// =============================================================================
// Pressable
// =============================================================================

/// Press-aware wrapper
///
/// Carries the pressed flag for its subtree; accent surfaces below it
/// resolve their fill against [`Pressable::interaction_state`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pressable {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Whether the pointer is currently down
    #[serde(default)]
    pub is_pressed: bool,
    /// Whether presses are ignored
    #[serde(default)]
    pub is_disabled: bool,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Style fragment
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Pressable {
    /// Create a pressable wrapper
    pub fn new() -> Self {
        Self::default()
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

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// The interaction state this wrapper feeds its children
    ///
    /// A disabled wrapper never reports pressed.
    pub fn interaction_state(&self) -> InteractionState {
        if self.is_pressed && !self.is_disabled {
            InteractionState::Pressed
        } else {
            InteractionState::Rest
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Stack Tests
    // ==========================================================================

    #[test]
    fn test_vstack_and_hstack_directions() {
        assert_eq!(Stack::vstack().direction, FlexDirection::Column);
        assert_eq!(Stack::hstack().direction, FlexDirection::Row);
    }

    #[test]
    fn test_stack_space_resolves_to_pixels() {
        let stack = Stack::vstack().with_space(3.0);
        assert_eq!(stack.spacing_px(), 12.0);
        assert_eq!(stack.computed_styles().gap, 12.0);
    }

    #[test]
    fn test_reversed_flips_direction() {
        let stack = Stack::hstack().reversed(true);
        assert_eq!(stack.effective_direction(), FlexDirection::RowReverse);

        let stack = Stack::vstack().reversed(true);
        assert_eq!(stack.effective_direction(), FlexDirection::ColumnReverse);
    }

    #[test]
    fn test_stack_alignment_flows_to_styles() {
        let styles = Stack::hstack()
            .with_align(Alignment::Center)
            .with_justify(JustifyContent::SpaceBetween)
            .computed_styles();

        assert_eq!(styles.align_items, Alignment::Center);
        assert_eq!(styles.justify_content, JustifyContent::SpaceBetween);
    }

    // ==========================================================================
    // Center and Container Tests
    // ==========================================================================

    #[test]
    fn test_center_centers_both_axes() {
        let styles = Center::new().computed_styles();
        assert_eq!(styles.align_items, Alignment::Center);
        assert_eq!(styles.justify_content, JustifyContent::Center);
    }

    #[test]
    fn test_container_default_width() {
        let container = Container::new();
        assert_eq!(container.max_width, 768.0);
        assert_eq!(container.computed_styles().align_items, Alignment::Stretch);
    }

    #[test]
    fn test_container_centers_content() {
        let styles = Container::new().centered(true).computed_styles();
        assert_eq!(styles.align_items, Alignment::Center);
    }

    // ==========================================================================
    // AspectRatio Tests
    // ==========================================================================

    #[test]
    fn test_aspect_ratio_height() {
        let widescreen = AspectRatio::widescreen();
        assert!((widescreen.height_for_width(1920.0) - 1080.0).abs() < 0.001);

        let square = AspectRatio::square();
        assert_eq!(square.height_for_width(300.0), 300.0);
    }

    #[test]
    fn test_aspect_ratio_serde_default() {
        let parsed: AspectRatio = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.ratio, 1.0);
    }

    // ==========================================================================
    // Pressable Tests
    // ==========================================================================

    #[test]
    fn test_pressable_reports_interaction() {
        assert_eq!(
            Pressable::new().interaction_state(),
            InteractionState::Rest
        );
        assert_eq!(
            Pressable::new().pressed(true).interaction_state(),
            InteractionState::Pressed
        );
    }

    #[test]
    fn test_disabled_pressable_never_presses() {
        let pressable = Pressable::new().pressed(true).disabled(true);
        assert_eq!(pressable.interaction_state(), InteractionState::Rest);
    }

    // ==========================================================================
    // View Tests
    // ==========================================================================

    #[test]
    fn test_view_resolves_edges() {
        let view = View::new().with_style(StyleProps {
            padding_x: Some(16.0),
            padding_top: Some(8.0),
            margin: Some(4.0),
            ..Default::default()
        });

        let padding = view.padding();
        assert_eq!(padding.left, 16.0);
        assert_eq!(padding.right, 16.0);
        assert_eq!(padding.top, 8.0);
        assert_eq!(padding.bottom, 0.0);

        assert_eq!(view.margin().top, 4.0);
    }

    #[test]
    fn test_layout_serde_skips_empty_style() {
        let json = serde_json::to_string(&Stack::vstack().with_space(2.0)).unwrap();
        assert!(!json.contains("style"));

        let parsed: Stack = serde_json::from_str(r#"{"direction":"column","space":2.0}"#).unwrap();
        assert_eq!(parsed.space, 2.0);
        assert!(!parsed.reversed);
    }
}
