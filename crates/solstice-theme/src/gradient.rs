//! Gradient primitives and paintable fills
//!
//! A [`Gradient`] is an ordered stop list with unit-square start and end
//! points. [`Fill`] is what a component actually paints: a gradient when the
//! provider allows them, a flat color otherwise. The stop selection rules
//! live in [`crate::resolver::resolve_gradient`].

use crate::palette::Color;
use serde::{Deserialize, Serialize};

// =============================================================================
// Gradient Types
// =============================================================================

/// A gradient stop with position and color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position from 0.0 to 1.0
    pub position: f32,
    /// Color at this position
    pub color: Color,
}

/// A linear gradient definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Ordered gradient stops
    pub stops: Vec<GradientStop>,
    /// Start point in unit coordinates
    pub start: (f32, f32),
    /// End point in unit coordinates
    pub end: (f32, f32),
}

impl Gradient {
    /// Create a new gradient with stops, running diagonally from the
    /// top-left to the bottom-right corner
    pub fn new(stops: Vec<(f32, &str)>) -> Self {
        Self {
            stops: stops
                .into_iter()
                .map(|(pos, color)| GradientStop {
                    position: pos,
                    color: color.to_string(),
                })
                .collect(),
            start: (0.0, 0.0),
            end: (1.0, 1.0),
        }
    }

    /// Number of stops
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// The stop colors in order
    pub fn colors(&self) -> Vec<&str> {
        self.stops.iter().map(|s| s.color.as_str()).collect()
    }
}

// =============================================================================
// Interaction State
// =============================================================================

/// Interaction state of the node being painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionState {
    /// Not being interacted with
    #[default]
    Rest,
    /// Actively pressed
    Pressed,
}

impl InteractionState {
    /// Check whether the node is pressed
    pub fn is_pressed(&self) -> bool {
        matches!(self, InteractionState::Pressed)
    }
}

// =============================================================================
// Fill
// =============================================================================

/// What a component paints for an accent surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Fill {
    /// Single flat color
    Solid(Color),
    /// Linear gradient
    Gradient(Gradient),
}

impl Fill {
    /// The color painted at the gradient start; for solids, the color itself
    pub fn leading_color(&self) -> Option<&str> {
        match self {
            Fill::Solid(color) => Some(color.as_str()),
            Fill::Gradient(gradient) => gradient.stops.first().map(|s| s.color.as_str()),
        }
    }

    /// Check whether this fill is a gradient
    pub fn is_gradient(&self) -> bool {
        matches!(self, Fill::Gradient(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_new_preserves_order() {
        let gradient = Gradient::new(vec![
            (0.0, "#4338CA"),
            (0.5, "#6366F1"),
            (1.0, "#818CF8"),
        ]);
        assert_eq!(gradient.stop_count(), 3);
        assert_eq!(gradient.colors(), vec!["#4338CA", "#6366F1", "#818CF8"]);
        assert_eq!(gradient.stops[0].position, 0.0);
        assert_eq!(gradient.stops[1].position, 0.5);
        assert_eq!(gradient.stops[2].position, 1.0);
    }

    #[test]
    fn test_gradient_runs_diagonally() {
        let gradient = Gradient::new(vec![(0.0, "#313134")]);
        assert_eq!(gradient.start, (0.0, 0.0));
        assert_eq!(gradient.end, (1.0, 1.0));
    }

    #[test]
    fn test_interaction_state_default_is_rest() {
        assert_eq!(InteractionState::default(), InteractionState::Rest);
        assert!(!InteractionState::Rest.is_pressed());
        assert!(InteractionState::Pressed.is_pressed());
    }

    #[test]
    fn test_fill_leading_color() {
        let solid = Fill::Solid("#6366F1".to_string());
        assert_eq!(solid.leading_color(), Some("#6366F1"));
        assert!(!solid.is_gradient());

        let gradient = Fill::Gradient(Gradient::new(vec![(0.0, "#4338CA"), (1.0, "#818CF8")]));
        assert_eq!(gradient.leading_color(), Some("#4338CA"));
        assert!(gradient.is_gradient());
    }

    #[test]
    fn test_gradient_serde_round_trip() {
        let gradient = Gradient::new(vec![(0.0, "#B45309"), (0.5, "#F59E0B"), (1.0, "#FBBF24")]);
        let json = serde_json::to_string(&gradient).unwrap();
        let parsed: Gradient = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, gradient);
    }
}
