//! The theme resolver
//!
//! Every operation here is a pure read of an explicit [`ThemeState`]
//! snapshot. Precedence, applied independently for mode and accent: the
//! component prop (the explicit argument), then the provider state, then the
//! system setting already folded into the provider at mount. Identical
//! inputs always produce identical outputs.

use crate::accent::AccentColor;
use crate::gradient::{Fill, Gradient, InteractionState};
use crate::mode::ColorMode;
use crate::palette::DARK_SURFACE;
use crate::state::ThemeState;

/// Surface level every dark-mode gradient flattens to
const DARK_FLAT_LEVEL: usize = 6;

/// Resolve the color mode
///
/// An explicit per-component override wins over the provider state. Never
/// fails: a missing provider is reported when the provider is looked up, not
/// here.
pub fn resolve_color_mode(explicit: Option<ColorMode>, state: &ThemeState) -> ColorMode {
    explicit.unwrap_or(state.color_mode)
}

/// Resolve the accent color
///
/// An explicit per-component override wins over the provider state, which
/// itself defaults to `primary`, so the chain always bottoms out.
pub fn resolve_accent_color(explicit: Option<AccentColor>, state: &ThemeState) -> AccentColor {
    explicit.unwrap_or(state.accent)
}

/// Select between a light and a dark value
///
/// Pure two-way selection with no side effects.
pub fn resolve_value<T>(light: T, dark: T, mode: ColorMode) -> T {
    match mode {
        ColorMode::Light => light,
        ColorMode::Dark => dark,
    }
}

/// Resolve the three-stop gradient for an accent surface
///
/// Light mode paints the accent ramp at stops 700/500/400, each stop moving
/// one rung down the ladder to 500/400/300 while pressed. Dark mode always
/// flattens to the neutral surface triple, whatever the accent or
/// interaction state: accent gradients read as glare on dark backgrounds, so
/// dark surfaces stay flat.
pub fn resolve_gradient(
    accent: AccentColor,
    mode: ColorMode,
    interaction: InteractionState,
) -> Gradient {
    if mode.is_dark() {
        let flat = DARK_SURFACE[DARK_FLAT_LEVEL];
        return Gradient::new(vec![(0.0, flat), (0.5, flat), (1.0, flat)]);
    }

    let scale = accent.scale();
    let colors = if interaction.is_pressed() {
        [scale.s500, scale.s400, scale.s300]
    } else {
        [scale.s700, scale.s500, scale.s400]
    };
    Gradient::new(vec![(0.0, colors[0]), (0.5, colors[1]), (1.0, colors[2])])
}

/// Resolve the fill a component paints for an accent surface
///
/// With gradients enabled this is [`resolve_gradient`] for the effective
/// mode. With gradients disabled the surface falls back to a solid accent
/// color, one stop lighter while pressed; dark mode stays on the flat dark
/// surface either way.
pub fn resolve_fill(
    state: &ThemeState,
    accent: AccentColor,
    interaction: InteractionState,
) -> Fill {
    if state.gradients {
        return Fill::Gradient(resolve_gradient(accent, state.color_mode, interaction));
    }

    if state.color_mode.is_dark() {
        return Fill::Solid(DARK_SURFACE[DARK_FLAT_LEVEL].to_string());
    }

    let scale = accent.scale();
    let color = if interaction.is_pressed() {
        scale.s400
    } else {
        scale.s500
    };
    Fill::Solid(color.to_string())
}
