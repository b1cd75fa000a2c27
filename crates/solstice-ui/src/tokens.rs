//! Design tokens for Solstice
//!
//! This module provides design tokens for spacing, radius, sizing, and
//! border widths. Spacing sits on a 4px grid; components express gaps in
//! grid units and resolve them to pixels here.

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
/// Based on a 4px grid unit with t-shirt sizes
pub mod spacing {
    /// Base grid unit (4px)
    pub const UNIT: f32 = 4.0;

    /// 4px - Extra small (1 unit)
    pub const SPACE_XS: f32 = 4.0;
    /// 8px - Small (2 units)
    pub const SPACE_SM: f32 = 8.0;
    /// 12px - Medium (3 units)
    pub const SPACE_MD: f32 = 12.0;
    /// 16px - Large (4 units)
    pub const SPACE_LG: f32 = 16.0;
    /// 24px - Extra large (6 units)
    pub const SPACE_XL: f32 = 24.0;
    /// 32px - 2x large (8 units)
    pub const SPACE_2XL: f32 = 32.0;
    /// 48px - 3x large (12 units)
    pub const SPACE_3XL: f32 = 48.0;

    /// Resolve grid units to pixels
    ///
    /// A component gap of 4 units resolves to 16px.
    pub fn resolve(units: f32) -> f32 {
        units * UNIT
    }

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(SPACE_XS),
            "sm" => Some(SPACE_SM),
            "md" => Some(SPACE_MD),
            "lg" => Some(SPACE_LG),
            "xl" => Some(SPACE_XL),
            "2xl" => Some(SPACE_2XL),
            "3xl" => Some(SPACE_3XL),
            _ => None,
        }
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// No radius (0px)
    pub const NONE: f32 = 0.0;
    /// Extra small radius (2px)
    pub const XS: f32 = 2.0;
    /// Small radius (4px)
    pub const SM: f32 = 4.0;
    /// Medium radius (6px)
    pub const MD: f32 = 6.0;
    /// Large radius (8px)
    pub const LG: f32 = 8.0;
    /// Extra large radius (12px)
    pub const XL: f32 = 12.0;
    /// 2x large radius (16px)
    pub const XL2: f32 = 16.0;
    /// 3x large radius (24px)
    pub const XL3: f32 = 24.0;
    /// Full/round radius (9999px)
    pub const FULL: f32 = 9999.0;

    /// Get radius value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "none" => Some(NONE),
            "xs" => Some(XS),
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "2xl" => Some(XL2),
            "3xl" => Some(XL3),
            "full" => Some(FULL),
            _ => None,
        }
    }
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Radio control diameters
    pub mod radio {
        /// Small radio (16px)
        pub const SM: f32 = 16.0;
        /// Medium radio (20px)
        pub const MD: f32 = 20.0;
        /// Large radio (24px)
        pub const LG: f32 = 24.0;
    }

    /// Button sizes
    pub mod button {
        /// Small button height (32px)
        pub const SM_HEIGHT: f32 = 32.0;
        /// Medium button height (40px)
        pub const MD_HEIGHT: f32 = 40.0;
        /// Large button height (48px)
        pub const LG_HEIGHT: f32 = 48.0;
        /// Small button padding x (12px)
        pub const SM_PADDING_X: f32 = 12.0;
        /// Medium button padding x (16px)
        pub const MD_PADDING_X: f32 = 16.0;
        /// Large button padding x (24px)
        pub const LG_PADDING_X: f32 = 24.0;
    }

    /// Select field sizes
    pub mod select {
        /// Small select height (36px)
        pub const SM_HEIGHT: f32 = 36.0;
        /// Medium select height (44px)
        pub const MD_HEIGHT: f32 = 44.0;
        /// Large select height (52px)
        pub const LG_HEIGHT: f32 = 52.0;
    }
}

// =============================================================================
// Border Width Tokens
// =============================================================================

/// Border width tokens
pub mod border {
    /// No border (0px)
    pub const NONE: f32 = 0.0;
    /// Hairline border (0.5px)
    pub const HAIRLINE: f32 = 0.5;
    /// Thin border (1px)
    pub const THIN: f32 = 1.0;
    /// Medium border (2px)
    pub const MEDIUM: f32 = 2.0;
    /// Thick border (3px)
    pub const THICK: f32 = 3.0;
}

// =============================================================================
// Typographic Tokens
// =============================================================================

/// Letter spacing values in em
pub mod tracking {
    /// Default letter spacing
    pub const DEFAULT: f32 = 0.0;
    /// Tight letter spacing (-0.025em)
    pub const TIGHT: f32 = -0.025;
    /// Wide letter spacing (0.025em)
    pub const WIDE: f32 = 0.025;
}

/// Line height multipliers
pub mod line_height {
    /// None (1.0)
    pub const NONE: f32 = 1.0;
    /// Tight (1.25)
    pub const TIGHT: f32 = 1.25;
    /// Snug (1.375)
    pub const SNUG: f32 = 1.375;
    /// Normal (1.5)
    pub const NORMAL: f32 = 1.5;
    /// Relaxed (1.625)
    pub const RELAXED: f32 = 1.625;
    /// Loose (2.0)
    pub const LOOSE: f32 = 2.0;
}

/// Font weight values
pub mod font_weight {
    /// Light (300)
    pub const LIGHT: u16 = 300;
    /// Normal/Regular (400)
    pub const NORMAL: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
    /// Heavy/Black (800)
    pub const HEAVY: u16 = 800;
}

// =============================================================================
// Tests
// =============================================================================
