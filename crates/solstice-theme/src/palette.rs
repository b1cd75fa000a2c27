//! Static color ramps
//!
//! Every accent is backed by a ten-stop ramp from 50 (lightest) to 900
//! (darkest). [`NEUTRAL`] is the gray ramp used for text, separators, and
//! disabled surfaces. [`DARK_SURFACE`] is the custom surface ramp dark mode
//! flattens gradients to; level 6 is the flat gradient color.

use crate::accent::AccentColor;

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGB hex string (e.g., "#6366F1")
pub type Color = String;

/// Pure white
pub const WHITE: &str = "#FFFFFF";

/// Pure black
pub const BLACK: &str = "#000000";

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> Color {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// =============================================================================
// Color Scale
// =============================================================================

/// A ten-stop color ramp from lightest (50) to darkest (900)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScale {
    /// Lightest (50)
    pub s50: &'static str,
    /// Very light (100)
    pub s100: &'static str,
    /// Light (200)
    pub s200: &'static str,
    /// Medium-light (300)
    pub s300: &'static str,
    /// Medium (400)
    pub s400: &'static str,
    /// Base (500)
    pub s500: &'static str,
    /// Medium-dark (600)
    pub s600: &'static str,
    /// Dark (700)
    pub s700: &'static str,
    /// Very dark (800)
    pub s800: &'static str,
    /// Darkest (900)
    pub s900: &'static str,
}

impl ColorScale {
    /// Get a color by its numeric stop (50, 100, ..., 900)
    pub fn get(&self, stop: u16) -> Option<&'static str> {
        match stop {
            50 => Some(self.s50),
            100 => Some(self.s100),
            200 => Some(self.s200),
            300 => Some(self.s300),
            400 => Some(self.s400),
            500 => Some(self.s500),
            600 => Some(self.s600),
            700 => Some(self.s700),
            800 => Some(self.s800),
            900 => Some(self.s900),
            _ => None,
        }
    }

    /// All stops in ramp order, lightest first
    pub const STOPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];
}

// =============================================================================
// Accent Ramps
// =============================================================================

/// Blue accent ramp
pub const BLUE: ColorScale = ColorScale {
    s50: "#EFF6FF",
    s100: "#DBEAFE",
    s200: "#BFDBFE",
    s300: "#93C5FD",
    s400: "#60A5FA",
    s500: "#3B82F6",
    s600: "#2563EB",
    s700: "#1D4ED8",
    s800: "#1E40AF",
    s900: "#1E3A8A",
};

/// Red accent ramp
pub const RED: ColorScale = ColorScale {
    s50: "#FEF2F2",
    s100: "#FEE2E2",
    s200: "#FECACA",
    s300: "#FCA5A5",
    s400: "#F87171",
    s500: "#EF4444",
    s600: "#DC2626",
    s700: "#B91C1C",
    s800: "#991B1B",
    s900: "#7F1D1D",
};

/// Amber accent ramp
pub const AMBER: ColorScale = ColorScale {
    s50: "#FFFBEB",
    s100: "#FEF3C7",
    s200: "#FDE68A",
    s300: "#FCD34D",
    s400: "#FBBF24",
    s500: "#F59E0B",
    s600: "#D97706",
    s700: "#B45309",
    s800: "#92400E",
    s900: "#78350F",
};

/// Emerald accent ramp
pub const EMERALD: ColorScale = ColorScale {
    s50: "#ECFDF5",
    s100: "#D1FAE5",
    s200: "#A7F3D0",
    s300: "#6EE7B7",
    s400: "#34D399",
    s500: "#10B981",
    s600: "#059669",
    s700: "#047857",
    s800: "#065F46",
    s900: "#064E3B",
};

/// Indigo accent ramp, also the `primary` ramp
pub const INDIGO: ColorScale = ColorScale {
    s50: "#EEF2FF",
    s100: "#E0E7FF",
    s200: "#C7D2FE",
    s300: "#A5B4FC",
    s400: "#818CF8",
    s500: "#6366F1",
    s600: "#4F46E5",
    s700: "#4338CA",
    s800: "#3730A3",
    s900: "#312E81",
};

/// Orange accent ramp
pub const ORANGE: ColorScale = ColorScale {
    s50: "#FFF7ED",
    s100: "#FFEDD5",
    s200: "#FED7AA",
    s300: "#FDBA74",
    s400: "#FB923C",
    s500: "#F97316",
    s600: "#EA580C",
    s700: "#C2410C",
    s800: "#9A3412",
    s900: "#7C2D12",
};

/// Rose accent ramp
pub const ROSE: ColorScale = ColorScale {
    s50: "#FFF1F2",
    s100: "#FFE4E6",
    s200: "#FECDD3",
    s300: "#FDA4AF",
    s400: "#FB7185",
    s500: "#F43F5E",
    s600: "#E11D48",
    s700: "#BE123C",
    s800: "#9F1239",
    s900: "#881337",
};

/// Neutral gray ramp for text, separators, and disabled surfaces
pub const NEUTRAL: ColorScale = ColorScale {
    s50: "#FAFAFA",
    s100: "#F4F4F5",
    s200: "#E4E4E7",
    s300: "#D4D4D8",
    s400: "#A1A1AA",
    s500: "#71717A",
    s600: "#52525B",
    s700: "#3F3F46",
    s800: "#27272A",
    s900: "#18181B",
};

// =============================================================================
// Dark Surface Ramp
// =============================================================================

/// Dark-mode surface ramp, level 0 (deepest) to level 9 (most elevated)
///
/// Level 6 is the color every dark-mode gradient flattens to.
pub const DARK_SURFACE: [&str; 10] = [
    "#0A0A0B", // 0
    "#111113", // 1
    "#18181B", // 2
    "#1F1F22", // 3
    "#26262A", // 4
    "#2C2C30", // 5
    "#313134", // 6
    "#3A3A3E", // 7
    "#444449", // 8
    "#4E4E54", // 9
];

/// Get a dark surface color by level (0-9)
pub fn dark_surface(level: u8) -> Option<&'static str> {
    DARK_SURFACE.get(level as usize).copied()
}

// =============================================================================
// Accent Ramp Lookup
// =============================================================================

impl AccentColor {
    /// Get the static ramp backing this accent
    ///
    /// `Primary` shares the indigo ramp; the two stay distinct enum values
    /// because `primary` is a semantic role, not an alias.
    pub fn scale(&self) -> &'static ColorScale {
        match self {
            AccentColor::Primary | AccentColor::Indigo => &INDIGO,
            AccentColor::Blue => &BLUE,
            AccentColor::Red => &RED,
            AccentColor::Amber => &AMBER,
            AccentColor::Emerald => &EMERALD,
            AccentColor::Orange => &ORANGE,
            AccentColor::Rose => &ROSE,
        }
    }

    /// Get a ramp color by stop (50, 100, ..., 900)
    pub fn color(&self, stop: u16) -> Option<&'static str> {
        self.scale().get(stop)
    }
}
