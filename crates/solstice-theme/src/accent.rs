//! Accent colors
//!
//! The accent palette is a closed enumeration plus the implicit `primary`
//! default. Parsing any name outside the palette is a [`ConfigError`], never
//! a silent fallback, so a typo in host configuration surfaces immediately
//! instead of rendering the wrong color.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Named palette selection applied to interactive and highlight elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    /// Default accent, shares the indigo ramp
    #[default]
    Primary,
    /// Blue
    Blue,
    /// Red
    Red,
    /// Amber
    Amber,
    /// Emerald
    Emerald,
    /// Indigo
    Indigo,
    /// Orange
    Orange,
    /// Rose
    Rose,
}

impl AccentColor {
    /// Every accent in the palette, `Primary` first
    pub const ALL: [AccentColor; 8] = [
        AccentColor::Primary,
        AccentColor::Blue,
        AccentColor::Red,
        AccentColor::Amber,
        AccentColor::Emerald,
        AccentColor::Indigo,
        AccentColor::Orange,
        AccentColor::Rose,
    ];

    /// Get the lowercase accent name
    pub fn name(&self) -> &'static str {
        match self {
            AccentColor::Primary => "primary",
            AccentColor::Blue => "blue",
            AccentColor::Red => "red",
            AccentColor::Amber => "amber",
            AccentColor::Emerald => "emerald",
            AccentColor::Indigo => "indigo",
            AccentColor::Orange => "orange",
            AccentColor::Rose => "rose",
        }
    }
}

impl std::fmt::Display for AccentColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for AccentColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" => Ok(AccentColor::Primary),
            "blue" => Ok(AccentColor::Blue),
            "red" => Ok(AccentColor::Red),
            "amber" => Ok(AccentColor::Amber),
            "emerald" => Ok(AccentColor::Emerald),
            "indigo" => Ok(AccentColor::Indigo),
            "orange" => Ok(AccentColor::Orange),
            "rose" => Ok(AccentColor::Rose),
            _ => {
                tracing::warn!(name = %s, "rejected accent color outside the palette");
                Err(ConfigError::UnknownAccentColor {
                    name: s.to_string(),
                })
            }
        }
    }
}
