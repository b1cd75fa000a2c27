//! Configuration errors
//!
//! The theme system fails in exactly two places, both at configuration time:
//! parsing an accent name outside the closed palette, and asking for a
//! provider when none is mounted. Resolution itself is total over valid
//! inputs and never returns an error.

use thiserror::Error;

/// Theme configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Accent color name outside the closed palette
    #[error("Unknown accent color: {name}")]
    UnknownAccentColor {
        /// The rejected name, as supplied by the caller
        name: String,
    },

    /// Context-derived resolution requested without an enclosing provider
    #[error("No theme provider is mounted")]
    MissingProvider,
}

/// Result type for theme configuration
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_accent_message_includes_name() {
        let err = ConfigError::UnknownAccentColor {
            name: "chartreuse".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown accent color: chartreuse");
    }

    #[test]
    fn test_missing_provider_message() {
        assert_eq!(
            ConfigError::MissingProvider.to_string(),
            "No theme provider is mounted"
        );
    }
}
