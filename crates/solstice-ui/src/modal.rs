//! Modal header component
//!
//! An accent gradient header with a title, a subtitle, and a close button.
//! The header restyles its heading children through the typed fragment
//! merge: a forced fragment (white text, tightened bottom margin) wins
//! field-by-field over each child's own fragment, and the rest of the
//! child's styling survives untouched. A header with no heading renders
//! only the close button.

use crate::style::{ComponentId, EventHandler, StyleProps};
use crate::tokens::spacing;
use crate::typography::Text;
use serde::{Deserialize, Serialize};
use solstice_theme::palette::WHITE;
use solstice_theme::resolver::{resolve_accent_color, resolve_color_mode, resolve_fill, resolve_value};
use solstice_theme::{AccentColor, Color, ColorMode, Fill, InteractionState, ThemeState, NEUTRAL};

/// Modal header component properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalHeader {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Heading title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Text>,
    /// Heading subtitle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<Text>,
    /// Per-component accent override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<AccentColor>,
    /// Per-component color mode override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<ColorMode>,
    /// On close event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_close: Option<EventHandler>,
}

impl ModalHeader {
    /// Create an empty header (close button only)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: Text) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the subtitle
    pub fn with_subtitle(mut self, subtitle: Text) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    /// Override the accent color for this header only
    pub fn with_accent(mut self, accent: AccentColor) -> Self {
        self.accent_color = Some(accent);
        self
    }

    /// Override the color mode for this header only
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = Some(mode);
        self
    }

    /// Set on close handler
    pub fn on_close(mut self, handler: impl Into<String>) -> Self {
        self.on_close = Some(handler.into());
        self
    }

    /// Whether the header has any heading content
    ///
    /// Without one, only the close button is rendered.
    pub fn has_heading(&self) -> bool {
        self.title.is_some() || self.subtitle.is_some()
    }

    /// The title restyled for the header surface
    ///
    /// Forces white text and a one-unit bottom margin over the child's own
    /// fragment. An explicit color on the child loses too: the header owns
    /// heading contrast.
    pub fn styled_title(&self) -> Option<Text> {
        let title = self.title.as_ref()?;
        let forced = StyleProps {
            color: Some(WHITE.to_string()),
            margin_bottom: Some(spacing::resolve(1.0)),
            ..Default::default()
        };

        let mut styled = title.clone();
        styled.style = styled.style.merge(&forced);
        styled.color = Some(WHITE.to_string());
        Some(styled)
    }

    /// The subtitle restyled for the header surface
    ///
    /// White on the light gradient; neutral on the flat dark surface.
    pub fn styled_subtitle(&self, state: &ThemeState) -> Option<Text> {
        let subtitle = self.subtitle.as_ref()?;
        let mode = resolve_color_mode(self.color_mode, state);
        let color = resolve_value(WHITE, NEUTRAL.s300, mode).to_string();
        let forced = StyleProps {
            color: Some(color.clone()),
            ..Default::default()
        };

        let mut styled = subtitle.clone();
        styled.style = styled.style.merge(&forced);
        styled.color = Some(color);
        Some(styled)
    }

    /// Get the computed styles for the header surface
    pub fn computed_styles(&self, state: &ThemeState) -> ModalHeaderStyles {
        let mode = resolve_color_mode(self.color_mode, state);
        let accent = resolve_accent_color(self.accent_color, state);
        let effective = ThemeState {
            color_mode: mode,
            accent,
            ..*state
        };

        ModalHeaderStyles {
            fill: resolve_fill(&effective, accent, InteractionState::Rest),
            close_icon_color: resolve_value(WHITE, NEUTRAL.s300, mode).to_string(),
        }
    }
}

/// Computed modal header styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalHeaderStyles {
    /// Header background fill
    pub fill: Fill,
    /// Close button icon color
    pub close_icon_color: Color,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typography::TypographyVariant;

    fn light_state() -> ThemeState {
        ThemeState {
            color_mode: ColorMode::Light,
            accent: AccentColor::Primary,
            gradients: true,
        }
    }

    fn dark_state() -> ThemeState {
        ThemeState {
            color_mode: ColorMode::Dark,
            ..light_state()
        }
    }

    #[test]
    fn test_empty_header_is_close_only() {
        let header = ModalHeader::new();
        assert!(!header.has_heading());
        assert!(header.styled_title().is_none());
        assert!(header.styled_subtitle(&light_state()).is_none());
    }

    #[test]
    fn test_has_heading_with_either_child() {
        assert!(ModalHeader::new()
            .with_title(Text::new("Settings"))
            .has_heading());
        assert!(ModalHeader::new()
            .with_subtitle(Text::new("Manage your account"))
            .has_heading());
    }

    #[test]
    fn test_surface_is_accent_gradient_in_light() {
        let header = ModalHeader::new()
            .with_title(Text::new("Settings"))
            .with_accent(AccentColor::Blue);
        let styles = header.computed_styles(&light_state());

        assert!(styles.fill.is_gradient());
        assert_eq!(styles.fill.leading_color(), Some("#1D4ED8"));
        assert_eq!(styles.close_icon_color, WHITE);
    }

    #[test]
    fn test_surface_flattens_in_dark() {
        let header = ModalHeader::new().with_title(Text::new("Settings"));
        let styles = header.computed_styles(&dark_state());

        assert_eq!(styles.fill.leading_color(), Some("#313134"));
        assert_eq!(styles.close_icon_color, NEUTRAL.s300);
    }

    #[test]
    fn test_title_merge_forces_white_and_margin() {
        let child = Text::new("Settings")
            .with_variant(TypographyVariant::TitleTwo)
            .with_color("#FF0000")
            .with_style(StyleProps {
                color: Some("#FF0000".to_string()),
                margin_bottom: Some(32.0),
                opacity: Some(0.9),
                ..Default::default()
            });
        let header = ModalHeader::new().with_title(child);

        let styled = header.styled_title().unwrap();
        assert_eq!(styled.color, Some(WHITE.to_string()));
        assert_eq!(styled.style.color, Some(WHITE.to_string()));
        assert_eq!(styled.style.margin_bottom, Some(4.0));
        // Untouched fields survive the merge
        assert_eq!(styled.style.opacity, Some(0.9));
        assert_eq!(styled.variant, TypographyVariant::TitleTwo);
    }

    #[test]
    fn test_title_computes_white_on_theme() {
        let header = ModalHeader::new().with_title(Text::new("Settings"));
        let styled = header.styled_title().unwrap();
        let computed = styled.computed_styles(&light_state());
        assert_eq!(computed.color, WHITE);
    }

    #[test]
    fn test_subtitle_follows_mode() {
        let header = ModalHeader::new().with_subtitle(Text::new("Manage"));

        let styled = header.styled_subtitle(&light_state()).unwrap();
        assert_eq!(styled.color, Some(WHITE.to_string()));

        let styled = header.styled_subtitle(&dark_state()).unwrap();
        assert_eq!(styled.color, Some(NEUTRAL.s300.to_string()));
    }

    #[test]
    fn test_subtitle_honors_header_mode_override() {
        let header = ModalHeader::new()
            .with_subtitle(Text::new("Manage"))
            .with_color_mode(ColorMode::Dark);

        let styled = header.styled_subtitle(&light_state()).unwrap();
        assert_eq!(styled.color, Some(NEUTRAL.s300.to_string()));
    }

    #[test]
    fn test_header_serialization() {
        let header = ModalHeader::new()
            .with_title(Text::new("Settings"))
            .with_accent(AccentColor::Emerald)
            .on_close("handleClose");

        let json = serde_json::to_string(&header).unwrap();
        assert!(json.contains(r#""accentColor":"emerald""#));
        assert!(json.contains(r#""onClose":"handleClose""#));

        let deserialized: ModalHeader = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, header);
    }
}
