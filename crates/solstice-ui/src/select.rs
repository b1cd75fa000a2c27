//! Select component
//!
//! A picker over `{id, title, subtitle}` options. Selection is tracked by
//! option id; the selected row tints with the resolved accent in light mode
//! and stays on the neutral dark ramp in dark mode.

use crate::style::{ComponentId, EventHandler};
use crate::tokens::sizing;
use serde::{Deserialize, Serialize};
use solstice_theme::palette::WHITE;
use solstice_theme::resolver::{resolve_accent_color, resolve_color_mode, resolve_value};
use solstice_theme::{AccentColor, Color, ColorMode, ThemeState, DARK_SURFACE, NEUTRAL};

/// A selectable option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Stable option id
    pub id: String,
    /// Primary row text
    pub title: String,
    /// Secondary row text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

impl SelectOption {
    /// Create an option
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
        }
    }

    /// Set the secondary text
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// Select component properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Select {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Options in display order
    #[serde(default)]
    pub options: Vec<SelectOption>,
    /// Id of the selected option
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_id: Option<String>,
    /// Placeholder shown while nothing is selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Per-component accent override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<AccentColor>,
    /// Per-component color mode override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<ColorMode>,
    /// On change event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change: Option<EventHandler>,
}

impl Select {
    /// Create an empty select
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option
    pub fn with_option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    /// Set the selected option by id
    pub fn with_selected_id(mut self, id: impl Into<String>) -> Self {
        self.selected_id = Some(id.into());
        self
    }

    /// Set the placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Override the accent color for this select only
    pub fn with_accent(mut self, accent: AccentColor) -> Self {
        self.accent_color = Some(accent);
        self
    }

    /// Override the color mode for this select only
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = Some(mode);
        self
    }

    /// Set on change handler
    pub fn on_change(mut self, handler: impl Into<String>) -> Self {
        self.on_change = Some(handler.into());
        self
    }

    /// Look up the selected option by id
    pub fn selected_option(&self) -> Option<&SelectOption> {
        let id = self.selected_id.as_deref()?;
        self.options.iter().find(|option| option.id == id)
    }

    /// Text shown in the closed field: selection title, else placeholder
    pub fn display_text(&self) -> Option<&str> {
        self.selected_option()
            .map(|option| option.title.as_str())
            .or(self.placeholder.as_deref())
    }

    /// Get the computed styles for the closed field
    pub fn computed_styles(&self, state: &ThemeState) -> SelectStyles {
        let mode = resolve_color_mode(self.color_mode, state);

        SelectStyles {
            background: resolve_value(WHITE, DARK_SURFACE[2], mode).to_string(),
            text_color: resolve_value(NEUTRAL.s900, NEUTRAL.s50, mode).to_string(),
            placeholder_color: resolve_value(NEUTRAL.s500, NEUTRAL.s400, mode).to_string(),
            height: sizing::select::MD_HEIGHT,
        }
    }

    /// Get the computed styles for the option row at `index`
    pub fn row_styles(&self, index: usize, state: &ThemeState) -> Option<SelectRowStyles> {
        let option = self.options.get(index)?;
        let mode = resolve_color_mode(self.color_mode, state);
        let accent = resolve_accent_color(self.accent_color, state);
        let selected = self.selected_id.as_deref() == Some(option.id.as_str());

        let background = if selected {
            resolve_value(accent.scale().s100, DARK_SURFACE[4], mode)
        } else {
            resolve_value(WHITE, DARK_SURFACE[2], mode)
        };

        Some(SelectRowStyles {
            background: background.to_string(),
            title_color: resolve_value(NEUTRAL.s900, NEUTRAL.s50, mode).to_string(),
            subtitle_color: resolve_value(NEUTRAL.s500, NEUTRAL.s400, mode).to_string(),
            selected,
        })
    }
}

/// Computed field styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectStyles {
    /// Field surface color
    pub background: Color,
    /// Selected title color
    pub text_color: Color,
    /// Placeholder color
    pub placeholder_color: Color,
    /// Field height
    pub height: f32,
}

/// Computed option row styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectRowStyles {
    /// Row surface color
    pub background: Color,
    /// Title color
    pub title_color: Color,
    /// Subtitle color
    pub subtitle_color: Color,
    /// Whether this row is the selection
    pub selected: bool,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

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

    fn cities() -> Select {
        Select::new()
            .with_option(SelectOption::new("1", "Buenos Aires").with_subtitle("Argentina"))
            .with_option(SelectOption::new("2", "New York").with_subtitle("United States"))
            .with_option(SelectOption::new("3", "Stockholm").with_subtitle("Sweden"))
    }

    #[test]
    fn test_selected_option_lookup() {
        let select = cities().with_selected_id("2");
        assert_eq!(select.selected_option().unwrap().title, "New York");
    }

    #[test]
    fn test_unknown_id_selects_nothing() {
        let select = cities().with_selected_id("99");
        assert!(select.selected_option().is_none());
    }

    #[test]
    fn test_display_text_prefers_selection() {
        let select = cities().with_placeholder("Pick a city");
        assert_eq!(select.display_text(), Some("Pick a city"));

        let select = select.with_selected_id("3");
        assert_eq!(select.display_text(), Some("Stockholm"));
    }

    #[test]
    fn test_selected_row_tints_with_accent() {
        let select = cities()
            .with_accent(AccentColor::Emerald)
            .with_selected_id("1");

        let row = select.row_styles(0, &light_state()).unwrap();
        assert!(row.selected);
        assert_eq!(row.background, "#D1FAE5");

        let row = select.row_styles(1, &light_state()).unwrap();
        assert!(!row.selected);
        assert_eq!(row.background, WHITE);
    }

    #[test]
    fn test_dark_rows_stay_on_neutral_ramp() {
        let select = cities().with_selected_id("1");

        let row = select.row_styles(0, &dark_state()).unwrap();
        assert_eq!(row.background, DARK_SURFACE[4]);

        let row = select.row_styles(1, &dark_state()).unwrap();
        assert_eq!(row.background, DARK_SURFACE[2]);
    }

    #[test]
    fn test_subtitle_renders_neutral() {
        let select = cities();
        let row = select.row_styles(0, &light_state()).unwrap();
        assert_eq!(row.subtitle_color, NEUTRAL.s500);
    }

    #[test]
    fn test_field_surface_follows_mode() {
        let select = cities();
        assert_eq!(select.computed_styles(&light_state()).background, WHITE);
        assert_eq!(select.computed_styles(&dark_state()).background, DARK_SURFACE[2]);
    }

    #[test]
    fn test_select_serialization() {
        let select = cities().with_selected_id("1");
        let json = serde_json::to_string(&select).unwrap();
        assert!(json.contains(r#""selectedId":"1""#));
        assert!(json.contains(r#""subtitle":"Argentina""#));

        let deserialized: Select = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, select);
    }
}
