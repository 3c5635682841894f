// Configuration type definitions

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::ToastError;
use crate::toast::ToastTheme;

/// Parse `#RRGGBB` or a named color
pub fn parse_color(value: &str) -> Result<Color, ToastError> {
    value
        .trim()
        .parse::<Color>()
        .map_err(|_| ToastError::InvalidColor(value.to_string()))
}

/// Theme configuration section; unset fields keep the theme defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub font_size: Option<u16>,
    #[serde(default)]
    pub corner_radius: Option<u16>,
}

impl ThemeConfig {
    pub fn to_theme(&self) -> Result<ToastTheme, ToastError> {
        let mut theme = ToastTheme::default();
        if let Some(background) = &self.background {
            theme = theme.with_background(parse_color(background)?);
        }
        if let Some(text) = &self.text {
            theme = theme.with_text(parse_color(text)?);
        }
        if let Some(font_size) = self.font_size {
            theme = theme.with_font_size(font_size);
        }
        if let Some(corner_radius) = self.corner_radius {
            theme = theme.with_corner_radius(corner_radius);
        }
        Ok(theme)
    }
}

/// Haptics configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HapticsConfig {
    #[serde(default = "default_bell")]
    pub bell: bool,
}

fn default_bell() -> bool {
    true
}

impl Default for HapticsConfig {
    fn default() -> Self {
        HapticsConfig { bell: true }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: Option<ThemeConfig>,
    #[serde(default)]
    pub haptics: HapticsConfig,
}

impl Config {
    /// Theme to install globally, if the config has a valid `[theme]` section
    pub fn toast_theme(&self) -> Option<ToastTheme> {
        self.theme.as_ref().and_then(|t| t.to_theme().ok())
    }
}
