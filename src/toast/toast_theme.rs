//! Presentation defaults shared by every builder created while the theme is active

use ratatui::style::Color;

use crate::theme;

/// Customizable toast theme: background color, text color, font size and
/// corner radius.
///
/// Values are not validated; whatever is set is handed to the presenter as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTheme {
    background: Color,
    text: Color,
    font_size: u16,
    corner_radius: u16,
}

impl Default for ToastTheme {
    fn default() -> Self {
        Self {
            background: theme::toast::BACKGROUND,
            text: theme::toast::TEXT,
            font_size: theme::toast::FONT_SIZE,
            corner_radius: theme::toast::CORNER_RADIUS,
        }
    }
}

impl ToastTheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn text(&self) -> Color {
        self.text
    }

    /// Font size in sp-equivalent units
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Corner radius in dp-equivalent units
    pub fn corner_radius(&self) -> u16 {
        self.corner_radius
    }

    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    #[must_use]
    pub fn with_text(mut self, color: Color) -> Self {
        self.text = color;
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, font_size: u16) -> Self {
        self.font_size = font_size;
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: u16) -> Self {
        self.corner_radius = corner_radius;
        self
    }
}
