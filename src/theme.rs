//! Centralized color configuration for toasts and the demo screen.
//!
//! All colors are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files

use ratatui::style::Color;

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const DARK_GRAY: Color = Color::Rgb(0x44, 0x44, 0x44);
    pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

    // Preset backgrounds (Material 800 shades)
    pub const SUCCESS: Color = Color::Rgb(0x2E, 0x7D, 0x32);
    pub const ERROR: Color = Color::Rgb(0xC6, 0x28, 0x28);
    pub const WARNING: Color = Color::Rgb(0xEF, 0x6C, 0x00);
    pub const INFO: Color = Color::Rgb(0x15, 0x65, 0xC0);
}

/// Toast view defaults applied when neither an override nor a theme supplies a value
pub mod toast {
    use super::*;

    pub const BACKGROUND: Color = palette::DARK_GRAY;
    pub const TEXT: Color = palette::WHITE;
    pub const FONT_SIZE: u16 = 16;
    pub const CORNER_RADIUS: u16 = 12;

    // Loader toasts use a fixed layout
    pub const LOADER_BACKGROUND: Color = palette::DARK_GRAY;
    pub const LOADER_TEXT: Color = palette::WHITE;
    pub const LOADER_SPINNER: Color = Color::Rgb(0x90, 0xCA, 0xF9);
}

/// Demo screen styles
pub mod demo {
    use super::*;

    pub const BACKGROUND: Color = Color::Rgb(0x1E, 0x1E, 0x24);
    pub const TITLE: Color = Color::Rgb(0xEC, 0xEC, 0xF4);
    pub const BORDER: Color = Color::Rgb(0x5A, 0x5C, 0x77);
    pub const KEY: Color = Color::Rgb(0x00, 0xD9, 0xFF);
    pub const LABEL: Color = Color::Rgb(0xEC, 0xEC, 0xF4);
    pub const HINT: Color = Color::Rgb(0x82, 0x85, 0x9E);
    pub const THEME_ON: Color = Color::Rgb(0x6B, 0xCB, 0x77);
    pub const THEME_OFF: Color = Color::Rgb(0x82, 0x85, 0x9E);

    // Button colors used by the custom and vibrate demos
    pub const CUSTOM_BACKGROUND: Color = Color::Rgb(0x62, 0x00, 0xEA);
    pub const VIBRATE_BACKGROUND: Color = Color::Rgb(0x38, 0x8E, 0x3C);
}
