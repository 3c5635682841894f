//! Builder for fully customized toasts
//!
//! A builder is a plain value. It starts from the global theme captured when it
//! was created, each setter overwrites one field, and `show` hands the resolved
//! view to a controller. It can be shown more than once.

use ratatui::style::Color;
use std::time::Duration;

use super::toast_controller::ToastController;
use super::toast_kind::{AnimationType, IconId};
use super::toast_theme::ToastTheme;
use super::toast_view::{StyledView, ToastHandle};
use crate::platform::{AnimationEngine, HapticService, Presenter};
use crate::theme;

/// Duration used when `duration` is never called
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastBuilder {
    message: String,
    background: Option<Color>,
    text_color: Option<Color>,
    icon: IconId,
    duration: Duration,
    animation: AnimationType,
    vibrate: bool,
    font_size: u16,
    corner_radius: u16,
}

impl Default for ToastBuilder {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ToastBuilder {
    /// Create a builder, adopting the colors of `theme` when one is given
    pub fn new(theme: Option<&ToastTheme>) -> Self {
        let defaults = ToastTheme::default();
        Self {
            message: String::new(),
            background: theme.map(ToastTheme::background),
            text_color: theme.map(ToastTheme::text),
            icon: IconId::NONE,
            duration: DEFAULT_DURATION,
            animation: AnimationType::default(),
            vibrate: false,
            font_size: theme.unwrap_or(&defaults).font_size(),
            corner_radius: theme.unwrap_or(&defaults).corner_radius(),
        }
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn background_color(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Set the icon; `IconId::NONE` hides it
    #[must_use]
    pub fn icon(mut self, icon: impl Into<IconId>) -> Self {
        self.icon = icon.into();
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn animation(mut self, animation: AnimationType) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn vibrate(mut self, vibrate: bool) -> Self {
        self.vibrate = vibrate;
        self
    }

    pub fn configured_duration(&self) -> Duration {
        self.duration
    }

    pub fn configured_animation(&self) -> AnimationType {
        self.animation
    }

    pub fn vibrates(&self) -> bool {
        self.vibrate
    }

    /// Resolve overrides against the hard-coded defaults
    pub fn resolve(&self) -> StyledView {
        StyledView {
            message: self.message.clone(),
            background: self.background.unwrap_or(theme::toast::BACKGROUND),
            text_color: self.text_color.unwrap_or(theme::toast::TEXT),
            icon: (!self.icon.is_none()).then_some(self.icon),
            action_visible: false,
            font_size: self.font_size,
            corner_radius: self.corner_radius,
        }
    }

    /// Build and show the toast through `controller`
    pub fn show<P, A, H>(&self, controller: &mut ToastController<P, A, H>) -> ToastHandle
    where
        P: Presenter,
        A: AnimationEngine,
        H: HapticService,
    {
        controller.show(self)
    }
}

#[cfg(test)]
#[path = "toast_builder_tests.rs"]
mod toast_builder_tests;
