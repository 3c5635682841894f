//! Toast categories, entrance animations and icon ids

use ratatui::style::Color;

use crate::theme::palette;

/// Resource id of an icon. Zero means "no icon".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IconId(u32);

impl IconId {
    pub const NONE: IconId = IconId(0);
    pub const SUCCESS: IconId = IconId(1);
    pub const ERROR: IconId = IconId(2);
    pub const WARNING: IconId = IconId(3);
    pub const INFO: IconId = IconId(4);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for IconId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Notification category - selects the preset color and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

/// Fixed background/icon pair used by the preset toasts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetStyle {
    pub background: Color,
    pub icon: IconId,
}

impl ToastType {
    pub const ALL: [ToastType; 4] = [
        ToastType::Success,
        ToastType::Error,
        ToastType::Warning,
        ToastType::Info,
    ];

    /// Get the preset color/icon pair for this type
    pub fn preset_style(self) -> PresetStyle {
        match self {
            ToastType::Success => PresetStyle {
                background: palette::SUCCESS,
                icon: IconId::SUCCESS,
            },
            ToastType::Error => PresetStyle {
                background: palette::ERROR,
                icon: IconId::ERROR,
            },
            ToastType::Warning => PresetStyle {
                background: palette::WARNING,
                icon: IconId::WARNING,
            },
            ToastType::Info => PresetStyle {
                background: palette::INFO,
                icon: IconId::INFO,
            },
        }
    }
}

/// Named animation resource understood by an `AnimationEngine`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationResource(&'static str);

impl AnimationResource {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn name(self) -> &'static str {
        self.0
    }
}

/// Entrance animation played when a toast appears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationType {
    #[default]
    SlideInBottom,
    FadeIn,
    PopIn,
    BounceIn,
}

impl AnimationType {
    pub const ALL: [AnimationType; 4] = [
        AnimationType::SlideInBottom,
        AnimationType::FadeIn,
        AnimationType::PopIn,
        AnimationType::BounceIn,
    ];

    /// Resource backing this animation, if any
    pub fn resource(self) -> Option<AnimationResource> {
        let name = match self {
            AnimationType::SlideInBottom => "slide_in_bottom",
            AnimationType::FadeIn => "fade_in",
            AnimationType::PopIn => "pop_in",
            AnimationType::BounceIn => "bounce_in",
        };
        Some(AnimationResource::new(name))
    }
}
