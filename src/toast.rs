//! Styled toast notifications
//!
//! Toasts are described by value (`ToastBuilder`, `ToastView`) and handed to a
//! `ToastController`, which owns the global theme, the loader slot and the
//! pending deferred cancellations, and drives the host collaborators.

mod toast_builder;
mod toast_controller;
mod toast_kind;
mod toast_theme;
mod toast_view;

pub use toast_builder::{DEFAULT_DURATION, ToastBuilder};
pub use toast_controller::{
    DeferredCancel, PRESET_DURATION, ToastController, VIBRATION_PULSE,
};
pub use toast_kind::{AnimationResource, AnimationType, IconId, PresetStyle, ToastType};
pub use toast_theme::ToastTheme;
pub use toast_view::{
    BOTTOM_OFFSET, DisplayLength, LoaderView, Placement, StyledView, ToastHandle, ToastView,
};
