//! styled-toast library - styled transient notifications
//!
//! Preset and custom toasts with colors, icons, entrance animations, custom
//! durations, optional haptics and a global theme, plus a terminal host.

pub mod config;
pub mod demo;
pub mod error;
pub mod platform;
pub mod terminal;
pub mod theme;
pub mod toast;

#[cfg(test)]
pub mod test_utils;
pub mod widgets;

// Re-export commonly used types for convenience
pub use error::ToastError;
pub use platform::{AnimationEngine, HapticService, Presenter};
pub use toast::{AnimationType, IconId, ToastBuilder, ToastController, ToastTheme, ToastType};
