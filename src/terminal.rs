//! Terminal host for styled toasts
//!
//! Implements the presenter, animation engine and haptic service on top of
//! ratatui/crossterm, and renders the active toasts as a bottom overlay.

mod terminal_animator;
mod terminal_haptics;
mod terminal_presenter;
mod terminal_render;

pub use terminal_animator::{ANIMATION_LENGTH, Animation, TerminalAnimator, Transform};
pub use terminal_haptics::TerminalBell;
pub use terminal_presenter::{ActiveToast, TerminalPresenter};
pub use terminal_render::{DP_PER_ROW, render_toasts};
