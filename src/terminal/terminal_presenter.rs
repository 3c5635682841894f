//! Presenter keeping the toasts currently on screen

use std::time::{Duration, Instant};

use crate::platform::Presenter;
use crate::toast::{DisplayLength, Placement, ToastHandle, ToastView};

/// A view on screen with its display lifetime
#[derive(Debug, Clone)]
pub struct ActiveToast {
    pub handle: ToastHandle,
    pub view: ToastView,
    pub placement: Placement,
    pub shown_at: Instant,
    pub lifetime: Duration,
}

impl ActiveToast {
    /// Check if the display lifetime has elapsed at `now`
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) > self.lifetime
    }
}

/// Active toasts, oldest first
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    active: Vec<ActiveToast>,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop expired toasts, returns true if any were removed
    pub fn clear_expired(&mut self, now: Instant) -> bool {
        let before = self.active.len();
        self.active.retain(|toast| !toast.is_expired(now));
        self.active.len() != before
    }

    pub fn active(&self) -> &[ActiveToast] {
        &self.active
    }

    pub fn get(&self, handle: ToastHandle) -> Option<&ActiveToast> {
        self.active.iter().find(|toast| toast.handle == handle)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl Presenter for TerminalPresenter {
    fn render(
        &mut self,
        view: ToastView,
        placement: Placement,
        length: DisplayLength,
    ) -> ToastHandle {
        let handle = ToastHandle::new();
        self.active.push(ActiveToast {
            handle,
            view,
            placement,
            shown_at: Instant::now(),
            lifetime: length.duration(),
        });
        handle
    }

    fn cancel(&mut self, handle: ToastHandle) {
        self.active.retain(|toast| toast.handle != handle);
    }

    fn hold(&mut self, handle: ToastHandle, duration: Duration) {
        if let Some(toast) = self.active.iter_mut().find(|t| t.handle == handle) {
            toast.lifetime = duration;
        }
    }
}
