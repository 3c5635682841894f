//! Toast controller - entry points for showing toasts
//!
//! Owns the state shared by every toast: the optional global theme, the loader
//! slot, and the deferred cancellations scheduled by long-running toasts.
//! Drive it from a single UI loop and call `tick` on every iteration.

use std::time::{Duration, Instant};

use super::toast_builder::ToastBuilder;
use super::toast_kind::{AnimationType, ToastType};
use super::toast_theme::ToastTheme;
use super::toast_view::{DisplayLength, LoaderView, Placement, StyledView, ToastHandle, ToastView};
use crate::platform::{AnimationEngine, HapticService, NoHaptics, Presenter};
use crate::theme;

/// Duration used by `preset`
pub const PRESET_DURATION: Duration = Duration::from_millis(2500);

/// Length of the single pulse issued by vibrating toasts
pub const VIBRATION_PULSE: Duration = Duration::from_millis(100);

/// A one-shot cancellation of a rendered view, due at a fixed instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredCancel {
    handle: ToastHandle,
    delay: Duration,
    due: Instant,
}

impl DeferredCancel {
    pub fn handle(&self) -> ToastHandle {
        self.handle
    }

    /// Delay between scheduling and firing
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn due(&self) -> Instant {
        self.due
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

pub struct ToastController<P, A, H = NoHaptics> {
    presenter: P,
    animator: A,
    haptics: Option<H>,
    global_theme: Option<ToastTheme>,
    loader: Option<ToastHandle>,
    pending_cancels: Vec<DeferredCancel>,
}

impl<P, A> ToastController<P, A, NoHaptics>
where
    P: Presenter,
    A: AnimationEngine,
{
    /// Create a controller without a haptic service
    pub fn new(presenter: P, animator: A) -> Self {
        Self {
            presenter,
            animator,
            haptics: None,
            global_theme: None,
            loader: None,
            pending_cancels: Vec::new(),
        }
    }
}

impl<P, A, H> ToastController<P, A, H>
where
    P: Presenter,
    A: AnimationEngine,
    H: HapticService,
{
    /// Attach a haptic service, replacing any previous one
    pub fn with_haptics<H2: HapticService>(self, haptics: H2) -> ToastController<P, A, H2> {
        ToastController {
            presenter: self.presenter,
            animator: self.animator,
            haptics: Some(haptics),
            global_theme: self.global_theme,
            loader: self.loader,
            pending_cancels: self.pending_cancels,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn haptics(&self) -> Option<&H> {
        self.haptics.as_ref()
    }

    /// Show a success toast
    pub fn success(&mut self, message: &str) -> ToastHandle {
        self.show_preset_toast(message, ToastType::Success)
    }

    /// Show an error toast
    pub fn error(&mut self, message: &str) -> ToastHandle {
        self.show_preset_toast(message, ToastType::Error)
    }

    /// Show a warning toast
    pub fn warning(&mut self, message: &str) -> ToastHandle {
        self.show_preset_toast(message, ToastType::Warning)
    }

    /// Show an info toast
    pub fn info(&mut self, message: &str) -> ToastHandle {
        self.show_preset_toast(message, ToastType::Info)
    }

    /// Start a fully customized toast, seeded with the global theme
    pub fn custom(&self) -> ToastBuilder {
        ToastBuilder::new(self.global_theme.as_ref())
    }

    /// Show a preset toast through the builder path.
    ///
    /// Unlike `success`/`error`/`warning`/`info` this honours the global theme
    /// text color, animates with `SlideInBottom` and lasts `PRESET_DURATION`.
    pub fn preset(&mut self, toast_type: ToastType, message: &str) -> ToastHandle {
        let style = toast_type.preset_style();
        let builder = self
            .custom()
            .message(message)
            .background_color(style.background)
            .icon(style.icon)
            .duration(PRESET_DURATION)
            .animation(AnimationType::SlideInBottom);
        self.show(&builder)
    }

    /// Show a loader toast, replacing the tracked loader.
    ///
    /// A loader that is still showing is not cancelled; it stays up until its
    /// own timeout but can no longer be dismissed.
    pub fn show_loader(&mut self, message: &str) -> ToastHandle {
        let view = ToastView::Loader(LoaderView {
            message: message.to_string(),
        });
        let handle = self
            .presenter
            .render(view, Placement::bottom(), DisplayLength::Long);

        if let Some(_previous) = self.loader.replace(handle) {
            #[cfg(debug_assertions)]
            log::debug!("Loader {:?} orphaned by {:?}", _previous, handle);
        }
        handle
    }

    /// Dismiss the tracked loader, if any
    pub fn dismiss_loader(&mut self) {
        if let Some(handle) = self.loader.take() {
            self.presenter.cancel(handle);
        }
    }

    /// Handle of the loader `dismiss_loader` would cancel
    pub fn active_loader(&self) -> Option<ToastHandle> {
        self.loader
    }

    /// Set or clear the theme applied to builders created from now on
    pub fn set_global_theme(&mut self, theme: Option<ToastTheme>) {
        self.global_theme = theme;
    }

    pub fn global_theme(&self) -> Option<&ToastTheme> {
        self.global_theme.as_ref()
    }

    /// Render a builder's toast and run its side effects
    pub fn show(&mut self, builder: &ToastBuilder) -> ToastHandle {
        let view = ToastView::Styled(builder.resolve());
        let handle = self
            .presenter
            .render(view, Placement::bottom(), DisplayLength::Short);

        self.animate(handle, builder.configured_animation());
        self.schedule_cancel(handle, builder.configured_duration());
        if builder.vibrates() {
            self.pulse();
        }
        handle
    }

    /// Fire every deferred cancellation due at `now`, returns how many fired
    pub fn tick(&mut self, now: Instant) -> usize {
        let (due, pending): (Vec<_>, Vec<_>) = self
            .pending_cancels
            .drain(..)
            .partition(|cancel| cancel.is_due(now));
        self.pending_cancels = pending;

        for cancel in &due {
            #[cfg(debug_assertions)]
            log::debug!("Deferred cancel fired for {:?}", cancel.handle);
            self.presenter.cancel(cancel.handle);
        }
        due.len()
    }

    /// Cancellations scheduled but not yet fired
    pub fn pending_cancellations(&self) -> &[DeferredCancel] {
        &self.pending_cancels
    }

    fn show_preset_toast(&mut self, message: &str, toast_type: ToastType) -> ToastHandle {
        let style = toast_type.preset_style();
        let view = ToastView::Styled(StyledView {
            message: message.to_string(),
            background: style.background,
            text_color: theme::toast::TEXT,
            icon: Some(style.icon),
            action_visible: false,
            font_size: theme::toast::FONT_SIZE,
            corner_radius: theme::toast::CORNER_RADIUS,
        });
        self.presenter
            .render(view, Placement::bottom(), DisplayLength::Short)
    }

    fn animate(&mut self, handle: ToastHandle, animation: AnimationType) {
        let Some(resource) = animation.resource() else {
            return;
        };
        if let Some(loaded) = self.animator.load(resource) {
            self.animator.play(handle, loaded);
        }
    }

    /// Views asking for longer than the short display length are held by the
    /// presenter and cancelled by us instead of the presenter's own timeout.
    fn schedule_cancel(&mut self, handle: ToastHandle, duration: Duration) {
        if duration <= DisplayLength::Short.duration() {
            return;
        }
        self.presenter.hold(handle, duration);

        // Past the end of the clock: never due
        let Some(due) = Instant::now().checked_add(duration) else {
            #[cfg(debug_assertions)]
            log::debug!("Cancel of {:?} in {:?} is never due", handle, duration);
            return;
        };

        #[cfg(debug_assertions)]
        log::debug!("Scheduling cancel of {:?} in {:?}", handle, duration);

        self.pending_cancels.push(DeferredCancel {
            handle,
            delay: duration,
            due,
        });
    }

    fn pulse(&mut self) {
        if let Some(haptics) = self.haptics.as_mut()
            && haptics.has_vibrator()
        {
            haptics.vibrate(VIBRATION_PULSE);
        }
    }
}

#[cfg(test)]
#[path = "toast_controller_tests.rs"]
mod toast_controller_tests;
