//! Host collaborators driven by the toast controller
//!
//! A host supplies a presenter that puts views on screen, an animation engine
//! that plays entrance animations on them, and optionally a haptic service.
//! The terminal implementations live in `crate::terminal`.

use std::time::Duration;

use crate::toast::{AnimationResource, DisplayLength, Placement, ToastHandle, ToastView};

/// Displays, times out, and removes transient views
pub trait Presenter {
    /// Put `view` on screen for the platform duration of `length`
    fn render(&mut self, view: ToastView, placement: Placement, length: DisplayLength)
    -> ToastHandle;

    /// Remove a view early. Unknown or already removed handles are ignored.
    fn cancel(&mut self, handle: ToastHandle);

    /// Keep a view up for `duration` after it was rendered instead of its
    /// display length; the controller cancels it once that time is up.
    fn hold(&mut self, _handle: ToastHandle, _duration: Duration) {}
}

/// Loads and plays entrance animations
pub trait AnimationEngine {
    type Animation;

    /// Returns `None` when the resource is unknown to this engine
    fn load(&mut self, resource: AnimationResource) -> Option<Self::Animation>;

    fn play(&mut self, view: ToastHandle, animation: Self::Animation);
}

/// Device haptics (vibration)
pub trait HapticService {
    fn has_vibrator(&self) -> bool;

    fn vibrate(&mut self, duration: Duration);
}

/// Animation engine for hosts without animation support
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnimation;

impl AnimationEngine for NoAnimation {
    type Animation = ();

    fn load(&mut self, _resource: AnimationResource) -> Option<()> {
        None
    }

    fn play(&mut self, _view: ToastHandle, _animation: ()) {}
}

/// Placeholder haptic service type for controllers built without one
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticService for NoHaptics {
    fn has_vibrator(&self) -> bool {
        false
    }

    fn vibrate(&mut self, _duration: Duration) {}
}
