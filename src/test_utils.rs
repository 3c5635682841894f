//! Shared test utilities for styled-toast
//!
//! Recording fakes of the host collaborators, used across test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::time::Duration;

    use crate::platform::{AnimationEngine, HapticService, Presenter};
    use crate::toast::{
        AnimationResource, DisplayLength, Placement, StyledView, ToastController, ToastHandle,
        ToastView,
    };

    /// One call to `Presenter::render`
    #[derive(Debug, Clone)]
    pub struct RenderCall {
        pub handle: ToastHandle,
        pub view: ToastView,
        pub placement: Placement,
        pub length: DisplayLength,
    }

    /// Presenter that records every render, cancel and hold request
    #[derive(Debug, Default)]
    pub struct RecordingPresenter {
        pub rendered: Vec<RenderCall>,
        pub cancelled: Vec<ToastHandle>,
        pub held: Vec<(ToastHandle, Duration)>,
    }

    impl RecordingPresenter {
        pub fn last(&self) -> &RenderCall {
            self.rendered.last().expect("nothing rendered")
        }

        pub fn last_styled(&self) -> &StyledView {
            self.last().view.as_styled().expect("last view is not styled")
        }
    }

    impl Presenter for RecordingPresenter {
        fn render(
            &mut self,
            view: ToastView,
            placement: Placement,
            length: DisplayLength,
        ) -> ToastHandle {
            let handle = ToastHandle::new();
            self.rendered.push(RenderCall {
                handle,
                view,
                placement,
                length,
            });
            handle
        }

        fn cancel(&mut self, handle: ToastHandle) {
            self.cancelled.push(handle);
        }

        fn hold(&mut self, handle: ToastHandle, duration: Duration) {
            self.held.push((handle, duration));
        }
    }

    /// Animation engine that records loads and plays
    #[derive(Debug)]
    pub struct RecordingAnimator {
        /// When false, every load fails
        pub knows_resources: bool,
        pub loaded: Vec<AnimationResource>,
        pub played: Vec<(ToastHandle, AnimationResource)>,
    }

    impl Default for RecordingAnimator {
        fn default() -> Self {
            Self {
                knows_resources: true,
                loaded: Vec::new(),
                played: Vec::new(),
            }
        }
    }

    impl AnimationEngine for RecordingAnimator {
        type Animation = AnimationResource;

        fn load(&mut self, resource: AnimationResource) -> Option<AnimationResource> {
            self.loaded.push(resource);
            self.knows_resources.then_some(resource)
        }

        fn play(&mut self, view: ToastHandle, animation: AnimationResource) {
            self.played.push((view, animation));
        }
    }

    /// Haptic service that records pulses
    #[derive(Debug, Default)]
    pub struct RecordingHaptics {
        pub capable: bool,
        pub pulses: Vec<Duration>,
    }

    impl HapticService for RecordingHaptics {
        fn has_vibrator(&self) -> bool {
            self.capable
        }

        fn vibrate(&mut self, duration: Duration) {
            self.pulses.push(duration);
        }
    }

    pub type TestController =
        ToastController<RecordingPresenter, RecordingAnimator, RecordingHaptics>;

    /// Controller with recording collaborators and a capable haptic service
    pub fn test_controller() -> TestController {
        ToastController::new(RecordingPresenter::default(), RecordingAnimator::default())
            .with_haptics(RecordingHaptics {
                capable: true,
                pulses: Vec::new(),
            })
    }
}
