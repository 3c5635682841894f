//! Entrance animations for terminal toasts
//!
//! An animation is resolved to a per-frame `Transform` that the renderer
//! applies to the toast's area and style.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::platform::AnimationEngine;
use crate::toast::{AnimationResource, ToastHandle};

/// Length of every entrance animation
pub const ANIMATION_LENGTH: Duration = Duration::from_millis(300);

/// Rows a sliding toast starts below its final position
const SLIDE_ROWS: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Motion {
    SlideInBottom,
    FadeIn,
    PopIn,
    BounceIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    motion: Motion,
    length: Duration,
}

/// How a toast is displaced or styled on the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    /// Rows below the final position
    pub y_shift: u16,
    /// Width as a percentage of the final width
    pub width_percent: u16,
    pub dim: bool,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        y_shift: 0,
        width_percent: 100,
        dim: false,
    };
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Animation {
    /// Transform after `elapsed` time
    pub fn transform(&self, elapsed: Duration) -> Transform {
        if elapsed >= self.length {
            return Transform::IDENTITY;
        }
        let t = elapsed.as_secs_f32() / self.length.as_secs_f32();

        match self.motion {
            Motion::SlideInBottom => Transform {
                y_shift: (SLIDE_ROWS * (1.0 - t)).round() as u16,
                ..Transform::IDENTITY
            },
            Motion::FadeIn => Transform {
                dim: t < 0.5,
                ..Transform::IDENTITY
            },
            Motion::PopIn => Transform {
                width_percent: (50.0 + 50.0 * t).round() as u16,
                ..Transform::IDENTITY
            },
            // Drop in, overshoot by one row, settle
            Motion::BounceIn => {
                let y_shift = if t < 0.6 {
                    (SLIDE_ROWS * (1.0 - t / 0.6)).round() as u16
                } else if t < 0.8 {
                    1
                } else {
                    0
                };
                Transform {
                    y_shift,
                    ..Transform::IDENTITY
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Playing {
    animation: Animation,
    started: Instant,
}

#[derive(Debug, Default)]
pub struct TerminalAnimator {
    playing: HashMap<ToastHandle, Playing>,
}

impl TerminalAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform for `handle` at `now`; identity when nothing is playing
    pub fn transform_at(&self, handle: ToastHandle, now: Instant) -> Transform {
        self.playing
            .get(&handle)
            .map(|p| p.animation.transform(now.saturating_duration_since(p.started)))
            .unwrap_or_default()
    }

    pub fn is_playing(&self, handle: ToastHandle, now: Instant) -> bool {
        self.playing
            .get(&handle)
            .is_some_and(|p| now.saturating_duration_since(p.started) < p.animation.length)
    }

    /// Forget finished animations
    pub fn clear_finished(&mut self, now: Instant) {
        self.playing
            .retain(|_, p| now.saturating_duration_since(p.started) < p.animation.length);
    }
}

impl AnimationEngine for TerminalAnimator {
    type Animation = Animation;

    fn load(&mut self, resource: AnimationResource) -> Option<Animation> {
        let motion = match resource.name() {
            "slide_in_bottom" => Motion::SlideInBottom,
            "fade_in" => Motion::FadeIn,
            "pop_in" => Motion::PopIn,
            "bounce_in" => Motion::BounceIn,
            _ => return None,
        };
        Some(Animation {
            motion,
            length: ANIMATION_LENGTH,
        })
    }

    fn play(&mut self, view: ToastHandle, animation: Animation) {
        self.playing.insert(
            view,
            Playing {
                animation,
                started: Instant::now(),
            },
        );
    }
}
