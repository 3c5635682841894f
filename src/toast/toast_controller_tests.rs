//! Tests for toast_controller

use super::*;
use crate::test_utils::test_helpers::{
    RecordingAnimator, RecordingHaptics, RecordingPresenter, test_controller,
};
use crate::theme::palette;
use crate::toast::IconId;
use proptest::prelude::*;
use ratatui::style::Color;

fn dark_theme() -> ToastTheme {
    ToastTheme::new()
        .with_background(Color::Rgb(10, 10, 10))
        .with_text(Color::Rgb(200, 200, 0))
}

// ==================== Direct presets ====================

#[test]
fn test_direct_presets_use_fixed_pairs() {
    let mut controller = test_controller();

    controller.success("ok");
    let view = controller.presenter().last_styled();
    assert_eq!(view.background, palette::SUCCESS);
    assert_eq!(view.icon, Some(IconId::SUCCESS));

    controller.error("bad");
    let view = controller.presenter().last_styled();
    assert_eq!(view.background, palette::ERROR);
    assert_eq!(view.icon, Some(IconId::ERROR));

    controller.warning("careful");
    let view = controller.presenter().last_styled();
    assert_eq!(view.background, palette::WARNING);
    assert_eq!(view.icon, Some(IconId::WARNING));

    controller.info("fyi");
    let view = controller.presenter().last_styled();
    assert_eq!(view.background, palette::INFO);
    assert_eq!(view.icon, Some(IconId::INFO));
}

#[test]
fn test_direct_presets_ignore_global_theme() {
    let mut controller = test_controller();
    controller.set_global_theme(Some(dark_theme()));

    controller.success("ok");
    let view = controller.presenter().last_styled();
    assert_eq!(view.background, palette::SUCCESS);
    assert_eq!(view.text_color, palette::WHITE);
}

#[test]
fn test_direct_presets_are_short_bottom_and_unanimated() {
    let mut controller = test_controller();
    controller.warning("careful");

    let call = controller.presenter().last();
    assert_eq!(call.length, DisplayLength::Short);
    assert_eq!(call.placement, Placement::bottom());
    assert_eq!(call.view.message(), "careful");
    assert!(controller.animator().played.is_empty());
    assert!(controller.pending_cancellations().is_empty());
    assert!(controller.haptics().unwrap().pulses.is_empty());
}

// ==================== preset() ====================

#[test]
fn test_preset_matches_direct_pairs() {
    for toast_type in ToastType::ALL {
        let mut controller = test_controller();
        let _direct = match toast_type {
            ToastType::Success => controller.success("msg"),
            ToastType::Error => controller.error("msg"),
            ToastType::Warning => controller.warning("msg"),
            ToastType::Info => controller.info("msg"),
        };
        let direct_view = controller.presenter().last_styled().clone();

        controller.preset(toast_type, "msg");
        let preset_view = controller.presenter().last_styled();

        assert_eq!(preset_view.background, direct_view.background);
        assert_eq!(preset_view.icon, direct_view.icon);
    }
}

#[test]
fn test_preset_uses_long_duration_and_slide_in() {
    let mut controller = test_controller();
    let handle = controller.preset(ToastType::Success, "Preset: Data saved!");

    let pending = controller.pending_cancellations();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].handle(), handle);
    assert_eq!(pending[0].delay(), PRESET_DURATION);

    let played = &controller.animator().played;
    assert_eq!(played.len(), 1);
    assert_eq!(played[0].0, handle);
    assert_eq!(played[0].1.name(), "slide_in_bottom");
}

#[test]
fn test_preset_default_branch_is_info() {
    let mut controller = test_controller();
    controller.preset(ToastType::default(), "fyi");
    let view = controller.presenter().last_styled();
    assert_eq!(view.background, palette::INFO);
    assert_eq!(view.icon, Some(IconId::INFO));
}

#[test]
fn test_preset_takes_text_color_from_global_theme() {
    let mut controller = test_controller();
    controller.set_global_theme(Some(dark_theme()));

    controller.preset(ToastType::Error, "bad");
    let view = controller.presenter().last_styled();
    assert_eq!(view.background, palette::ERROR);
    assert_eq!(view.text_color, Color::Rgb(200, 200, 0));
}

// ==================== custom() / show ====================

#[test]
fn test_custom_without_theme_resolves_defaults() {
    let mut controller = test_controller();
    controller.custom().message("plain").show(&mut controller);

    let view = controller.presenter().last_styled();
    assert_eq!(view.background, palette::DARK_GRAY);
    assert_eq!(view.text_color, palette::WHITE);
    assert_eq!(view.icon, None);
}

#[test]
fn test_custom_captures_theme_at_construction() {
    let mut controller = test_controller();
    controller.set_global_theme(Some(dark_theme()));
    let builder = controller.custom();

    // Clearing the theme afterwards does not affect the existing builder
    controller.set_global_theme(None);
    builder.show(&mut controller);

    let view = controller.presenter().last_styled();
    assert_eq!(view.background, Color::Rgb(10, 10, 10));
    assert_eq!(view.text_color, Color::Rgb(200, 200, 0));
}

#[test]
fn test_custom_override_beats_theme() {
    let mut controller = test_controller();
    controller.set_global_theme(Some(dark_theme()));

    controller
        .custom()
        .background_color(Color::Rgb(0x62, 0x00, 0xEA))
        .show(&mut controller);

    let view = controller.presenter().last_styled();
    assert_eq!(view.background, Color::Rgb(0x62, 0x00, 0xEA));
}

#[test]
fn test_show_renders_short_at_bottom() {
    let mut controller = test_controller();
    controller
        .custom()
        .duration(Duration::from_millis(3000))
        .show(&mut controller);

    let call = controller.presenter().last();
    assert_eq!(call.length, DisplayLength::Short);
    assert_eq!(call.placement, Placement::bottom());
}

#[test]
fn test_show_twice_renders_two_views() {
    let mut controller = test_controller();
    let builder = controller.custom().message("again");

    let first = builder.show(&mut controller);
    let second = builder.show(&mut controller);

    assert_ne!(first, second);
    let rendered = &controller.presenter().rendered;
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].view, rendered[1].view);
}

#[test]
fn test_animation_played_for_each_type() {
    for animation in AnimationType::ALL {
        let mut controller = test_controller();
        let handle = controller.custom().animation(animation).show(&mut controller);

        let played = &controller.animator().played;
        assert_eq!(played.len(), 1);
        assert_eq!(played[0].0, handle);
        assert_eq!(Some(played[0].1), animation.resource());
    }
}

#[test]
fn test_unknown_animation_resource_is_silent_noop() {
    let animator = RecordingAnimator {
        knows_resources: false,
        ..Default::default()
    };
    let mut controller = ToastController::new(RecordingPresenter::default(), animator);

    controller
        .custom()
        .animation(AnimationType::BounceIn)
        .show(&mut controller);

    assert_eq!(controller.animator().loaded.len(), 1);
    assert!(controller.animator().played.is_empty());
    assert_eq!(controller.presenter().rendered.len(), 1);
}

// ==================== Deferred cancellation ====================

#[test]
fn test_short_duration_schedules_nothing() {
    let mut controller = test_controller();
    controller
        .custom()
        .duration(Duration::from_millis(2000))
        .show(&mut controller);
    assert!(controller.pending_cancellations().is_empty());
}

#[test]
fn test_long_duration_schedules_one_cancel() {
    let mut controller = test_controller();
    let before = Instant::now();
    let handle = controller
        .custom()
        .duration(Duration::from_millis(3000))
        .show(&mut controller);
    let after = Instant::now();

    let pending = controller.pending_cancellations();
    assert_eq!(pending.len(), 1);
    let cancel = pending[0];
    assert_eq!(cancel.handle(), handle);
    assert_eq!(cancel.delay(), Duration::from_millis(3000));
    assert!(cancel.due() >= before + Duration::from_millis(3000));
    assert!(cancel.due() <= after + Duration::from_millis(3000));
}

#[test]
fn test_long_duration_is_held_by_presenter() {
    let mut controller = test_controller();
    controller
        .custom()
        .duration(Duration::from_millis(2000))
        .show(&mut controller);
    let handle = controller
        .custom()
        .duration(Duration::from_millis(3000))
        .show(&mut controller);

    assert_eq!(
        controller.presenter().held,
        vec![(handle, Duration::from_millis(3000))]
    );
}

#[test]
fn test_unrepresentable_duration_does_not_panic() {
    let mut controller = test_controller();
    let handle = controller
        .custom()
        .message("forever")
        .duration(Duration::MAX)
        .show(&mut controller);

    assert_eq!(controller.presenter().last().handle, handle);
    assert_eq!(controller.presenter().held, vec![(handle, Duration::MAX)]);
    // Never due, so nothing is queued
    assert!(controller.pending_cancellations().is_empty());
    assert_eq!(controller.tick(Instant::now() + Duration::from_secs(86_400)), 0);
}

#[test]
fn test_tick_fires_only_when_due() {
    let mut controller = test_controller();
    let handle = controller
        .custom()
        .duration(Duration::from_millis(3000))
        .show(&mut controller);
    let due = controller.pending_cancellations()[0].due();

    assert_eq!(controller.tick(due - Duration::from_millis(1)), 0);
    assert!(controller.presenter().cancelled.is_empty());

    assert_eq!(controller.tick(due), 1);
    assert_eq!(controller.presenter().cancelled, vec![handle]);
    assert!(controller.pending_cancellations().is_empty());

    // One-shot: nothing fires again
    assert_eq!(controller.tick(due + Duration::from_secs(10)), 0);
    assert_eq!(controller.presenter().cancelled.len(), 1);
}

#[test]
fn test_tick_fires_in_due_order_subset() {
    let mut controller = test_controller();
    let short = controller
        .custom()
        .duration(Duration::from_millis(2500))
        .show(&mut controller);
    let long = controller
        .custom()
        .duration(Duration::from_millis(9000))
        .show(&mut controller);

    let short_due = controller.pending_cancellations()[0].due();
    assert_eq!(controller.tick(short_due), 1);
    assert_eq!(controller.presenter().cancelled, vec![short]);
    assert_eq!(controller.pending_cancellations().len(), 1);
    assert_eq!(controller.pending_cancellations()[0].handle(), long);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Only durations above the short display length schedule a cancellation
    #[test]
    fn prop_duration_threshold(millis in 0u64..10_000) {
        let mut controller = test_controller();
        controller
            .custom()
            .duration(Duration::from_millis(millis))
            .show(&mut controller);

        let pending = controller.pending_cancellations();
        if millis > 2000 {
            prop_assert_eq!(pending.len(), 1);
            prop_assert_eq!(pending[0].delay(), Duration::from_millis(millis));
        } else {
            prop_assert!(pending.is_empty());
        }
    }
}

// ==================== Vibration ====================

#[test]
fn test_vibrate_issues_one_pulse() {
    let mut controller = test_controller();
    controller.custom().vibrate(true).show(&mut controller);
    assert_eq!(
        controller.haptics().unwrap().pulses,
        vec![Duration::from_millis(100)]
    );
}

#[test]
fn test_no_vibrate_issues_no_pulse() {
    let mut controller = test_controller();
    controller.custom().vibrate(false).show(&mut controller);
    assert!(controller.haptics().unwrap().pulses.is_empty());
}

#[test]
fn test_incapable_haptics_issue_no_pulse() {
    let mut controller =
        ToastController::new(RecordingPresenter::default(), RecordingAnimator::default())
            .with_haptics(RecordingHaptics::default());
    controller.custom().vibrate(true).show(&mut controller);
    assert!(controller.haptics().unwrap().pulses.is_empty());
}

#[test]
fn test_missing_haptics_is_tolerated() {
    let mut controller =
        ToastController::new(RecordingPresenter::default(), RecordingAnimator::default());
    controller.custom().vibrate(true).show(&mut controller);
    assert!(controller.haptics().is_none());
    assert_eq!(controller.presenter().rendered.len(), 1);
}

// ==================== Loader ====================

#[test]
fn test_show_loader_renders_long_loader_view() {
    let mut controller = test_controller();
    let handle = controller.show_loader("Uploading...");

    let call = controller.presenter().last();
    assert_eq!(call.handle, handle);
    assert_eq!(call.length, DisplayLength::Long);
    assert_eq!(call.placement, Placement::bottom());
    assert!(call.view.is_loader());
    assert_eq!(call.view.message(), "Uploading...");
    assert_eq!(controller.active_loader(), Some(handle));
}

#[test]
fn test_dismiss_loader_cancels_and_clears() {
    let mut controller = test_controller();
    let handle = controller.show_loader("Uploading...");

    controller.dismiss_loader();
    assert_eq!(controller.presenter().cancelled, vec![handle]);
    assert_eq!(controller.active_loader(), None);
}

#[test]
fn test_second_loader_replaces_first() {
    let mut controller = test_controller();
    let first = controller.show_loader("one");
    let second = controller.show_loader("two");

    // First loader is orphaned, not cancelled
    assert!(controller.presenter().cancelled.is_empty());
    assert_eq!(controller.active_loader(), Some(second));

    controller.dismiss_loader();
    assert_eq!(controller.presenter().cancelled, vec![second]);
    assert!(!controller.presenter().cancelled.contains(&first));
}

#[test]
fn test_dismiss_without_loader_is_noop() {
    let mut controller = test_controller();
    controller.dismiss_loader();
    controller.dismiss_loader();
    assert!(controller.presenter().cancelled.is_empty());
    assert_eq!(controller.active_loader(), None);
}

// ==================== Global theme ====================

#[test]
fn test_global_theme_set_get_clear() {
    let mut controller = test_controller();
    assert!(controller.global_theme().is_none());

    controller.set_global_theme(Some(dark_theme()));
    assert_eq!(controller.global_theme(), Some(&dark_theme()));

    let replacement = ToastTheme::new().with_font_size(22);
    controller.set_global_theme(Some(replacement));
    assert_eq!(controller.global_theme(), Some(&replacement));

    controller.set_global_theme(None);
    assert!(controller.global_theme().is_none());
}
