use std::io::{Stdout, Write};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::terminal::{TerminalAnimator, TerminalBell, TerminalPresenter};
use crate::theme;
use crate::toast::{AnimationType, IconId, ToastController, ToastTheme, ToastType};

use super::demo_events::DemoAction;

/// Time the loader demo "uploads" before finishing
pub const LOADER_DEMO_DELAY: Duration = Duration::from_secs(3);

pub type DemoController<W = Stdout> =
    ToastController<TerminalPresenter, TerminalAnimator, TerminalBell<W>>;

pub struct DemoApp<W: Write = Stdout> {
    pub controller: DemoController<W>,
    /// Theme from the config file, toggled on and off with `t`
    configured_theme: ToastTheme,
    loader_done_at: Option<Instant>,
    should_quit: bool,
}

impl DemoApp<Stdout> {
    pub fn new(config: &Config) -> Self {
        Self::with_bell(config, TerminalBell::new(config.haptics.bell))
    }
}

impl<W: Write> DemoApp<W> {
    pub fn with_bell(config: &Config, bell: TerminalBell<W>) -> Self {
        let mut controller = ToastController::new(TerminalPresenter::new(), TerminalAnimator::new())
            .with_haptics(bell);

        let configured = config.toast_theme();
        if configured.is_some() {
            controller.set_global_theme(configured);
        }

        Self {
            controller,
            configured_theme: configured.unwrap_or_default(),
            loader_done_at: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn theme_enabled(&self) -> bool {
        self.controller.global_theme().is_some()
    }

    pub fn loader_pending(&self) -> bool {
        self.loader_done_at.is_some()
    }

    pub fn perform(&mut self, action: DemoAction) {
        #[cfg(debug_assertions)]
        log::debug!("Demo action: {:?}", action);

        match action {
            DemoAction::Success => {
                self.controller.success("Success Toast!");
            }
            DemoAction::Error => {
                self.controller.error("Something went wrong!");
            }
            DemoAction::Warning => {
                self.controller.warning("Warning Toast!");
            }
            DemoAction::Info => {
                self.controller.info("Info Toast!");
            }
            DemoAction::Custom => {
                let builder = self
                    .controller
                    .custom()
                    .message("🚀 Custom Toast Working!")
                    .background_color(theme::demo::CUSTOM_BACKGROUND)
                    .text_color(theme::palette::WHITE)
                    .icon(IconId::SUCCESS)
                    .animation(AnimationType::SlideInBottom)
                    .duration(Duration::from_millis(3000));
                builder.show(&mut self.controller);
            }
            DemoAction::Vibrate => {
                let builder = self
                    .controller
                    .custom()
                    .message("✅ Vibrate Toast")
                    .background_color(theme::demo::VIBRATE_BACKGROUND)
                    .text_color(theme::palette::WHITE)
                    .icon(IconId::SUCCESS)
                    .animation(AnimationType::FadeIn)
                    .duration(Duration::from_millis(2500))
                    .vibrate(true);
                builder.show(&mut self.controller);
            }
            DemoAction::Preset => {
                self.controller.preset(ToastType::Success, "Preset: Data saved!");
            }
            DemoAction::Loading => {
                self.controller.show_loader("Uploading...");
                self.loader_done_at = Some(Instant::now() + LOADER_DEMO_DELAY);
            }
            DemoAction::ToggleTheme => {
                let next = if self.theme_enabled() {
                    None
                } else {
                    Some(self.configured_theme)
                };
                self.controller.set_global_theme(next);
            }
            DemoAction::Quit => self.should_quit = true,
        }
    }

    /// Advance timers: deferred cancels, expiry, animations, the loader demo
    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
        self.controller.presenter_mut().clear_expired(now);
        self.controller.animator_mut().clear_finished(now);

        if let Some(done_at) = self.loader_done_at
            && now >= done_at
        {
            self.loader_done_at = None;
            self.controller.dismiss_loader();
            self.controller.preset(ToastType::Success, "Upload complete!");
        }
    }
}

#[cfg(test)]
#[path = "demo_state_tests.rs"]
mod demo_state_tests;
