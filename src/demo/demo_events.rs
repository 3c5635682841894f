use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::{self, Write};
use std::time::{Duration, Instant};

use super::demo_state::DemoApp;

/// Timeout for event polling - allows periodic refresh for toast expiry and animation
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAction {
    Success,
    Error,
    Warning,
    Info,
    Custom,
    Vibrate,
    Preset,
    Loading,
    ToggleTheme,
    Quit,
}

impl DemoAction {
    /// Actions in menu order
    pub const ALL: [DemoAction; 10] = [
        DemoAction::Success,
        DemoAction::Error,
        DemoAction::Warning,
        DemoAction::Info,
        DemoAction::Custom,
        DemoAction::Vibrate,
        DemoAction::Preset,
        DemoAction::Loading,
        DemoAction::ToggleTheme,
        DemoAction::Quit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DemoAction::Success => "1",
            DemoAction::Error => "2",
            DemoAction::Warning => "3",
            DemoAction::Info => "4",
            DemoAction::Custom => "5",
            DemoAction::Vibrate => "6",
            DemoAction::Preset => "7",
            DemoAction::Loading => "8",
            DemoAction::ToggleTheme => "t",
            DemoAction::Quit => "q",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DemoAction::Success => "Success",
            DemoAction::Error => "Error",
            DemoAction::Warning => "Warning",
            DemoAction::Info => "Info",
            DemoAction::Custom => "Custom",
            DemoAction::Vibrate => "Vibrate",
            DemoAction::Preset => "Preset",
            DemoAction::Loading => "Loading",
            DemoAction::ToggleTheme => "Toggle global theme",
            DemoAction::Quit => "Quit",
        }
    }

    pub fn from_key(key: KeyEvent) -> Option<DemoAction> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(DemoAction::Quit);
        }

        match key.code {
            KeyCode::Char('1') => Some(DemoAction::Success),
            KeyCode::Char('2') => Some(DemoAction::Error),
            KeyCode::Char('3') => Some(DemoAction::Warning),
            KeyCode::Char('4') => Some(DemoAction::Info),
            KeyCode::Char('5') => Some(DemoAction::Custom),
            KeyCode::Char('6') => Some(DemoAction::Vibrate),
            KeyCode::Char('7') => Some(DemoAction::Preset),
            KeyCode::Char('8') => Some(DemoAction::Loading),
            KeyCode::Char('t') => Some(DemoAction::ToggleTheme),
            KeyCode::Char('q') | KeyCode::Esc => Some(DemoAction::Quit),
            _ => None,
        }
    }
}

impl<W: Write> DemoApp<W> {
    /// Poll for input, then advance timers
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)?
            && let Event::Key(key_event) = event::read()?
            && key_event.kind == KeyEventKind::Press
        {
            self.handle_key_event(key_event);
        }

        self.tick(Instant::now());
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if let Some(action) = DemoAction::from_key(key) {
            self.perform(action);
        }
    }
}
