//! Terminal bell as a haptic pulse

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crate::platform::HapticService;

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell for each pulse. The duration is ignored; a bell has
/// no length.
#[derive(Debug)]
pub struct TerminalBell<W: Write = Stdout> {
    enabled: bool,
    out: W,
    rung: usize,
}

impl TerminalBell<Stdout> {
    pub fn new(enabled: bool) -> Self {
        Self::with_writer(enabled, io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn with_writer(enabled: bool, out: W) -> Self {
        Self {
            enabled,
            out,
            rung: 0,
        }
    }

    /// Number of bells rung so far
    pub fn rung(&self) -> usize {
        self.rung
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> HapticService for TerminalBell<W> {
    fn has_vibrator(&self) -> bool {
        self.enabled
    }

    fn vibrate(&mut self, _duration: Duration) {
        // A failed bell is not worth interrupting the UI for
        if let Err(_e) = self.out.write_all(BEL).and_then(|_| self.out.flush()) {
            #[cfg(debug_assertions)]
            log::debug!("Failed to ring terminal bell: {}", _e);
            return;
        }
        self.rung += 1;
    }
}
