//! Resolved views handed to a `Presenter`

use ratatui::style::Color;
use std::time::Duration;

use super::toast_kind::IconId;

/// Vertical offset from the anchored edge, in dp-equivalent units
pub const BOTTOM_OFFSET: u16 = 150;

/// Identifier of one rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastHandle(u64);

impl ToastHandle {
    /// Creates a new unique handle.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Where a view sits: anchored to the bottom edge, lifted by `offset_y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub offset_y: u16,
}

impl Placement {
    /// Bottom of the screen, lifted by `BOTTOM_OFFSET`
    pub const fn bottom() -> Self {
        Self {
            offset_y: BOTTOM_OFFSET,
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::bottom()
    }
}

/// Platform display-length class requested when rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayLength {
    #[default]
    Short,
    Long,
}

impl DisplayLength {
    /// How long the presenter keeps a view of this class on screen
    pub const fn duration(self) -> Duration {
        match self {
            DisplayLength::Short => Duration::from_millis(2000),
            DisplayLength::Long => Duration::from_millis(3500),
        }
    }
}

/// A fully resolved styled toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledView {
    pub message: String,
    pub background: Color,
    pub text_color: Color,
    /// `None` hides the icon element
    pub icon: Option<IconId>,
    /// Reserved; always `false` for now
    pub action_visible: bool,
    pub font_size: u16,
    pub corner_radius: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderView {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastView {
    Styled(StyledView),
    Loader(LoaderView),
}

impl ToastView {
    pub fn message(&self) -> &str {
        match self {
            ToastView::Styled(view) => &view.message,
            ToastView::Loader(view) => &view.message,
        }
    }

    pub fn as_styled(&self) -> Option<&StyledView> {
        match self {
            ToastView::Styled(view) => Some(view),
            ToastView::Loader(_) => None,
        }
    }

    pub fn is_loader(&self) -> bool {
        matches!(self, ToastView::Loader(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique() {
        let a = ToastHandle::new();
        let b = ToastHandle::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_bottom_placement() {
        let placement = Placement::bottom();
        assert_eq!(placement.offset_y, 150);
        assert_eq!(Placement::default(), placement);
    }

    #[test]
    fn test_display_lengths() {
        assert_eq!(DisplayLength::Short.duration(), Duration::from_millis(2000));
        assert_eq!(DisplayLength::Long.duration(), Duration::from_millis(3500));
    }

    #[test]
    fn test_view_message_accessor() {
        let loader = ToastView::Loader(LoaderView {
            message: "Uploading...".to_string(),
        });
        assert_eq!(loader.message(), "Uploading...");
        assert!(loader.is_loader());
        assert!(loader.as_styled().is_none());
    }
}
