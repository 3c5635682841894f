//! Toast rendering
//!
//! Draws the presenter's active toasts as a bottom-anchored overlay, newest
//! closest to the bottom edge.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::terminal_animator::{TerminalAnimator, Transform};
use super::terminal_presenter::{ActiveToast, TerminalPresenter};
use crate::theme;
use crate::toast::{IconId, ToastView};
use crate::widgets::popup;

/// dp-equivalent units per terminal row when converting placement offsets
pub const DP_PER_ROW: u16 = 50;

/// Font sizes at or above this render bold
const BOLD_FONT_SIZE: u16 = 18;

const TOAST_HEIGHT: u16 = 3; // 1 line content + 2 borders
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME_MS: u128 = 80;

/// Render every active toast on top of the frame.
///
/// Call after rendering the main UI so toasts appear on top of other content.
pub fn render_toasts(
    frame: &mut Frame,
    presenter: &TerminalPresenter,
    animator: &TerminalAnimator,
) {
    let now = Instant::now();
    let frame_area = frame.area();
    let mut stacked_rows = 0u16;

    for toast in presenter.active().iter().rev() {
        let margin = toast.placement.offset_y / DP_PER_ROW + stacked_rows;
        let line = toast_line(toast, now);
        // Line carries its own padding
        let width = u16::try_from(line.width())
            .unwrap_or(u16::MAX)
            .saturating_add(2);

        let base = popup::bottom_anchored(frame_area, width, TOAST_HEIGHT, margin);

        // Out of room
        if base.width < 5 || base.height < TOAST_HEIGHT {
            break;
        }

        let transform = animator.transform_at(toast.handle, now);
        let area = apply_transform(base, transform, frame_area);
        if area.height < TOAST_HEIGHT {
            stacked_rows += TOAST_HEIGHT;
            continue;
        }

        render_toast(frame, toast, line, area, transform);
        stacked_rows += TOAST_HEIGHT;
    }
}

fn render_toast(
    frame: &mut Frame,
    toast: &ActiveToast,
    line: Line<'static>,
    area: Rect,
    transform: Transform,
) {
    let (bg, fg, border_type) = match &toast.view {
        ToastView::Styled(view) => {
            let border_type = if view.corner_radius > 0 {
                BorderType::Rounded
            } else {
                BorderType::Plain
            };
            (view.background, view.text_color, border_type)
        }
        ToastView::Loader(_) => (
            theme::toast::LOADER_BACKGROUND,
            theme::toast::LOADER_TEXT,
            BorderType::Rounded,
        ),
    };

    let mut style = Style::default().fg(fg).bg(bg);
    if transform.dim {
        style = style.add_modifier(Modifier::DIM);
    }

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(style)
        .style(style);

    let paragraph = Paragraph::new(line).style(style).block(block);
    frame.render_widget(paragraph, area);
}

fn toast_line(toast: &ActiveToast, now: Instant) -> Line<'static> {
    match &toast.view {
        ToastView::Styled(view) => {
            let mut text_style = Style::default();
            if view.font_size >= BOLD_FONT_SIZE {
                text_style = text_style.add_modifier(Modifier::BOLD);
            }
            let mut spans = vec![Span::raw(" ")];
            if let Some(icon) = view.icon {
                spans.push(Span::raw(icon_glyph(icon)));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(view.message.clone(), text_style));
            spans.push(Span::raw(" "));
            Line::from(spans)
        }
        ToastView::Loader(view) => {
            let elapsed = now.saturating_duration_since(toast.shown_at).as_millis();
            let frame_index = (elapsed / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len();
            Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    SPINNER_FRAMES[frame_index],
                    Style::default().fg(theme::toast::LOADER_SPINNER),
                ),
                Span::raw(format!(" {} ", view.message)),
            ])
        }
    }
}

fn icon_glyph(icon: IconId) -> &'static str {
    match icon {
        IconId::SUCCESS => "✔",
        IconId::ERROR => "✖",
        IconId::WARNING => "⚠",
        IconId::INFO => "ℹ",
        _ => "•",
    }
}

/// Shift down and narrow around the center, clipped to the frame
fn apply_transform(base: Rect, transform: Transform, frame_area: Rect) -> Rect {
    let width = (base.width as u32 * transform.width_percent as u32 / 100) as u16;
    let x = base.x + (base.width - width.min(base.width)) / 2;
    let y = base.y.saturating_add(transform.y_shift);
    let bottom = frame_area.y + frame_area.height;
    let height = base.height.min(bottom.saturating_sub(y));

    Rect {
        x,
        y,
        width: width.min(base.width),
        height,
    }
}

#[cfg(test)]
#[path = "terminal_render_tests.rs"]
mod terminal_render_tests;
