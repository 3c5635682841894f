use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::io::Write;

use super::demo_events::DemoAction;
use super::demo_state::DemoApp;
use crate::terminal::render_toasts;
use crate::theme;
use crate::widgets::popup;

const MENU_WIDTH: u16 = 40;

impl<W: Write> DemoApp<W> {
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::demo::BACKGROUND)),
            area,
        );

        let menu_height = DemoAction::ALL.len() as u16 + 4;
        let menu_area = popup::centered_popup(area, MENU_WIDTH, menu_height);
        // Keep the menu clear of the bottom toast lane
        let menu_area = Rect {
            y: menu_area.y.saturating_sub(menu_height / 2),
            ..menu_area
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::demo::BORDER))
            .title(Span::styled(
                " Styled Toast ",
                Style::default()
                    .fg(theme::demo::TITLE)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(menu_area);
        frame.render_widget(block, menu_area);

        let [list_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let lines: Vec<Line> = DemoAction::ALL
            .iter()
            .map(|action| {
                Line::from(vec![
                    Span::styled(
                        format!(" [{}] ", action.key()),
                        Style::default().fg(theme::demo::KEY),
                    ),
                    Span::styled(action.label(), Style::default().fg(theme::demo::LABEL)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), list_area);

        let (status, color) = if self.theme_enabled() {
            ("on", theme::demo::THEME_ON)
        } else {
            ("off", theme::demo::THEME_OFF)
        };
        let status_line = Line::from(vec![
            Span::styled(" Global theme: ", Style::default().fg(theme::demo::HINT)),
            Span::styled(status, Style::default().fg(color)),
        ]);
        frame.render_widget(Paragraph::new(status_line), status_area);

        render_toasts(
            frame,
            self.controller.presenter(),
            self.controller.animator(),
        );
    }
}
