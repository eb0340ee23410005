//! Header widget — shows the model and whether a reply is pending

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status_text = if self.state.waiting {
            "Thinking..."
        } else {
            "Ready"
        };
        let status_color = if self.state.waiting {
            Color::Yellow
        } else {
            Color::Green
        };

        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(status_color)),
            Span::styled(
                "Chat",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(&self.state.model_name, Style::default().fg(Color::White)),
            Span::raw(" | "),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" gemchat ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
