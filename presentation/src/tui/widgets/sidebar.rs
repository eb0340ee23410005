//! Sidebar widget — session stats and usage hints
//!
//! Shows the message counter (send attempts), the session timer, and the
//! model label, mirroring what the conversation pane can't.

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct SidebarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> SidebarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn stat_line<'b>(label: &'b str, value: String) -> Line<'b> {
        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    }
}

impl<'a> Widget for SidebarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 {
            return;
        }

        let lines = vec![
            Line::from(Span::styled(
                "Chat Info",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Self::stat_line("Messages: ", self.state.stats.message_count.to_string()),
            Self::stat_line("Time: ", self.state.elapsed_label()),
            Self::stat_line("Model: ", self.state.model_label.clone()),
            Line::from(""),
            Line::from(Span::styled(
                "How to use",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("• i then type your question"),
            Line::from("• Enter to send"),
            Line::from("• Wait for the reply"),
            Line::from("• c clears the chat"),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Information ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
