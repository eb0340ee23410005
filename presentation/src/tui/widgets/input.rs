//! Input widget — single-line message box with mode-aware prompt

use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (prompt, text, cursor_pos, color, active) = match self.state.mode {
            InputMode::Insert => (
                "chat> ",
                &self.state.input,
                self.state.cursor_pos,
                Color::Green,
                true,
            ),
            InputMode::Command => (
                ":",
                &self.state.command_input,
                self.state.command_cursor,
                Color::Yellow,
                true,
            ),
            InputMode::Normal => (
                "chat> ",
                &self.state.input,
                self.state.cursor_pos,
                Color::DarkGray,
                false,
            ),
        };

        // A send in flight makes the box inert regardless of mode
        let active = active && !self.state.waiting;

        let title = if self.state.waiting {
            " Input (waiting for reply) "
        } else {
            " Input "
        };

        let border_style = if active {
            Style::default().fg(color)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans = vec![Span::styled(
            prompt,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )];

        if active {
            let cursor_style = Style::default().fg(Color::Black).bg(color);
            let clamped = cursor_pos.min(text.len());
            let before = &text[..clamped];
            let after = &text[clamped..];

            spans.push(Span::raw(before.to_string()));
            if after.is_empty() {
                // Cursor at end of line — block cursor on a space
                spans.push(Span::styled(" ", cursor_style));
            } else {
                let ch_len = after.chars().next().map(|c| c.len_utf8()).unwrap_or(1);
                spans.push(Span::styled(after[..ch_len].to_string(), cursor_style));
                if ch_len < after.len() {
                    spans.push(Span::raw(after[ch_len..].to_string()));
                }
            }
        } else {
            let placeholder = if text.is_empty() && !self.state.waiting {
                "Type your message here..."
            } else {
                text.as_str()
            };
            spans.push(Span::styled(
                placeholder.to_string(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(border_style);

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
