//! Conversation widget — message history, welcome box, thinking indicator

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ConversationWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ConversationWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn welcome_lines(&self) -> Vec<Line<'_>> {
        vec![
            Line::from(Span::styled(
                "Hello!",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Welcome to gemchat. Ask me anything — questions,"),
            Line::from("homework, coding, and more."),
            Line::from(""),
            Line::from(vec![
                Span::styled("Try asking: ", Style::default().fg(Color::DarkGray)),
                Span::raw("\"What is Python?\" or \"Help me with math\""),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press i to start typing, ? for help",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }

    fn format_messages(&self) -> Text<'_> {
        let mut lines: Vec<Line> = Vec::new();

        for msg in &self.state.messages {
            let role_style = Style::default()
                .fg(msg.role.color())
                .add_modifier(Modifier::BOLD);

            lines.push(Line::from(Span::styled(
                format!("{}: ", msg.role.label()),
                role_style,
            )));

            for content_line in msg.content.lines() {
                lines.push(Line::from(format!("  {}", content_line)));
            }
            lines.push(Line::from(""));
        }

        // In-flight indicator below the last message
        if self.state.waiting {
            lines.push(Line::from(Span::styled(
                format!("{} AI is thinking...", self.state.spinner()),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        Text::from(lines)
    }
}

impl<'a> Widget for ConversationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Conversation ")
            .style(Style::default().fg(Color::White));

        // Empty history: show the welcome box instead of a blank pane
        if self.state.messages.is_empty() && !self.state.waiting {
            Paragraph::new(self.welcome_lines())
                .block(block)
                .wrap(Wrap { trim: false })
                .render(area, buf);
            return;
        }

        let text = self.format_messages();
        let visible_height = area.height.saturating_sub(2); // borders
        let content_width = area.width.saturating_sub(2); // borders

        // Paragraph's line_count() uses the same wrapping algorithm as
        // rendering, so the scroll math stays consistent with the output.
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let total_lines = paragraph.line_count(content_width) as u16;

        // scroll_offset=0 means "show bottom"
        let scroll = if total_lines > visible_height {
            let max_scroll = total_lines - visible_height;
            let offset = (self.state.scroll_offset as u16).min(max_scroll);
            max_scroll - offset
        } else {
            0
        };

        paragraph.block(block).scroll((scroll, 0)).render(area, buf);
    }
}
