//! TUI widgets — ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Conversation (70%) ───┬── Sidebar (30%) ───────┤
//! ├── Input (3) ────────────┴────────────────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod conversation;
pub mod header;
pub mod input;
pub mod sidebar;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub conversation: Rect,
    pub sidebar: Rect,
    pub input: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    /// Sidebar is hidden below this terminal width
    const SIDEBAR_MIN_WIDTH: u16 = 60;

    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        // Narrow terminal: give the conversation the full width
        let (conversation, sidebar) = if area.width < Self::SIDEBAR_MIN_WIDTH {
            (rows[1], Rect::new(rows[1].right(), rows[1].y, 0, 0))
        } else {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
                .split(rows[1]);
            (body[0], body[1])
        };

        Self {
            header: rows[0],
            conversation,
            sidebar,
            input: rows[2],
            status_bar: rows[3],
        }
    }

    /// Centered overlay area, sized as a percentage of the frame
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vertical[1]);

        horizontal[1]
    }
}
