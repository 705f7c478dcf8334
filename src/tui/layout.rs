//! Layout definitions for the TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level regions: content above a one-line status bar
pub struct AppLayout {
    pub main: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        Self {
            main: vertical[0],
            status_bar: vertical[1],
        }
    }
}

/// Regions of the dashboard view
pub struct DashboardLayout {
    /// Month / year / category selectors
    pub filter_bar: Rect,
    /// Balance, income and expense cards
    pub cards: [Rect; 3],
    /// Monthly, category and budget charts
    pub charts: [Rect; 3],
    /// Filtered transaction list
    pub transactions: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Filter bar
                Constraint::Length(4),  // Summary cards
                Constraint::Length(10), // Charts
                Constraint::Min(5),     // Transactions
            ])
            .split(area);

        let thirds = [
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ];
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(thirds)
            .split(rows[1]);
        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(thirds)
            .split(rows[2]);

        Self {
            filter_bar: rows[0],
            cards: [cards[0], cards[1], cards[2]],
            charts: [charts[0], charts[1], charts[2]],
            transactions: rows[3],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
