//! Budget dialog
//!
//! Sets the limit for one category in the period the filter shows.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::{render_error, render_selector, render_text_field};

pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(56, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Set Budget ")
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Period
            Constraint::Length(1),
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Error
            Constraint::Min(0),
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let form = &app.budget_form;
    let period = app.ledger.filter().period();

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("For: ", Style::default().fg(Color::Yellow)),
            Span::raw(period.label()),
        ])),
        rows[0],
    );

    let category = form
        .category
        .map(|c| c.name().to_string())
        .unwrap_or_else(|| "Select a category".to_string());
    render_selector(frame, rows[2], "Category", &category, false);
    render_text_field(frame, rows[3], "Limit", &form.amount, true, "0.00");
    render_error(frame, rows[4], form.error());

    let hints = Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Category  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" Save  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), rows[6]);
}
