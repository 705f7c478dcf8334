//! Transaction form rendering
//!
//! The same form backs the full-screen Add Transaction view and the edit
//! dialog opened from the dashboard.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::forms::{FormField, TransactionForm};
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::input::{render_error, render_selector, render_text_field};

/// Rows needed inside the border to draw a form
pub const FORM_HEIGHT: u16 = 11;

/// Render the edit dialog over the dashboard
pub fn render(frame: &mut Frame, app: &App) {
    let Some(form) = app.edit_form.as_ref() else {
        return;
    };

    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Edit Transaction ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    render_form(frame, inner, form, "Enter Update  Esc Cancel");
}

/// Draw every field of `form` plus a hint line
pub fn render_form(frame: &mut Frame, area: Rect, form: &TransactionForm, submit_hint: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Amount error
            Constraint::Length(1), // Date
            Constraint::Length(1), // Date error
            Constraint::Length(1), // Description
            Constraint::Length(1), // Description error
            Constraint::Length(1), // Type
            Constraint::Length(1), // Category
            Constraint::Length(1), // Category error
            Constraint::Min(0),
            Constraint::Length(1), // Hints
        ])
        .split(area);

    let errors = form.errors();
    let focus = form.focus;

    render_text_field(
        frame,
        rows[0],
        "Amount",
        &form.amount,
        focus == FormField::Amount,
        "0.00",
    );
    render_error(frame, rows[1], errors.amount);

    render_text_field(
        frame,
        rows[2],
        "Date",
        &form.date,
        focus == FormField::Date,
        "YYYY-MM-DD",
    );
    render_error(frame, rows[3], errors.date);

    render_text_field(
        frame,
        rows[4],
        "Description",
        &form.description,
        focus == FormField::Description,
        "What was it for?",
    );
    render_error(frame, rows[5], errors.description);

    render_selector(
        frame,
        rows[6],
        "Type",
        &form.kind.to_string(),
        focus == FormField::Kind,
    );

    let category = form
        .category
        .map(|c| c.name().to_string())
        .unwrap_or_else(|| "Select a category".to_string());
    render_selector(
        frame,
        rows[7],
        "Category",
        &category,
        focus == FormField::Category,
    );
    render_error(frame, rows[8], errors.category);

    let hints = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("←/→", Style::default().fg(Color::Yellow)),
        Span::raw(" Change  "),
        Span::styled(submit_hint.to_string(), Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(hints), rows[10]);
}
