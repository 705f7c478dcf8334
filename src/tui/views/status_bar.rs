//! Status bar view
//!
//! Shows the selected period, the filtered balance, any overspent budgets
//! and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.ledger.snapshot();
    let balance = snapshot.summary.balance;
    let symbol = app.ledger.currency_symbol();

    let balance_color = if balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", snapshot.budget_comparison.period.label()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("│ "),
        Span::styled("Bal: ", Style::default().fg(Color::White)),
        Span::styled(
            balance.format_with_symbol(symbol),
            Style::default()
                .fg(balance_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let over_budget = snapshot.budget_comparison.over_budget().count();
    if over_budget > 0 {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("{} over budget", over_budget),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let hints = match app.active_view {
        ActiveView::Dashboard => " a:Add  b:Budget  ?:Help  q:Quit ",
        ActiveView::AddTransaction => " Enter:Add  Esc:Dashboard ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
