//! Dashboard view
//!
//! Filter bar, summary cards, the three charts and the filtered
//! transaction list.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::{format_date, truncate, NO_TRANSACTIONS};
use crate::models::{month_name, FilterState, Money, Selection};
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;
use crate::tui::widgets::charts::{
    budget_lines, category_lines, inner_width, monthly_lines, render_chart,
};

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = DashboardLayout::new(area);

    render_filter_bar(frame, app.ledger.filter(), layout.filter_bar);
    render_cards(frame, app, &layout.cards);
    render_charts(frame, app, &layout.charts);
    render_transactions(frame, app, layout.transactions);
}

/// Month selector text: "All" or the month's name
pub fn month_label(month: Selection<u32>) -> String {
    match month {
        Selection::All => "All".to_string(),
        Selection::Only(m) => month_name(m).to_string(),
    }
}

fn selector(key: &'static str, label: &'static str, value: String) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("{} ", label), Style::default().fg(Color::Yellow)),
        Span::styled(
            value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" [{}]   ", key), Style::default().fg(Color::DarkGray)),
    ]
}

fn render_filter_bar(frame: &mut Frame, filter: FilterState, area: Rect) {
    let mut spans = Vec::new();
    spans.extend(selector("m/M", "Month:", month_label(filter.month)));
    spans.extend(selector("y/Y", "Year:", filter.year.to_string()));
    spans.extend(selector("c/C", "Category:", filter.category.to_string()));
    spans.push(Span::styled("r: reset", Style::default().fg(Color::DarkGray)));

    let block = Block::default()
        .title(" Filters ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn card(frame: &mut Frame, area: Rect, title: &str, value: Money, symbol: &str, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let text = Line::from(Span::styled(
        value.format_with_symbol(symbol),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .centered();

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_cards(frame: &mut Frame, app: &App, areas: &[Rect; 3]) {
    let summary = app.ledger.snapshot().summary;
    let symbol = app.ledger.currency_symbol();

    let balance_color = if summary.balance.is_negative() {
        Color::Red
    } else {
        Color::Cyan
    };
    card(frame, areas[0], "Total Balance", summary.balance, symbol, balance_color);
    card(frame, areas[1], "Total Income", summary.income, symbol, Color::Green);
    card(frame, areas[2], "Total Expenses", summary.expenses, symbol, Color::Red);
}

fn render_charts(frame: &mut Frame, app: &App, areas: &[Rect; 3]) {
    let snapshot = app.ledger.snapshot();
    let symbol = app.ledger.currency_symbol();

    render_chart(
        frame,
        areas[0],
        "Monthly Overview",
        monthly_lines(&snapshot.monthly, symbol, inner_width(areas[0])),
    );
    render_chart(
        frame,
        areas[1],
        "Spending by Category",
        category_lines(&snapshot.categories, inner_width(areas[1])),
    );
    render_chart(
        frame,
        areas[2],
        &format!(
            "Budget vs. Actual ({})",
            snapshot.budget_comparison.period.label()
        ),
        budget_lines(&snapshot.budget_comparison, inner_width(areas[2])),
    );
}

fn render_transactions(frame: &mut Frame, app: &mut App, area: Rect) {
    let snapshot = app.ledger.snapshot();

    let block = Block::default()
        .title(format!(" Transactions ({}) ", snapshot.transactions.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if snapshot.transactions.is_empty() {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                NO_TRANSACTIONS,
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
            Line::from(Span::styled(
                "Press a to add one",
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        ];
        frame.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let symbol = app.ledger.currency_symbol().to_string();
    let widths = [
        Constraint::Length(12), // Date
        Constraint::Min(16),    // Description
        Constraint::Length(15), // Category
        Constraint::Length(8),  // Type
        Constraint::Length(14), // Amount
    ];

    let header = Row::new(vec!["Date", "Description", "Category", "Type", "Amount"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = snapshot
        .transactions
        .iter()
        .map(|txn| {
            let color = if txn.is_income() {
                Color::Green
            } else {
                Color::Red
            };
            Row::new(vec![
                Cell::from(format_date(txn.date, &app.date_format)),
                Cell::from(truncate(&txn.description, 40)),
                Cell::from(txn.category.name()),
                Cell::from(txn.kind.to_string()),
                Cell::from(txn.format_amount(&symbol)).style(Style::default().fg(color)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}
