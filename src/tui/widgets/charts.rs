//! Text bar charts
//!
//! Each chart is built from one snapshot series and falls back to a
//! placeholder when the series is empty. Line builders are kept separate
//! from rendering so the chart content can be checked without a terminal.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::display::{
    format_bar, format_optional_percentage, truncate, NO_BUDGET_DATA, NO_CATEGORY_DATA,
    NO_MONTHLY_DATA,
};
use crate::reports::{BudgetComparison, CategoryBreakdown, MonthlyReport};

const INCOME_COLOR: Color = Color::Green;
const EXPENSE_COLOR: Color = Color::Red;

fn placeholder(message: &'static str, hint: &'static str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))).centered(),
    ]
}

/// Income and expense bars per month, oldest first
pub fn monthly_lines(report: &MonthlyReport, symbol: &str, width: usize) -> Vec<Line<'static>> {
    if report.is_empty() {
        return placeholder(
            NO_MONTHLY_DATA,
            "Add some transactions to see your monthly overview",
        );
    }

    // "Jan 2024 " then two bars separated by a space
    let bar_width = (width.saturating_sub(10) / 2).max(1);
    let max = report.max_value();

    let mut lines = vec![Line::from(vec![
        Span::styled("■ Income ", Style::default().fg(INCOME_COLOR)),
        Span::styled("■ Expenses", Style::default().fg(EXPENSE_COLOR)),
    ])];

    for month in &report.months {
        lines.push(Line::from(vec![
            Span::raw(format!("{:<9}", month.label)),
            Span::styled(
                format_bar(month.income, max, bar_width),
                Style::default().fg(INCOME_COLOR),
            ),
            Span::raw(" "),
            Span::styled(
                format_bar(month.expenses, max, bar_width),
                Style::default().fg(EXPENSE_COLOR),
            ),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled(
            format!("In {} ", report.total_income.format_with_symbol(symbol)),
            Style::default().fg(INCOME_COLOR),
        ),
        Span::styled(
            format!("Out {}", report.total_expenses.format_with_symbol(symbol)),
            Style::default().fg(EXPENSE_COLOR),
        ),
    ]));
    lines
}

/// Expense share per category, largest first
pub fn category_lines(breakdown: &CategoryBreakdown, width: usize) -> Vec<Line<'static>> {
    if breakdown.is_empty() {
        return placeholder(NO_CATEGORY_DATA, "Expenses will be grouped here");
    }

    // Name, bar, then a right-aligned percentage
    let bar_width = width.saturating_sub(14 + 6).max(1);

    breakdown
        .categories
        .iter()
        .map(|spending| {
            Line::from(vec![
                Span::raw(format!("{:<14}", spending.category.name())),
                Span::styled(
                    format_bar(spending.total, breakdown.total, bar_width),
                    Style::default().fg(Color::Magenta),
                ),
                Span::raw(format!(
                    "{:>6}",
                    format_optional_percentage(spending.percentage)
                )),
            ])
        })
        .collect()
}

/// Spent against budget per category; over-budget rows in red
pub fn budget_lines(comparison: &BudgetComparison, width: usize) -> Vec<Line<'static>> {
    if comparison.is_empty() {
        return placeholder(NO_BUDGET_DATA, "Press b to set a budget");
    }

    let bar_width = width.saturating_sub(14 + 6).max(1);

    comparison
        .rows
        .iter()
        .map(|row| {
            let color = if row.is_over_budget() {
                EXPENSE_COLOR
            } else {
                INCOME_COLOR
            };
            let scale = row.budget.max(row.spent);
            Line::from(vec![
                Span::raw(format!("{:<14}", row.category.name())),
                Span::styled(
                    format_bar(row.spent, scale, bar_width),
                    Style::default().fg(color),
                ),
                Span::styled(
                    format!(
                        "{:>6}",
                        format_optional_percentage(row.utilization().map(|u| u * 100.0))
                    ),
                    Style::default().fg(color),
                ),
            ])
        })
        .collect()
}

/// Draw chart lines inside a titled border
pub fn render_chart(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let block = Block::default()
        .title(format!(" {} ", truncate(title, area.width.saturating_sub(4) as usize)))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Usable text width inside a bordered chart
pub fn inner_width(area: Rect) -> usize {
    area.width.saturating_sub(2) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, FilterState, Money, Transaction, TransactionDraft};
    use crate::storage::BudgetStore;
    use chrono::NaiveDate;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn txns() -> Vec<Transaction> {
        let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        vec![
            Transaction::from_draft(TransactionDraft::expense(
                Money::from_whole(100),
                date(5),
                "Groceries",
                Category::Food,
            )),
            Transaction::from_draft(TransactionDraft::income(
                Money::from_whole(50),
                date(10),
                "Refund",
                Category::Food,
            )),
        ]
    }

    #[test]
    fn test_empty_series_show_placeholders() {
        let monthly = monthly_lines(&MonthlyReport::generate(&[]), "₹", 40);
        assert!(monthly.iter().any(|l| text(l) == NO_MONTHLY_DATA));

        let categories = category_lines(&CategoryBreakdown::generate(&[]), 40);
        assert!(categories.iter().any(|l| text(l) == NO_CATEGORY_DATA));

        let budgets = BudgetComparison::generate(&[], &BudgetStore::new(), &FilterState::all());
        assert!(budget_lines(&budgets, 40).iter().any(|l| text(l) == NO_BUDGET_DATA));
    }

    #[test]
    fn test_monthly_lines() {
        let lines = monthly_lines(&MonthlyReport::generate(&txns()), "₹", 30);
        // Legend, one month, totals
        assert_eq!(lines.len(), 3);
        assert_eq!(text(&lines[1]), "Jan 2024 █████░░░░░ ██████████");
        assert_eq!(text(&lines[2]), "In ₹50.00 Out ₹100.00");
    }

    #[test]
    fn test_category_lines() {
        let lines = category_lines(&CategoryBreakdown::generate(&txns()), 30);
        assert_eq!(lines.len(), 1);
        assert_eq!(text(&lines[0]), "Food          ██████████  100%");
    }

    #[test]
    fn test_budget_lines_flag_overspend() {
        let mut budgets = BudgetStore::new();
        let filter = FilterState::all().month(1).year(2024);
        budgets.save(Category::Food, filter.period(), Money::from_whole(80));

        let comparison = BudgetComparison::generate(&txns(), &budgets, &filter);
        let lines = budget_lines(&comparison, 30);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[1].style.fg, Some(EXPENSE_COLOR));
        assert!(text(&lines[0]).starts_with("Food          ██████████"));
    }
}
