//! Delete confirmation dialog

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::display::{format_date, truncate};
use crate::models::Transaction;
use crate::tui::layout::centered_rect_fixed;

const DESCRIPTION_WIDTH: usize = 36;

/// Prompt line naming the transaction
pub fn delete_message(description: &str) -> String {
    format!("Delete \"{}\"?", truncate(description, DESCRIPTION_WIDTH))
}

/// Amount, category and date of the transaction being deleted
pub fn delete_details(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    format!(
        "{}  {}  {}",
        txn.format_amount(symbol),
        txn.category,
        format_date(txn.date, date_format)
    )
}

/// Ask before removing `txn`
pub fn render(frame: &mut Frame, txn: &Transaction, symbol: &str, date_format: &str) {
    let area = centered_rect_fixed(52, 8, frame.area());
    frame.render_widget(Clear, area);

    let amount_color = if txn.is_income() {
        Color::Green
    } else {
        Color::Red
    };

    let block = Block::default()
        .title(" Delete Transaction ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            delete_message(&txn.description),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            delete_details(txn, symbol, date_format),
            Style::default().fg(amount_color),
        ))
        .centered(),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Red)),
            Span::raw(" Delete   "),
            Span::styled("[N/Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Keep"),
        ])
        .centered(),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionDraft};
    use chrono::NaiveDate;

    fn tea() -> Transaction {
        Transaction::from_draft(TransactionDraft::expense(
            Money::from_cents(4550),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            "Tea",
            Category::Food,
        ))
    }

    #[test]
    fn test_delete_message_truncates() {
        assert_eq!(delete_message("Tea"), "Delete \"Tea\"?");
        let long = "x".repeat(50);
        assert_eq!(delete_message(&long).chars().count(), DESCRIPTION_WIDTH + 10);
    }

    #[test]
    fn test_delete_details_show_amount_category_and_date() {
        assert_eq!(
            delete_details(&tea(), "₹", "%d/%m/%Y"),
            "-₹45.50  Food  09/03/2024"
        );
    }
}
