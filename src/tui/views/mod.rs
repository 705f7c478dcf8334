//! TUI Views module
//!
//! The dashboard and add-transaction screens, the status bar, and the
//! dialog and toast overlays drawn on top of them.

pub mod add_transaction;
pub mod dashboard;
pub mod status_bar;

use ratatui::{layout::Rect, Frame};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    match app.active_view {
        ActiveView::Dashboard => dashboard::render(frame, app, layout.main),
        ActiveView::AddTransaction => add_transaction::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    render_notification(frame, app);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::ConfirmDelete(id) => {
            if let Some(txn) = app.ledger.transaction(id) {
                dialogs::confirm::render(
                    frame,
                    txn,
                    app.ledger.currency_symbol(),
                    &app.date_format,
                );
            }
        }
        ActiveDialog::EditTransaction => dialogs::transaction::render(frame, app),
        ActiveDialog::Budget => dialogs::budget::render(frame, app),
        ActiveDialog::None => {}
    }
}

/// Toast in the top-right corner
fn render_notification(frame: &mut Frame, app: &App) {
    let Some(notification) = app.ledger.notifier().current() else {
        return;
    };

    let screen = frame.area();
    let width = 44.min(screen.width);
    let height = 4.min(screen.height);
    let area = Rect::new(screen.x + screen.width - width, screen.y, width, height);

    frame.render_widget(NotificationWidget::new(notification), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::display::{NO_BUDGET_DATA, NO_MONTHLY_DATA, NO_TRANSACTIONS};
    use crate::models::{Category, Money, TransactionDraft};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 45)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::new(
            &Settings::default(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
    }

    #[test]
    fn test_empty_dashboard_shows_placeholders() {
        let mut app = app();
        let screen = draw(&mut app);
        assert!(screen.contains(NO_MONTHLY_DATA));
        assert!(screen.contains(NO_TRANSACTIONS));
        assert!(screen.contains("Total Balance"));
        assert!(screen.contains("₹0.00"));
        // Wraps inside the narrow chart
        assert!(screen.contains(&NO_BUDGET_DATA[..20]));
    }

    #[test]
    fn test_dashboard_shows_transactions_and_toast() {
        let mut app = app();
        app.ledger.add_transaction(TransactionDraft::expense(
            Money::from_whole(100),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Groceries",
            Category::Food,
        ));
        let screen = draw(&mut app);
        assert!(screen.contains("Groceries"));
        assert!(screen.contains("-₹100.00"));
        assert!(screen.contains("Transaction added"));
    }

    #[test]
    fn test_delete_prompt_shows_transaction_details() {
        let mut app = app();
        app.seed(vec![TransactionDraft::expense(
            Money::from_whole(100),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Groceries",
            Category::Food,
        )]);
        app.request_delete();

        let screen = draw(&mut app);
        assert!(screen.contains("Delete \"Groceries\"?"));
        assert!(screen.contains("-₹100.00  Food  2024-01-05"));
    }

    #[test]
    fn test_status_bar_counts_overspent_budgets() {
        let mut app = app();
        app.ledger.add_transaction(TransactionDraft::expense(
            Money::from_whole(100),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Shoes",
            Category::Shopping,
        ));
        assert!(!draw(&mut app).contains("over budget"));

        app.ledger
            .save_budget_for_current_period(Category::Shopping, Money::from_whole(40));
        assert!(draw(&mut app).contains("1 over budget"));
    }

    #[test]
    fn test_add_view_and_help() {
        let mut app = app();
        app.switch_view(ActiveView::AddTransaction);
        let screen = draw(&mut app);
        assert!(screen.contains("Add Transaction"));
        assert!(screen.contains("2024-01-31"));

        app.open_dialog(ActiveDialog::Help);
        assert!(draw(&mut app).contains("Reset filters"));
    }
}
