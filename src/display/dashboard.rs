//! Plain-text dashboard
//!
//! Renders a [`DashboardSnapshot`] as text tables for the `report` command.

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::models::Money;
use crate::reports::DashboardSnapshot;

use super::report::{
    format_bar, format_date, format_optional_percentage, separator, truncate,
};
use super::{NO_BUDGET_DATA, NO_CATEGORY_DATA, NO_MONTHLY_DATA, NO_TRANSACTIONS};

const BAR_WIDTH: usize = 20;
const DESCRIPTION_WIDTH: usize = 30;

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    label: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Net")]
    net: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    total: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn table<T: Tabled>(rows: Vec<T>) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

fn section(output: &mut String, title: &str) {
    output.push('\n');
    output.push_str(title);
    output.push('\n');
    output.push_str(&separator(title.chars().count()));
    output.push('\n');
}

/// Render the whole dashboard as text
pub fn render_dashboard(snapshot: &DashboardSnapshot, symbol: &str, date_format: &str) -> String {
    let money = |m: Money| m.format_with_symbol(symbol);
    let mut output = String::new();

    output.push_str(&format!(
        "Finance Dashboard  ({})\n",
        snapshot.filter
    ));
    output.push_str(&format!(
        "Balance: {}   Income: {}   Expenses: {}   Transactions: {}\n",
        money(snapshot.summary.balance),
        money(snapshot.summary.income),
        money(snapshot.summary.expenses),
        snapshot.summary.count
    ));
    output.push_str(&format!(
        "Savings rate: {}\n",
        format_optional_percentage(snapshot.summary.savings_rate().map(|r| r * 100.0))
    ));

    section(&mut output, "Monthly Overview");
    if snapshot.monthly.is_empty() {
        output.push_str(NO_MONTHLY_DATA);
        output.push('\n');
    } else {
        let max = snapshot.monthly.max_value();
        let rows = snapshot
            .monthly
            .months
            .iter()
            .map(|m| MonthRow {
                label: m.label.clone(),
                income: money(m.income),
                expenses: money(m.expenses),
                net: money(m.net()),
                bar: format_bar(m.expenses, max, BAR_WIDTH),
            })
            .collect();
        output.push_str(&table::<MonthRow>(rows));
        output.push('\n');
        output.push_str(&format!(
            "Total Expenses: {}   Total Income: {}\n",
            money(snapshot.monthly.total_expenses),
            money(snapshot.monthly.total_income)
        ));
    }

    section(&mut output, "Spending by Category");
    if snapshot.categories.is_empty() {
        output.push_str(NO_CATEGORY_DATA);
        output.push('\n');
    } else {
        let rows = snapshot
            .categories
            .categories
            .iter()
            .map(|c| CategoryRow {
                category: c.category.to_string(),
                total: money(c.total),
                count: c.count,
                share: format_optional_percentage(c.percentage),
            })
            .collect();
        output.push_str(&table::<CategoryRow>(rows));
        output.push('\n');
        if let Some(top) = snapshot.categories.top(1).first() {
            output.push_str(&format!(
                "Top category: {} ({})\n",
                top.category,
                money(top.total)
            ));
        }
    }

    section(
        &mut output,
        &format!("Budget vs. Actual ({})", snapshot.budget_comparison.period),
    );
    if snapshot.budget_comparison.is_empty() {
        output.push_str(NO_BUDGET_DATA);
        output.push('\n');
    } else {
        let rows = snapshot
            .budget_comparison
            .rows
            .iter()
            .map(|r| BudgetRow {
                category: r.category.to_string(),
                budget: money(r.budget),
                spent: money(r.spent),
                remaining: money(r.remaining()),
                status: if r.is_over_budget() { "OVER" } else { "ok" }.to_string(),
            })
            .collect();
        output.push_str(&table::<BudgetRow>(rows));
        output.push('\n');
        output.push_str(&format!(
            "Total Budget: {}   Total Spent: {}   Over budget: {}\n",
            money(snapshot.budget_comparison.total_budget()),
            money(snapshot.budget_comparison.total_spent()),
            snapshot.budget_comparison.over_budget().count()
        ));
    }

    section(&mut output, "Recent Transactions");
    if snapshot.recent.is_empty() {
        output.push_str(NO_TRANSACTIONS);
        output.push('\n');
    } else {
        let rows = snapshot
            .recent
            .iter()
            .map(|t| TransactionRow {
                date: format_date(t.date, date_format),
                description: truncate(&t.description, DESCRIPTION_WIDTH),
                category: t.category.to_string(),
                amount: t.format_amount(symbol),
            })
            .collect();
        output.push_str(&table::<TransactionRow>(rows));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, FilterState, Period, TransactionDraft};
    use crate::storage::Storage;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_dashboard_shows_placeholders() {
        let snapshot = DashboardSnapshot::build(&Storage::new(), FilterState::all(), 5);
        let text = render_dashboard(&snapshot, "₹", "%Y-%m-%d");

        assert!(text.contains("Balance: ₹0.00"));
        assert!(text.contains("Savings rate: -"));
        assert!(text.contains(NO_MONTHLY_DATA));
        assert!(text.contains(NO_CATEGORY_DATA));
        assert!(text.contains(NO_BUDGET_DATA));
        assert!(text.contains(NO_TRANSACTIONS));
    }

    #[test]
    fn test_populated_dashboard() {
        let mut storage = Storage::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        storage.transactions.add(TransactionDraft::expense(
            Money::from_whole(100),
            date,
            "Groceries",
            Category::Food,
        ));
        storage
            .budgets
            .save(Category::Food, Period::all_time(), Money::from_whole(200));

        let snapshot = DashboardSnapshot::build(&storage, FilterState::all(), 5);
        let text = render_dashboard(&snapshot, "₹", "%Y-%m-%d");

        assert!(text.contains("Balance: -₹100.00"));
        assert!(text.contains("Jan 2024"));
        assert!(text.contains("Groceries"));
        assert!(text.contains("-₹100.00"));
        assert!(text.contains("₹200.00"));
        assert!(text.contains("2024-01-05"));
        assert!(!text.contains(NO_CATEGORY_DATA));
        assert!(text.contains("Top category: Food (₹100.00)"));
        assert!(text.contains("Total Budget: ₹200.00   Total Spent: ₹100.00   Over budget: 0"));
    }

    #[test]
    fn test_savings_rate_and_monthly_net() {
        let mut storage = Storage::new();
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        storage.transactions.add(TransactionDraft::income(
            Money::from_whole(400),
            date,
            "Salary",
            Category::Others,
        ));
        storage.transactions.add(TransactionDraft::expense(
            Money::from_whole(100),
            date,
            "Books",
            Category::Education,
        ));
        storage
            .budgets
            .save(Category::Education, Period::all_time(), Money::from_whole(50));

        let snapshot = DashboardSnapshot::build(&storage, FilterState::all(), 5);
        let text = render_dashboard(&snapshot, "₹", "%Y-%m-%d");

        assert!(text.contains("Savings rate: 75%"));
        assert!(text.contains("₹300.00"));
        assert!(text.contains("Over budget: 1"));
    }
}
