//! The `report` command
//!
//! Builds a one-off session from command-line arguments (demo data,
//! transactions, budgets and a filter) and prints the dashboard as text.

use chrono::NaiveDate;
use clap::Args;
use tracing::info;

use crate::config::settings::Settings;
use crate::demo::sample_drafts;
use crate::display::render_dashboard;
use crate::error::{FinanceError, FinanceResult};
use crate::forms::TransactionForm;
use crate::models::{Category, FilterState, Money, Selection, TransactionDraft, TransactionKind};
use crate::services::{Ledger, LogNotifier};

/// Arguments of the `report` command
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Seed the session with sample transactions
    #[arg(long)]
    pub demo: bool,

    /// Add a transaction: KIND,AMOUNT,CATEGORY,YYYY-MM-DD,DESCRIPTION
    #[arg(short = 't', long = "transaction", value_name = "TXN", value_parser = parse_transaction_arg)]
    pub transactions: Vec<TransactionDraft>,

    /// Set a budget for the filtered period: CATEGORY=AMOUNT
    #[arg(short, long = "budget", value_name = "BUDGET", value_parser = parse_budget_arg)]
    pub budgets: Vec<(Category, Money)>,

    /// Only show this month (1-12)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Only show this year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Only show this category
    #[arg(short, long)]
    pub category: Option<Category>,
}

impl ReportArgs {
    pub fn filter(&self) -> FilterState {
        FilterState {
            month: Selection::from(self.month),
            year: Selection::from(self.year),
            category: Selection::from(self.category),
        }
    }
}

/// Parse `CATEGORY=AMOUNT`
pub fn parse_budget_arg(s: &str) -> Result<(Category, Money), FinanceError> {
    let (category, amount) = s
        .split_once('=')
        .ok_or_else(|| FinanceError::Validation("budget must look like CATEGORY=AMOUNT".into()))?;

    let category: Category = category
        .parse()
        .map_err(|e: crate::models::CategoryParseError| FinanceError::Validation(e.to_string()))?;
    let amount = Money::parse(amount).map_err(|e| FinanceError::Validation(e.to_string()))?;
    if amount.is_negative() {
        return Err(FinanceError::Validation(format!(
            "budget for {} cannot be negative",
            category
        )));
    }

    Ok((category, amount))
}

/// Parse `KIND,AMOUNT,CATEGORY,YYYY-MM-DD,DESCRIPTION` through the same
/// validation as the interactive form
pub fn parse_transaction_arg(s: &str) -> Result<TransactionDraft, FinanceError> {
    let parts: Vec<&str> = s.splitn(5, ',').map(str::trim).collect();
    let [kind, amount, category, date, description] = parts.as_slice() else {
        return Err(FinanceError::Validation(
            "transaction must look like KIND,AMOUNT,CATEGORY,YYYY-MM-DD,DESCRIPTION".into(),
        ));
    };

    let mut form = TransactionForm::new(NaiveDate::default());
    form.kind = match kind.to_lowercase().as_str() {
        "income" => TransactionKind::Income,
        "expense" => TransactionKind::Expense,
        other => {
            return Err(FinanceError::Validation(format!(
                "unknown transaction kind '{}' (expected income or expense)",
                other
            )))
        }
    };
    form.amount.set(*amount);
    form.date.set(*date);
    form.description.set(*description);
    form.category = category.parse().ok();

    form.validate().map_err(|errors| {
        let messages: Vec<&str> = [errors.amount, errors.date, errors.description, errors.category]
            .into_iter()
            .flatten()
            .collect();
        FinanceError::Validation(messages.join("; "))
    })
}

/// Build the session described by `args` and render it
pub fn build_report(args: &ReportArgs, settings: &Settings, today: NaiveDate) -> String {
    let mut ledger = Ledger::with_settings(LogNotifier, settings);

    if args.demo {
        ledger.seed(sample_drafts(today));
    }
    for draft in &args.transactions {
        ledger.add_transaction(draft.clone());
    }

    ledger.set_filter(args.filter());
    for (category, limit) in &args.budgets {
        ledger.save_budget_for_current_period(*category, *limit);
    }

    let snapshot = ledger.snapshot();
    info!(
        transactions = snapshot.transactions.len(),
        budgets = ledger.storage().budgets.len(),
        "report built"
    );
    render_dashboard(&snapshot, &settings.currency_symbol, &settings.date_format)
}

/// Handle the `report` command
pub fn handle_report_command(args: ReportArgs, settings: &Settings) -> FinanceResult<()> {
    let today = chrono::Local::now().date_naive();
    print!("{}", build_report(&args, settings, today));
    Ok(())
}
