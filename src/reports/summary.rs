//! Summary totals
//!
//! Income, expenses and balance over a set of transactions.

use crate::models::{Money, Transaction};

/// Totals shown on the dashboard summary cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryTotals {
    /// Income minus expenses
    pub balance: Money,
    pub income: Money,
    pub expenses: Money,
    /// Number of transactions summed
    pub count: usize,
}

impl SummaryTotals {
    /// Sum a set of transactions
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut income = Money::zero();
        let mut expenses = Money::zero();

        for txn in transactions {
            if txn.is_income() {
                income += txn.amount;
            } else {
                expenses += txn.amount;
            }
        }

        Self {
            balance: income - expenses,
            income,
            expenses,
            count: transactions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Share of income left after expenses, `None` when there was no income
    pub fn savings_rate(&self) -> Option<f64> {
        self.balance.ratio_of(self.income)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionDraft};
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_expense_and_income_scenario() {
        let txns = vec![
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
        ];

        let totals = SummaryTotals::from_transactions(&txns);
        assert_eq!(totals.balance, Money::from_whole(-50));
        assert_eq!(totals.income, Money::from_whole(50));
        assert_eq!(totals.expenses, Money::from_whole(100));
        assert_eq!(totals.count, 2);
    }

    #[test]
    fn test_balance_is_exact() {
        let txns: Vec<Transaction> = (0..10)
            .map(|i| {
                let draft = TransactionDraft::expense(
                    Money::from_cents(10),
                    date(1),
                    "coffee",
                    Category::Food,
                );
                let draft = if i % 3 == 0 {
                    TransactionDraft::income(Money::from_cents(33), date(2), "tip", Category::Others)
                } else {
                    draft
                };
                Transaction::from_draft(draft)
            })
            .collect();

        let totals = SummaryTotals::from_transactions(&txns);
        assert_eq!(totals.balance, totals.income - totals.expenses);
        assert_eq!(totals.income.cents(), 4 * 33);
        assert_eq!(totals.expenses.cents(), 6 * 10);
    }

    #[test]
    fn test_empty_is_zero() {
        let totals = SummaryTotals::from_transactions(&[]);
        assert_eq!(totals, SummaryTotals::default());
        assert!(totals.is_empty());
        assert_eq!(totals.savings_rate(), None);
    }
}
