//! Demo session data
//!
//! A fixed set of sample transactions spread over the four months ending at
//! an anchor date, so every chart has something to show in a fresh session.
//! Rows in the anchor's own month never fall after the anchor.

use chrono::{Datelike, NaiveDate};

use crate::models::{Category, Money, MonthKey, TransactionDraft, TransactionKind};

use Category::*;
use TransactionKind::{Expense, Income};

/// (months before anchor, day, amount in minor units, description, category, kind)
const SAMPLES: [(u32, u32, i64, &str, Category, TransactionKind); 16] = [
    (3, 1, 55_000_00, "Monthly salary", Others, Income),
    (3, 4, 3_250_50, "Groceries", Food, Expense),
    (3, 9, 1_200_00, "Electricity bill", Utilities, Expense),
    (3, 18, 899_00, "Movie night", Entertainment, Expense),
    (2, 1, 55_000_00, "Monthly salary", Others, Income),
    (2, 6, 2_780_25, "Groceries", Food, Expense),
    (2, 12, 650_00, "Metro card", Transportation, Expense),
    (2, 21, 4_500_00, "Online course", Education, Expense),
    (1, 1, 55_000_00, "Monthly salary", Others, Income),
    (1, 3, 1_499_00, "Pharmacy", Healthcare, Expense),
    (1, 15, 6_799_00, "Winter jacket", Shopping, Expense),
    (1, 20, 3_100_75, "Groceries", Food, Expense),
    (0, 1, 55_000_00, "Monthly salary", Others, Income),
    (0, 2, 2_400_00, "Freelance project", Others, Income),
    (0, 5, 1_150_00, "Internet bill", Utilities, Expense),
    (0, 8, 420_00, "Cab to airport", Transportation, Expense),
];

/// Sample drafts, oldest first, ending in the anchor's month
pub fn sample_drafts(anchor: NaiveDate) -> Vec<TransactionDraft> {
    let anchor_month = MonthKey::from_date(anchor);

    let mut drafts: Vec<TransactionDraft> = SAMPLES
        .iter()
        .filter_map(|&(back, day, cents, description, category, kind)| {
            let month = (0..back).fold(anchor_month, |m, _| m.prev());
            let day = if back == 0 { day.min(anchor.day()) } else { day };
            let date = NaiveDate::from_ymd_opt(month.year, month.month, day)?;
            Some(TransactionDraft::new(
                Money::from_cents(cents),
                date,
                description,
                category,
                kind,
            ))
        })
        .collect();

    drafts.sort_by_key(|d| d.date);
    drafts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_four_months_ending_at_anchor() {
        let anchor = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
        let drafts = sample_drafts(anchor);

        assert_eq!(drafts.len(), SAMPLES.len());
        assert_eq!(
            MonthKey::from_date(drafts[0].date),
            MonthKey::new(2023, 11)
        );
        assert_eq!(
            MonthKey::from_date(drafts[drafts.len() - 1].date),
            MonthKey::new(2024, 2)
        );
        assert!(drafts.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_drafts_are_valid() {
        let drafts = sample_drafts(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(drafts.iter().all(|d| d.validate().is_ok()));
        assert!(drafts.iter().any(|d| d.kind == Income));
    }

    #[test]
    fn test_no_dates_after_anchor() {
        for day in [1, 3, 7, 8, 28] {
            let anchor = NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
            let drafts = sample_drafts(anchor);
            assert_eq!(drafts.len(), SAMPLES.len());
            assert!(drafts.iter().all(|d| d.date <= anchor), "anchor day {}", day);
        }

        let anchor = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();
        let drafts = sample_drafts(anchor);
        let cab = drafts
            .iter()
            .find(|d| d.description == "Cab to airport")
            .unwrap();
        assert_eq!(cab.date, anchor);
    }

    #[test]
    fn test_is_deterministic() {
        let anchor = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert_eq!(sample_drafts(anchor), sample_drafts(anchor));
    }
}
