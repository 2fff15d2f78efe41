use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{CardType, ExpenseType, Transaction};
use crate::report::{CardTypeMonthSpend, CityExpenseExtremes};
use crate::types::Month;

/// Finds, for every card type, the calendar month with the highest total
/// spend.
///
/// Ranking keeps ties: when two months of a card type land on exactly the
/// same total, both are reported.
pub fn peak_month_per_card_type(rows: &[Transaction]) -> Vec<CardTypeMonthSpend> {
    let mut totals = BTreeMap::<(CardType, Month), Decimal>::new();

    for transaction in rows {
        let bucket = (transaction.card_type, Month::of(transaction.transaction_date));
        *totals.entry(bucket).or_default() += transaction.amount;
    }

    let mut months = BTreeMap::<CardType, Vec<(Month, Decimal)>>::new();

    for ((card_type, month), total_spend) in totals {
        months.entry(card_type).or_default().push((month, total_spend));
    }

    let mut peaks = Vec::new();

    for (card_type, buckets) in months {
        let Some(best) = buckets.iter().map(|(_, total_spend)| *total_spend).max() else {
            continue;
        };

        peaks.extend(
            buckets
                .into_iter()
                .filter(|(_, total_spend)| *total_spend == best)
                .map(|(month, total_spend)| CardTypeMonthSpend { card_type, month, total_spend })
        );
    }

    peaks
}

/// For every city, pins the expense categories it spends the most and the
/// least on, side by side.
///
/// Exactly one row per city: ties on the total fall to the first category
/// in alphabetical order, and a city with a single category reports it on
/// both sides.
pub fn city_expense_extremes(rows: &[Transaction]) -> Vec<CityExpenseExtremes> {
    let mut totals = BTreeMap::<&str, BTreeMap<ExpenseType, Decimal>>::new();

    for transaction in rows {
        *totals
            .entry(transaction.city.as_str())
            .or_default()
            .entry(transaction.exp_type)
            .or_default() += transaction.amount;
    }

    let mut extremes = Vec::new();

    for (city, categories) in totals {
        let mut categories = categories.into_iter();

        let Some(first) = categories.next() else {
            continue;
        };

        let mut highest = first;
        let mut lowest = first;

        for (exp_type, total_spend) in categories {
            if total_spend > highest.1 {
                highest = (exp_type, total_spend);
            }

            if total_spend < lowest.1 {
                lowest = (exp_type, total_spend);
            }
        }

        extremes.push(CityExpenseExtremes {
            city: city.to_string(),
            highest_expense_type: highest.0,
            highest_spend: highest.1,
            lowest_expense_type: lowest.0,
            lowest_spend: lowest.1
        });
    }

    extremes
}
