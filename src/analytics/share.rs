use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{ExpenseType, Gender, Transaction};
use crate::report::{CitySpendShare, GenderShare};

/// Ranks cities by total spend and reports each one's share of the grand
/// total, keeping the top `top_n`.
///
/// Shares are computed against the grand total over *all* cities, so the
/// percentages across the untruncated ranking always sum to 100. Ties on
/// total spend rank the alphabetically-first city higher.
pub fn city_spend_shares(rows: &[Transaction], top_n: usize) -> Vec<CitySpendShare> {
    let mut totals = BTreeMap::<&str, Decimal>::new();

    for transaction in rows {
        *totals.entry(transaction.city.as_str()).or_default() += transaction.amount;
    }

    let grand_total: Decimal = totals.values().copied().sum();

    if grand_total.is_zero() {
        return Vec::new();
    }

    let mut ranked: Vec<(&str, Decimal)> = totals.into_iter().collect();
    ranked.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(right.0)));

    ranked
        .into_iter()
        .take(top_n)
        .map(|(city, total_spend)| CitySpendShare {
            city: city.to_string(),
            total_spend,
            pct_of_total: (total_spend * Decimal::ONE_HUNDRED / grand_total).round_dp(2)
        })
        .collect()
}

/// Reports, per expense category, how much of the category's spend comes
/// from card holders with the given gender marker. No ranking, no top-N.
///
/// Categories with zero total spend are excluded up front so the share is
/// never a division by zero.
pub fn gender_share_by_expense_type(rows: &[Transaction], gender: Gender) -> Vec<GenderShare> {
    let mut totals = BTreeMap::<ExpenseType, (Decimal, Decimal)>::new();

    for transaction in rows {
        let entry = totals.entry(transaction.exp_type).or_default();
        entry.1 += transaction.amount;

        if transaction.gender == gender {
            entry.0 += transaction.amount;
        }
    }

    totals
        .into_iter()
        .filter(|(_, (_, total_spend))| !total_spend.is_zero())
        .map(|(exp_type, (gender_spend, total_spend))| GenderShare {
            exp_type,
            gender,
            gender_spend,
            total_spend,
            pct_share: (gender_spend * Decimal::ONE_HUNDRED / total_spend).round_dp(2)
        })
        .collect()
}
