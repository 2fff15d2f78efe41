use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{CardType, ExpenseType, Transaction};
use crate::report::MonthlyGrowth;
use crate::types::Month;

/// Finds the (card type, expense category) pair with the highest
/// month-over-month spend growth landing in `month`.
///
/// A pair only qualifies when it has spend in both `month` and the month
/// before it; pairs appearing for the first time have no baseline and are
/// excluded. Growth is the difference between the two monthly totals, so a
/// shrinking pair can still lead when every candidate shrank. A tie goes
/// to the first pair in (card type, category) order.
pub fn monthly_growth_leader(rows: &[Transaction], month: Month) -> Option<MonthlyGrowth> {
    let previous_month = month.previous();
    let mut totals = BTreeMap::<(CardType, ExpenseType), (Option<Decimal>, Option<Decimal>)>::new();

    for transaction in rows {
        let bucket = Month::of(transaction.transaction_date);

        if bucket != month && bucket != previous_month {
            continue;
        }

        let entry = totals.entry((transaction.card_type, transaction.exp_type)).or_default();

        if bucket == month {
            *entry.1.get_or_insert(Decimal::ZERO) += transaction.amount;
        } else {
            *entry.0.get_or_insert(Decimal::ZERO) += transaction.amount;
        }
    }

    let mut leader: Option<MonthlyGrowth> = None;

    for ((card_type, exp_type), (previous_spend, current_spend)) in totals {
        let (Some(previous_spend), Some(current_spend)) = (previous_spend, current_spend) else {
            continue;
        };

        let growth = current_spend - previous_spend;

        if leader.as_ref().is_none_or(|current| growth > current.growth) {
            leader = Some(MonthlyGrowth {
                card_type,
                exp_type,
                month,
                previous_spend,
                current_spend,
                growth
            });
        }
    }

    leader
}
