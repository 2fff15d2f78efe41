use std::collections::BTreeMap;

use chrono::{Datelike, Weekday};
use rust_decimal::Decimal;

use crate::models::{CardType, Transaction};
use crate::report::{CardShareExtreme, WeekendEfficiency};

/// Finds the city where the given card type accounts for the smallest
/// share of overall spend.
///
/// Cities with no spend at all on that card type are excluded outright
/// rather than reported as a zero share; the guard also keeps the ratio
/// away from an empty denominator. A tie on the share goes to the
/// alphabetically-first city.
pub fn lowest_card_share_city(rows: &[Transaction], card_type: CardType) -> Option<CardShareExtreme> {
    let mut totals = BTreeMap::<&str, (Decimal, Decimal)>::new();

    for transaction in rows {
        let entry = totals.entry(transaction.city.as_str()).or_default();
        entry.1 += transaction.amount;

        if transaction.card_type == card_type {
            entry.0 += transaction.amount;
        }
    }

    let mut extreme: Option<(CardShareExtreme, Decimal)> = None;

    for (city, (card_spend, total_spend)) in totals {
        if card_spend.is_zero() || total_spend.is_zero() {
            continue;
        }

        let share = card_spend * Decimal::ONE_HUNDRED / total_spend;

        if extreme.as_ref().is_none_or(|(_, current)| share < *current) {
            let row = CardShareExtreme {
                city: city.to_string(),
                card_spend,
                total_spend,
                pct_share: share.round_dp(2)
            };

            extreme = Some((row, share));
        }
    }

    extreme.map(|(row, _)| row)
}

/// Ranks cities by weekend spend per transaction and returns the leader.
///
/// Only Saturday and Sunday rows count; a city without any weekend rows is
/// never a candidate, so the per-transaction ratio always has a non-zero
/// denominator.
pub fn weekend_spend_efficiency(rows: &[Transaction]) -> Option<WeekendEfficiency> {
    let mut totals = BTreeMap::<&str, (Decimal, u64)>::new();

    for transaction in rows {
        let weekday = transaction.transaction_date.weekday();

        if weekday != Weekday::Sat && weekday != Weekday::Sun {
            continue;
        }

        let entry = totals.entry(transaction.city.as_str()).or_default();
        entry.0 += transaction.amount;
        entry.1 += 1;
    }

    let mut leader: Option<(WeekendEfficiency, Decimal)> = None;

    for (city, (total_spend, transactions)) in totals {
        let ratio = total_spend / Decimal::from(transactions);

        if leader.as_ref().is_none_or(|(_, current)| ratio > *current) {
            let row = WeekendEfficiency {
                city: city.to_string(),
                total_spend,
                transactions,
                spend_per_transaction: ratio.round_dp(2)
            };

            leader = Some((row, ratio));
        }
    }

    leader.map(|(row, _)| row)
}
