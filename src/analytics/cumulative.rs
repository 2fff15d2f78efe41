use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{CardType, Transaction};
use crate::report::{SpendMilestone, TransactionPace};

/// Flags, per card type, the exact transaction whose running total first
/// reaches the spend threshold.
///
/// Rows run in date order with the transaction ID as tie-breaker, so the
/// flagged row carries the minimal prefix sum at or above the threshold
/// and every earlier row sits below it. Card types that never reach the
/// threshold are omitted.
pub fn spend_milestones(rows: &[Transaction], threshold: Decimal) -> Vec<SpendMilestone> {
    let mut by_card = BTreeMap::<CardType, Vec<&Transaction>>::new();

    for transaction in rows {
        by_card.entry(transaction.card_type).or_default().push(transaction);
    }

    let mut milestones = Vec::new();

    for (card_type, mut card_rows) in by_card {
        card_rows.sort_by_key(|transaction| (transaction.transaction_date, transaction.transaction_id));

        let mut cumulative_spend = Decimal::ZERO;

        for transaction in card_rows {
            cumulative_spend += transaction.amount;

            if cumulative_spend >= threshold {
                milestones.push(SpendMilestone {
                    card_type,
                    transaction_id: transaction.transaction_id,
                    transaction_date: transaction.transaction_date,
                    amount: transaction.amount,
                    cumulative_spend
                });

                break;
            }
        }
    }

    milestones
}

/// Finds the city that needed the fewest days to log its `target`-th
/// transaction, measured from its first.
///
/// Occurrences are numbered by date with the transaction ID as tie-breaker.
/// Cities that never reached the target are not candidates; a tie on the
/// day span goes to the alphabetically-first city.
pub fn transaction_pace_leader(rows: &[Transaction], target: usize) -> Option<TransactionPace> {
    if target == 0 {
        return None;
    }

    let mut by_city = BTreeMap::<&str, Vec<&Transaction>>::new();

    for transaction in rows {
        by_city.entry(transaction.city.as_str()).or_default().push(transaction);
    }

    let mut leader: Option<TransactionPace> = None;

    for (city, mut city_rows) in by_city {
        if city_rows.len() < target {
            continue;
        }

        city_rows.sort_by_key(|transaction| (transaction.transaction_date, transaction.transaction_id));

        let first_date = city_rows[0].transaction_date;
        let nth_date = city_rows[target - 1].transaction_date;
        let days = (nth_date - first_date).num_days();

        if leader.as_ref().is_none_or(|current| days < current.days) {
            leader = Some(TransactionPace {
                city: city.to_string(),
                first_date,
                nth_date,
                days
            });
        }
    }

    leader
}
