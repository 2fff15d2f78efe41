use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{CardType, ExpenseType, Gender};
use crate::types::TransactionId;

/// Represents a single row from the imported transactions CSV.
///
/// Records are immutable once loaded; every report derives its groupings
/// and orderings from these columns at query time, nothing is stored
/// between runs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// Globally unique transaction ID, used as the final ordering tie-breaker.
    pub transaction_id: TransactionId,
    /// Calendar date of the purchase.
    pub transaction_date: NaiveDate,
    /// City where the purchase was made.
    pub city: String,
    /// Card product used for the purchase.
    pub card_type: CardType,
    /// Expense category of the purchase.
    pub exp_type: ExpenseType,
    /// Card holder gender marker.
    pub gender: Gender,
    /// Purchase amount, the measure every report aggregates.
    pub amount: Decimal
}
