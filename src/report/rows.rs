use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{CardType, ExpenseType, Gender};
use crate::types::{Month, TransactionId};

/// One row of the city spend leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct CitySpendShare {
    pub city: String,
    pub total_spend: Decimal,
    /// Share of the grand total across *all* cities, rounded to 2 dp.
    pub pct_of_total: Decimal
}

/// A card type's highest-spend calendar month. Exact ties produce one row
/// per tied month.
#[derive(Debug, Clone, PartialEq)]
pub struct CardTypeMonthSpend {
    pub card_type: CardType,
    pub month: Month,
    pub total_spend: Decimal
}

/// The transaction whose running total first carried a card type over the
/// spend threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendMilestone {
    pub card_type: CardType,
    pub transaction_id: TransactionId,
    pub transaction_date: NaiveDate,
    pub amount: Decimal,
    pub cumulative_spend: Decimal
}

/// The city where a card type holds its smallest share of overall spend.
#[derive(Debug, Clone, PartialEq)]
pub struct CardShareExtreme {
    pub city: String,
    pub card_spend: Decimal,
    pub total_spend: Decimal,
    pub pct_share: Decimal
}

/// A city's highest- and lowest-spend expense categories, side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct CityExpenseExtremes {
    pub city: String,
    pub highest_expense_type: ExpenseType,
    pub highest_spend: Decimal,
    pub lowest_expense_type: ExpenseType,
    pub lowest_spend: Decimal
}

/// Share of an expense category's spend coming from one gender marker.
#[derive(Debug, Clone, PartialEq)]
pub struct GenderShare {
    pub exp_type: ExpenseType,
    pub gender: Gender,
    pub gender_spend: Decimal,
    pub total_spend: Decimal,
    pub pct_share: Decimal
}

/// The (card type, expense category) pair with the highest month-over-month
/// spend growth landing in the reported month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyGrowth {
    pub card_type: CardType,
    pub exp_type: ExpenseType,
    pub month: Month,
    pub previous_spend: Decimal,
    pub current_spend: Decimal,
    pub growth: Decimal
}

/// The city with the highest weekend spend per transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekendEfficiency {
    pub city: String,
    pub total_spend: Decimal,
    pub transactions: u64,
    pub spend_per_transaction: Decimal
}

/// The city that logged its target-th transaction in the fewest days.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionPace {
    pub city: String,
    pub first_date: NaiveDate,
    pub nth_date: NaiveDate,
    pub days: i64
}
