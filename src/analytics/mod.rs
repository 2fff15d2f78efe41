mod cumulative;
mod growth;
mod ranking;
mod ratios;
mod share;

use rust_decimal::Decimal;

use crate::models::{CardType, Gender, Transaction};
use crate::report::{Report, ReportKind};
use crate::types::Month;

pub use cumulative::{spend_milestones, transaction_pace_leader};
pub use growth::monthly_growth_leader;
pub use ranking::{city_expense_extremes, peak_month_per_card_type};
pub use ratios::{lowest_card_share_city, weekend_spend_efficiency};
pub use share::{city_spend_shares, gender_share_by_expense_type};

/// Parameters for the report suite. The defaults mirror the questions the
/// analysis was originally written to answer.
#[derive(Debug, Clone)]
pub struct QueryParams {
    /// How many cities the spend leaderboard keeps.
    pub top_cities: usize,
    /// Cumulative spend level at which a card type is flagged.
    pub milestone: Decimal,
    /// Card type whose share of city spend is ranked.
    pub share_card: CardType,
    /// Gender whose contribution per expense category is reported.
    pub share_gender: Gender,
    /// Month the month-over-month growth leader is computed for.
    pub growth_month: Month,
    /// Transaction ordinal the pace report measures each city against.
    pub pace_target: usize
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            top_cities: 5,
            milestone: Decimal::from(1_000_000),
            share_card: CardType::Gold,
            share_gender: Gender::Female,
            growth_month: Month::new(2014, 1),
            pace_target: 500
        }
    }
}

/// Computes a single report over the loaded rows.
pub fn build_report(kind: ReportKind, rows: &[Transaction], params: &QueryParams) -> Report {
    match kind {
        ReportKind::TopCitiesBySpend => {
            Report::TopCitiesBySpend(city_spend_shares(rows, params.top_cities))
        }
        ReportKind::PeakMonthPerCardType => {
            Report::PeakMonthPerCardType(peak_month_per_card_type(rows))
        }
        ReportKind::SpendMilestones => {
            Report::SpendMilestones(spend_milestones(rows, params.milestone))
        }
        ReportKind::LowestCardShareCity => {
            Report::LowestCardShareCity(lowest_card_share_city(rows, params.share_card))
        }
        ReportKind::CityExpenseExtremes => {
            Report::CityExpenseExtremes(city_expense_extremes(rows))
        }
        ReportKind::GenderShareByExpenseType => {
            Report::GenderShareByExpenseType(gender_share_by_expense_type(rows, params.share_gender))
        }
        ReportKind::MonthlyGrowthLeader => {
            Report::MonthlyGrowthLeader(monthly_growth_leader(rows, params.growth_month))
        }
        ReportKind::WeekendSpendEfficiency => {
            Report::WeekendSpendEfficiency(weekend_spend_efficiency(rows))
        }
        ReportKind::TransactionPaceLeader => {
            Report::TransactionPaceLeader(transaction_pace_leader(rows, params.pace_target))
        }
    }
}
