mod rows;
#[cfg(test)]
mod tests;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::io;
use std::io::Write;

pub use rows::{
    CardShareExtreme, CardTypeMonthSpend, CityExpenseExtremes, CitySpendShare, GenderShare,
    MonthlyGrowth, SpendMilestone, TransactionPace, WeekendEfficiency
};

/// Identifies each report in the suite. The `Display` value doubles as the
/// section name in the rendered output.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ReportKind {
    TopCitiesBySpend,
    PeakMonthPerCardType,
    SpendMilestones,
    LowestCardShareCity,
    CityExpenseExtremes,
    GenderShareByExpenseType,
    MonthlyGrowthLeader,
    WeekendSpendEfficiency,
    TransactionPaceLeader
}

impl ReportKind {
    /// Every report, in presentation order.
    pub const ALL: [ReportKind; 9] = [
        Self::TopCitiesBySpend,
        Self::PeakMonthPerCardType,
        Self::SpendMilestones,
        Self::LowestCardShareCity,
        Self::CityExpenseExtremes,
        Self::GenderShareByExpenseType,
        Self::MonthlyGrowthLeader,
        Self::WeekendSpendEfficiency,
        Self::TransactionPaceLeader
    ];

    /// The CSV header of this report's rows.
    pub fn header(&self) -> &'static str {
        match self {
            Self::TopCitiesBySpend => "city,total_spend,pct_of_total",
            Self::PeakMonthPerCardType => "card_type,month,total_spend",
            Self::SpendMilestones => "card_type,transaction_id,transaction_date,amount,cumulative_spend",
            Self::LowestCardShareCity => "city,card_spend,total_spend,pct_share",
            Self::CityExpenseExtremes => "city,highest_expense_type,highest_spend,lowest_expense_type,lowest_spend",
            Self::GenderShareByExpenseType => "exp_type,gender,gender_spend,total_spend,pct_share",
            Self::MonthlyGrowthLeader => "card_type,exp_type,month,previous_spend,current_spend,growth",
            Self::WeekendSpendEfficiency => "city,total_spend,transactions,spend_per_transaction",
            Self::TransactionPaceLeader => "city,first_date,nth_date,days"
        }
    }
}

impl Display for ReportKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TopCitiesBySpend => "top_cities_by_spend",
            Self::PeakMonthPerCardType => "peak_month_per_card_type",
            Self::SpendMilestones => "spend_milestones",
            Self::LowestCardShareCity => "lowest_card_share_city",
            Self::CityExpenseExtremes => "city_expense_extremes",
            Self::GenderShareByExpenseType => "gender_share_by_expense_type",
            Self::MonthlyGrowthLeader => "monthly_growth_leader",
            Self::WeekendSpendEfficiency => "weekend_spend_efficiency",
            Self::TransactionPaceLeader => "transaction_pace_leader"
        };

        formatter.write_str(name)
    }
}

/// A computed result set for one report, ready to render.
///
/// Single-extremum reports carry an `Option`: `None` renders as a header
/// with no rows, which is how an empty candidate set is presented.
#[derive(Debug, Clone)]
pub enum Report {
    TopCitiesBySpend(Vec<CitySpendShare>),
    PeakMonthPerCardType(Vec<CardTypeMonthSpend>),
    SpendMilestones(Vec<SpendMilestone>),
    LowestCardShareCity(Option<CardShareExtreme>),
    CityExpenseExtremes(Vec<CityExpenseExtremes>),
    GenderShareByExpenseType(Vec<GenderShare>),
    MonthlyGrowthLeader(Option<MonthlyGrowth>),
    WeekendSpendEfficiency(Option<WeekendEfficiency>),
    TransactionPaceLeader(Option<TransactionPace>)
}

impl Report {
    pub fn kind(&self) -> ReportKind {
        match self {
            Self::TopCitiesBySpend(_) => ReportKind::TopCitiesBySpend,
            Self::PeakMonthPerCardType(_) => ReportKind::PeakMonthPerCardType,
            Self::SpendMilestones(_) => ReportKind::SpendMilestones,
            Self::LowestCardShareCity(_) => ReportKind::LowestCardShareCity,
            Self::CityExpenseExtremes(_) => ReportKind::CityExpenseExtremes,
            Self::GenderShareByExpenseType(_) => ReportKind::GenderShareByExpenseType,
            Self::MonthlyGrowthLeader(_) => ReportKind::MonthlyGrowthLeader,
            Self::WeekendSpendEfficiency(_) => ReportKind::WeekendSpendEfficiency,
            Self::TransactionPaceLeader(_) => ReportKind::TransactionPaceLeader
        }
    }

    /// Writes the report as its CSV header plus one line per result row.
    pub fn write_csv<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", self.kind().header())?;

        match self {
            Self::TopCitiesBySpend(rows) => {
                for row in rows {
                    writeln!(output, "{},{},{}", row.city, row.total_spend, row.pct_of_total)?;
                }
            }
            Self::PeakMonthPerCardType(rows) => {
                for row in rows {
                    writeln!(output, "{},{},{}", row.card_type, row.month, row.total_spend)?;
                }
            }
            Self::SpendMilestones(rows) => {
                for row in rows {
                    writeln!(
                        output,
                        "{},{},{},{},{}",
                        row.card_type, row.transaction_id, row.transaction_date, row.amount, row.cumulative_spend
                    )?;
                }
            }
            Self::LowestCardShareCity(row) => {
                if let Some(row) = row {
                    writeln!(output, "{},{},{},{}", row.city, row.card_spend, row.total_spend, row.pct_share)?;
                }
            }
            Self::CityExpenseExtremes(rows) => {
                for row in rows {
                    writeln!(
                        output,
                        "{},{},{},{},{}",
                        row.city, row.highest_expense_type, row.highest_spend, row.lowest_expense_type, row.lowest_spend
                    )?;
                }
            }
            Self::GenderShareByExpenseType(rows) => {
                for row in rows {
                    writeln!(
                        output,
                        "{},{},{},{},{}",
                        row.exp_type, row.gender, row.gender_spend, row.total_spend, row.pct_share
                    )?;
                }
            }
            Self::MonthlyGrowthLeader(row) => {
                if let Some(row) = row {
                    writeln!(
                        output,
                        "{},{},{},{},{},{}",
                        row.card_type, row.exp_type, row.month, row.previous_spend, row.current_spend, row.growth
                    )?;
                }
            }
            Self::WeekendSpendEfficiency(row) => {
                if let Some(row) = row {
                    writeln!(
                        output,
                        "{},{},{},{}",
                        row.city, row.total_spend, row.transactions, row.spend_per_transaction
                    )?;
                }
            }
            Self::TransactionPaceLeader(row) => {
                if let Some(row) = row {
                    writeln!(output, "{},{},{},{}", row.city, row.first_date, row.nth_date, row.days)?;
                }
            }
        }

        Ok(())
    }
}
