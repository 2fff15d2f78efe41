use super::{CitySpendShare, Report, ReportKind, WeekendEfficiency};

use std::collections::HashSet;
use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

#[test]
fn test_report_kinds_are_distinct_and_complete() {
    let kinds: HashSet<_> = ReportKind::ALL.into_iter().collect();

    assert_eq!(kinds.len(), 9);
}

#[test]
fn test_report_section_names_are_unique() {
    let names: HashSet<String> = ReportKind::ALL.iter().map(|kind| kind.to_string()).collect();

    assert_eq!(names.len(), 9);
}

#[test]
fn test_report_writes_header_and_rows() -> Result<()> {
    let report = Report::TopCitiesBySpend(vec![
        CitySpendShare {
            city: "Delhi".to_string(),
            total_spend: Decimal::from_str("300")?,
            pct_of_total: Decimal::from_str("85.71")?
        },
        CitySpendShare {
            city: "Mumbai".to_string(),
            total_spend: Decimal::from_str("50")?,
            pct_of_total: Decimal::from_str("14.29")?
        }
    ]);

    let mut output = Vec::new();
    report.write_csv(&mut output)?;

    let rendered = String::from_utf8(output)?;

    assert_eq!(rendered, "city,total_spend,pct_of_total\nDelhi,300,85.71\nMumbai,50,14.29\n");

    Ok(())
}

#[test]
fn test_empty_extremum_report_renders_header_only() -> Result<()> {
    let report = Report::WeekendSpendEfficiency(None);

    let mut output = Vec::new();
    report.write_csv(&mut output)?;

    let rendered = String::from_utf8(output)?;

    assert_eq!(rendered, "city,total_spend,transactions,spend_per_transaction\n");

    Ok(())
}

#[test]
fn test_populated_extremum_report_renders_single_row() -> Result<()> {
    let report = Report::WeekendSpendEfficiency(Some(WeekendEfficiency {
        city: "Delhi".to_string(),
        total_spend: Decimal::from_str("1000")?,
        transactions: 4,
        spend_per_transaction: Decimal::from_str("250.00")?
    }));

    let mut output = Vec::new();
    report.write_csv(&mut output)?;

    let rendered = String::from_utf8(output)?;

    assert_eq!(
        rendered,
        "city,total_spend,transactions,spend_per_transaction\nDelhi,1000,4,250.00\n"
    );

    Ok(())
}

#[test]
fn test_report_kind_round_trips_through_report() {
    let report = Report::MonthlyGrowthLeader(None);

    assert_eq!(report.kind(), ReportKind::MonthlyGrowthLeader);
    assert_eq!(report.kind().to_string(), "monthly_growth_leader");
}
