use super::AnalyticsEngine;

use std::fs;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use tempfile::NamedTempFile;
use tokio::time::sleep;

use crate::analytics::QueryParams;
use crate::report::{Report, ReportKind};
use crate::storage::{ReportSink, ReportStore};

const HEADER: &str = "transaction_id,transaction_date,city,card_type,exp_type,gender,amount";

fn create_temporary_csv(rows: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "{HEADER}")?;

    for row in rows {
        writeln!(file, "{row}")?;
    }

    Ok(file)
}

fn top_cities(store: &ReportStore) -> Result<Vec<(String, String, String)>> {
    let report = store.load(ReportKind::TopCitiesBySpend).ok_or_else(|| anyhow!("Top cities report missing"))?;

    let Report::TopCitiesBySpend(rows) = report else {
        return Err(anyhow!("Unexpected report variant"));
    };

    Ok(rows
        .into_iter()
        .map(|row| (row.city, row.total_spend.to_string(), row.pct_of_total.to_string()))
        .collect())
}

#[tokio::test]
async fn test_engine_computes_full_report_suite_from_csv() -> Result<()> {
    let csv_content = format!(
        "{HEADER}\n1,2014-01-05,A,Gold,Bills,F,100\n2,2014-02-10,A,Gold,Food,M,200\n3,2014-01-15,B,Silver,Travel,F,50"
    );
    let path = "test_engine_1.csv";
    fs::write(path, csv_content)?;

    let store = Arc::new(ReportStore::new());
    let engine = AnalyticsEngine::new(store.clone());
    engine.run(path).await?;
    let _ = fs::remove_file(path);

    assert_eq!(store.len(), ReportKind::ALL.len());

    let cities = top_cities(&store)?;

    assert_eq!(cities.len(), 2);
    assert_eq!(cities[0], ("A".to_string(), "300".to_string(), "85.71".to_string()));
    assert_eq!(cities[1], ("B".to_string(), "50".to_string(), "14.29".to_string()));

    Ok(())
}

#[tokio::test]
async fn test_engine_gracefully_skips_malformed_csv_input() -> Result<()> {
    let csv_content = format!(
        "{HEADER}\n1,2014-01-05,A,Gold,Bills,F,100\ninvalid,data,here,only\n2,2014-01-06,A,Gold,Food,M,50"
    );
    let path = "test_engine_2.csv";
    fs::write(path, csv_content)?;

    let store = Arc::new(ReportStore::new());
    let engine = AnalyticsEngine::new(store.clone());
    engine.run(path).await?;
    let _ = fs::remove_file(path);

    let cities = top_cities(&store)?;

    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].1, "150");

    Ok(())
}

#[tokio::test]
async fn test_engine_discards_duplicate_and_negative_rows() -> Result<()> {
    let csv_content = format!(
        "{HEADER}\n1,2014-01-05,A,Gold,Bills,F,100\n1,2014-01-06,A,Gold,Food,M,900\n2,2014-01-07,A,Gold,Travel,F,-40"
    );
    let path = "test_engine_3.csv";
    fs::write(path, csv_content)?;

    let store = Arc::new(ReportStore::new());
    let engine = AnalyticsEngine::new(store.clone());
    engine.run(path).await?;
    let _ = fs::remove_file(path);

    let cities = top_cities(&store)?;

    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].1, "100");

    Ok(())
}

#[tokio::test]
async fn test_engine_handles_missing_csv_file_without_error() -> Result<()> {
    let store = Arc::new(ReportStore::new());
    let engine = AnalyticsEngine::new(store.clone());

    assert!(engine.run("missing.csv").await.is_ok());

    // Every report is still published, just empty.
    assert_eq!(store.len(), ReportKind::ALL.len());
    assert!(top_cities(&store)?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_engine_honors_custom_query_params() -> Result<()> {
    let file = create_temporary_csv(&[
        "1,2014-01-05,A,Gold,Bills,F,100",
        "2,2014-01-06,B,Silver,Food,M,300",
        "3,2014-01-07,C,Platinum,Travel,F,200"
    ])?;

    let store = Arc::new(ReportStore::new());
    let params = QueryParams {
        top_cities: 1,
        ..QueryParams::default()
    };
    let engine = AnalyticsEngine::new(store.clone()).with_params(params);

    engine.run(file.path().to_str().ok_or_else(|| anyhow!("Non UTF-8 temp path"))?).await?;

    let cities = top_cities(&store)?;

    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].0, "B");

    Ok(())
}

#[tokio::test]
async fn test_dataset_cache_serves_parsed_file_until_timeout() -> Result<()> {
    // Scenario: TTL 100ms. Run, rewrite the file, run again before and
    // after expiry. Confirms the parse is reused until the entry expires.

    let path = "test_engine_cache.csv";
    fs::write(path, format!("{HEADER}\n1,2014-01-05,A,Gold,Bills,F,100"))?;

    let store = Arc::new(ReportStore::new());
    let engine = AnalyticsEngine::new(store.clone()).with_cache_timeout(Duration::from_millis(100));

    engine.run(path).await?;
    assert_eq!(top_cities(&store)?[0].1, "100");

    fs::write(path, format!("{HEADER}\n1,2014-01-05,A,Gold,Bills,F,900"))?;

    engine.run(path).await?;
    assert_eq!(top_cities(&store)?[0].1, "100");

    sleep(Duration::from_millis(200)).await;

    engine.run(path).await?;
    let _ = fs::remove_file(path);

    assert_eq!(top_cities(&store)?[0].1, "900");

    Ok(())
}

#[tokio::test]
async fn test_dataset_cache_capacity_allows_rotating_files() -> Result<()> {
    // Capacity 2 with three distinct files. Whatever gets evicted, every
    // run must reflect the file it was asked to process.

    let files = [
        create_temporary_csv(&["1,2014-01-05,A,Gold,Bills,F,100"])?,
        create_temporary_csv(&["1,2014-01-05,B,Gold,Bills,F,200"])?,
        create_temporary_csv(&["1,2014-01-05,C,Gold,Bills,F,300"])?
    ];

    let store = Arc::new(ReportStore::new());
    let engine = AnalyticsEngine::new(store.clone()).with_cache_capacity(2);

    for (file, expected) in files.iter().zip(["A", "B", "C"]) {
        engine.run(file.path().to_str().ok_or_else(|| anyhow!("Non UTF-8 temp path"))?).await?;

        assert_eq!(top_cities(&store)?[0].0, expected);
    }

    Ok(())
}
