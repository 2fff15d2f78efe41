mod analytics;
mod dataset;
mod engine;
mod models;
mod report;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::AnalyticsEngine;
use crate::report::ReportKind;
use crate::storage::{ReportSink, ReportStore};

#[tokio::main]
async fn main() -> Result<()> {
    //NOTE: Two positional arguments do not warrant pulling in the clap crate;
    //      revisit if the report parameters ever become CLI-tunable.
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: card-spend-analytics [transactions].csv [log_level:optional] > [report].txt");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let store = Arc::new(ReportStore::new());
    let engine = AnalyticsEngine::new(store.clone());

    let timer = Instant::now();
    engine.run(path).await?;
    let duration = timer.elapsed();

    info!("Computed report suite in: {duration:?}");

    write_reports_to_stdout(store)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the rendered reports, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_reports_to_stdout(store: Arc<ReportStore>) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    for kind in ReportKind::ALL {
        let Some(report) = store.load(kind) else {
            continue;
        };

        writeln!(output, "-- {kind}")?;
        report.write_csv(&mut output)?;
        writeln!(output)?;
    }

    output.flush()?;

    Ok(())
}
