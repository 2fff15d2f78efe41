use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use std::time::Duration;

use csv::{ReaderBuilder, Trim};
use moka::future::Cache;
use tokio::spawn;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{error, warn};

use crate::analytics::{build_report, QueryParams};
use crate::dataset::{Dataset, DatasetError};
use crate::models::Transaction;
use crate::report::ReportKind;
use crate::storage::{ReportSink, ReportStore};

/// Async report-suite runner.
///
/// The CSV is read on a blocking task and streamed through a bounded
/// channel while the dataset is assembled on the async side. Parsed
/// datasets are cached per path, so repeated runs against the same file
/// skip the parse until the cache entry expires. Each report is then
/// computed on its own task against the shared dataset.
pub struct AnalyticsEngine {
    store: Arc<ReportStore>,
    params: QueryParams,
    backpressure: usize,
    cache_capacity: u64,
    cache_timeout: Duration,
    datasets: Cache<String, Arc<Dataset>>
}

impl AnalyticsEngine {
    /// Creates a new engine instance publishing into the provided store.
    pub fn new(store: Arc<ReportStore>) -> Self {
        let cache_capacity = 16;
        let cache_timeout = Duration::from_secs(600);

        Self {
            store,
            params: QueryParams::default(),
            backpressure: 256,
            cache_capacity,
            cache_timeout,
            datasets: Self::build_cache(cache_capacity, cache_timeout)
        }
    }

    /// Overrides the default report parameters.
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    /// Caps how many parsed datasets are kept in memory.
    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self.datasets = Self::build_cache(self.cache_capacity, self.cache_timeout);
        self
    }

    /// Sets how long a parsed dataset stays valid before it is re-read.
    pub fn with_cache_timeout(mut self, timeout: Duration) -> Self {
        self.cache_timeout = timeout;
        self.datasets = Self::build_cache(self.cache_capacity, self.cache_timeout);
        self
    }

    fn build_cache(capacity: u64, timeout: Duration) -> Cache<String, Arc<Dataset>> {
        Cache::builder()
            .max_capacity(capacity)
            .time_to_live(timeout)
            .build()
    }

    /// Runs the full report suite for the CSV at `path`.
    ///
    /// A dataset that cannot be loaded at all is reported as empty rather
    /// than aborting the run; the failure is logged.
    pub async fn run(&self, path: &str) -> anyhow::Result<()> {
        let loaded = self
            .datasets
            .try_get_with(path.to_string(), self.load_dataset(path.to_string()))
            .await;

        let dataset = match loaded {
            Ok(dataset) => dataset,
            Err(error) => {
                error!("Could not load dataset at path: {path} | {error}");
                Arc::new(Dataset::new())
            }
        };

        self.process_reports(dataset).await;

        Ok(())
    }

    async fn load_dataset(&self, path: String) -> Result<Arc<Dataset>, DatasetError> {
        let (sender, mut receiver) = mpsc::channel::<Transaction>(self.backpressure);
        let reader = Self::spawn_csv_reader(path, sender);
        let mut dataset = Dataset::new();

        while let Some(transaction) = receiver.recv().await {
            if let Err(error) = dataset.push(transaction) {
                warn!("{error}");
            }
        }

        reader.await??;

        Ok(Arc::new(dataset))
    }

    fn spawn_csv_reader(path: String, sender: mpsc::Sender<Transaction>) -> JoinHandle<Result<(), DatasetError>> {
        spawn_blocking(move || {
            let file = File::open(&path)?;

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            for result in reader.deserialize::<Transaction>() {
                match result {
                    Ok(transaction) => {
                        if sender.blocking_send(transaction).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("CSV deserialization error: {error}");
                    }
                }
            }

            Ok(())
        })
    }

    async fn process_reports(&self, dataset: Arc<Dataset>) {
        let tasks: Vec<_> = ReportKind::ALL
            .into_iter()
            .map(|kind| {
                let dataset = dataset.clone();
                let store = self.store.clone();
                let params = self.params.clone();

                spawn(async move {
                    store.save(build_report(kind, dataset.rows(), &params));
                })
            })
            .collect();

        for task in tasks {
            if let Err(error) = task.await {
                error!("A report task did not finish gracefully: {error:?}");
            }
        }
    }
}
