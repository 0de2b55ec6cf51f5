//! Batched import of coordinate streams
//!
//! This module groups decoded coordinates into batches, submits them through
//! an [`ImportSink`] from a dedicated task, and joins that task with the
//! progress monitor once the status channel closes.

use crate::error::ImportError;
use crate::metrics::MetricsCollector;
use crate::progress::{MonitorReport, ProgressMonitor};
use csv_types::{CoordinateReader, RecordError};
use pilosa_sink::{ImportSink, SinkError};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use sync_core::{ConfigError, Coordinate, ImportStatusUpdate};
use tokio::sync::mpsc;
use tracing::{debug, info};

pub const DEFAULT_BATCH_SIZE: usize = 1000;
pub const DEFAULT_STATUS_CAPACITY: usize = 1000;
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Upper bound on the up-front batch allocation
const MAX_PREALLOCATED: usize = 64 * 1024;

/// Configuration for an import run
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of coordinates submitted per request
    pub batch_size: usize,

    /// Capacity of the status channel between importer and monitor
    pub status_capacity: usize,

    /// How long the monitor sleeps after redrawing
    pub refresh_interval: Duration,

    /// Optional path to emit metrics during execution
    pub emit_metrics: Option<PathBuf>,

    /// Hide the live progress line
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            status_capacity: DEFAULT_STATUS_CAPACITY,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            emit_metrics: None,
            quiet: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(zero_not_allowed("BATCH_SIZE"));
        }
        if self.status_capacity == 0 {
            return Err(zero_not_allowed("status capacity"));
        }
        Ok(())
    }
}

fn zero_not_allowed(name: &str) -> ConfigError {
    ConfigError::OutOfRange {
        name: name.to_string(),
        constraint: "at least 1".to_string(),
        value: "0".to_string(),
    }
}

/// What the importer submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub records: u64,
    pub batches: u64,
    pub elapsed: Duration,
}

/// Outcome of a complete run: the importer's and the monitor's accounting
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub summary: ImportSummary,
    pub monitor: MonitorReport,
}

/// Submit `records` to `sink` in batches of exactly `batch_size`, except
/// for a shorter final batch.
///
/// One status update is sent per acknowledged batch. The first failing
/// record or submission ends the import; nothing after it is submitted.
pub async fn import_records<S, I>(
    sink: &S,
    records: I,
    batch_size: usize,
    status: &mpsc::Sender<ImportStatusUpdate>,
) -> Result<ImportSummary, ImportError>
where
    S: ImportSink + ?Sized,
    I: IntoIterator<Item = Result<Coordinate, RecordError>>,
{
    if batch_size == 0 {
        return Err(zero_not_allowed("BATCH_SIZE").into());
    }

    let start = Instant::now();
    let mut batch: Vec<Coordinate> = Vec::with_capacity(batch_size.min(MAX_PREALLOCATED));
    let mut batch_index: u64 = 0;
    let mut total: u64 = 0;

    for record in records {
        batch.push(record?);

        if batch.len() >= batch_size {
            total += submit_batch(sink, &batch, batch_index, status).await? as u64;
            batch_index += 1;
            batch.clear();
        }
    }

    if !batch.is_empty() {
        total += submit_batch(sink, &batch, batch_index, status).await? as u64;
        batch_index += 1;
    }

    Ok(ImportSummary {
        records: total,
        batches: batch_index,
        elapsed: start.elapsed(),
    })
}

async fn submit_batch<S: ImportSink + ?Sized>(
    sink: &S,
    batch: &[Coordinate],
    batch_index: u64,
    status: &mpsc::Sender<ImportStatusUpdate>,
) -> Result<usize, ImportError> {
    let started = Instant::now();
    let acknowledged = sink.import_batch(batch).await?;
    if acknowledged != batch.len() {
        return Err(SinkError::ShortAcknowledgement {
            submitted: batch.len(),
            acknowledged,
        }
        .into());
    }
    let elapsed = started.elapsed();
    debug!(
        "Batch {batch_index}: {acknowledged} records acknowledged in {:?}",
        elapsed
    );

    status
        .send(ImportStatusUpdate::new(batch_index, acknowledged, elapsed))
        .await
        .map_err(|_| ImportError::MonitorClosed)?;

    Ok(acknowledged)
}

/// Run a complete import of `records` into `sink`.
///
/// The schema is ensured first. Submission then runs on its own task while
/// the calling task drives the progress monitor until the importer drops
/// its sender.
pub async fn sync_records<S, I>(
    sink: Arc<S>,
    records: I,
    config: &Config,
) -> Result<ImportReport, ImportError>
where
    S: ImportSink + ?Sized + 'static,
    I: IntoIterator<Item = Result<Coordinate, RecordError>> + Send + 'static,
    I::IntoIter: Send,
{
    config.validate()?;

    info!("Starting bit import");
    info!("Batch size: {}", config.batch_size);

    sink.ensure_schema().await?;

    // Start metrics collection if requested
    let metrics = config.emit_metrics.as_ref().map(|metrics_path| {
        info!("Metrics emission enabled: {}", metrics_path.display());
        let collector = MetricsCollector::new(metrics_path.clone());
        let task = collector.start_emission_task(Duration::from_secs(1));
        (collector, task)
    });

    let (tx, rx) = mpsc::channel(config.status_capacity);
    let batch_size = config.batch_size;
    // Records are pulled from a blocking reader on this task. On the
    // multi-threaded runtime the monitor keeps its own worker meanwhile.
    let importer = tokio::spawn(async move {
        let result = import_records(sink.as_ref(), records, batch_size, &tx).await;
        drop(tx);
        result
    });

    let mut monitor = ProgressMonitor::new(config.refresh_interval, config.quiet);
    if let Some((ref collector, _)) = metrics {
        monitor = monitor.with_metrics(collector.clone());
    }
    let monitor_report = monitor.run(rx).await;

    // Stop periodic emission, then record the final totals
    if let Some((collector, task)) = metrics {
        task.abort();
        let _ = task.await;
        collector.write_final_snapshot().await?;
    }

    let summary = importer
        .await
        .map_err(|e| ImportError::TaskFailed(e.to_string()))??;

    if summary.records != monitor_report.total_imported {
        return Err(ImportError::AccountingMismatch {
            submitted: summary.records,
            reported: monitor_report.total_imported,
        });
    }

    info!(
        "Bit import completed: {} records in {} batches",
        summary.records, summary.batches
    );

    Ok(ImportReport {
        summary,
        monitor: monitor_report,
    })
}

/// Import CSV coordinates read from `reader`
///
/// `reader` is a blocking reader (a file or stdin) drained on the importer
/// task, so callers should run on the multi-threaded runtime.
pub async fn sync<S>(
    sink: Arc<S>,
    reader: Box<dyn Read + Send>,
    config: &Config,
) -> Result<ImportReport, ImportError>
where
    S: ImportSink + ?Sized + 'static,
{
    sync_records(sink, CoordinateReader::new(reader), config).await
}
