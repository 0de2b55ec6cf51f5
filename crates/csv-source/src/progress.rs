//! Live progress display for an import run.
//!
//! The monitor owns the receiving half of the status channel. It drains
//! whatever updates are queued, redraws one overwriting line when the
//! channel is momentarily empty, then sleeps for the refresh interval.

use crate::metrics::MetricsCollector;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::{Duration, Instant};
use sync_core::ImportStatusUpdate;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{debug, warn};

/// Format the live status line.
///
/// Seconds and rate are truncated to whole numbers; the rate is 0 until
/// at least a millisecond has elapsed.
pub fn progress_line(total: u64, elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    let rate = if elapsed.as_millis() > 0 {
        (total as f64 / secs) as u64
    } else {
        0
    };
    format!(
        "Imported {total} bits in {} s. Speed: {rate} bits/s.",
        elapsed.as_secs()
    )
}

/// What the monitor observed by the time the channel closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorReport {
    pub total_imported: u64,
    pub batches: u64,
    pub elapsed: Duration,
}

pub struct ProgressMonitor {
    refresh_interval: Duration,
    progress_bar: ProgressBar,
    metrics: Option<MetricsCollector>,
}

impl ProgressMonitor {
    /// Create a monitor drawing to stdout, or drawing nothing when `quiet`
    pub fn new(refresh_interval: Duration, quiet: bool) -> Self {
        let target = if quiet {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stdout()
        };
        let progress_bar = ProgressBar::with_draw_target(None, target);
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );

        Self {
            refresh_interval,
            progress_bar,
            metrics: None,
        }
    }

    /// Feed every accounted batch into `collector` as well
    pub fn with_metrics(mut self, collector: MetricsCollector) -> Self {
        self.metrics = Some(collector);
        self
    }

    /// Drain `receiver` until every sender is dropped.
    pub async fn run(self, mut receiver: mpsc::Receiver<ImportStatusUpdate>) -> MonitorReport {
        let start = Instant::now();
        let mut total_imported: u64 = 0;
        let mut batches: u64 = 0;

        loop {
            match receiver.try_recv() {
                Ok(update) => {
                    if update.batch_index != batches {
                        warn!(
                            "Status update out of order: expected batch {batches}, got {}",
                            update.batch_index
                        );
                    }
                    debug!(
                        "Batch {} imported {} bits in {:?}",
                        update.batch_index, update.imported_count, update.elapsed
                    );
                    total_imported += update.imported_count as u64;
                    batches += 1;
                    if let Some(ref collector) = self.metrics {
                        collector.add_batch(update.imported_count as u64);
                    }
                }
                Err(TryRecvError::Empty) => {
                    self.progress_bar
                        .set_message(progress_line(total_imported, start.elapsed()));
                    self.progress_bar.tick();
                    tokio::time::sleep(self.refresh_interval).await;
                }
                Err(TryRecvError::Disconnected) => break,
            }
        }

        let elapsed = start.elapsed();
        self.progress_bar
            .finish_with_message(progress_line(total_imported, elapsed));

        MonitorReport {
            total_imported,
            batches,
            elapsed,
        }
    }
}
