//! Sink that acknowledges everything without talking to a service.

use crate::error::SinkError;
use crate::traits::ImportSink;
use std::sync::atomic::{AtomicU64, Ordering};
use sync_core::Coordinate;
use tracing::debug;

/// Accepts every batch and only counts what it was given.
#[derive(Debug, Default)]
pub struct DryRunSink {
    batches: AtomicU64,
    records: AtomicU64,
}

impl DryRunSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of batches seen so far
    pub fn batches(&self) -> u64 {
        self.batches.load(Ordering::Relaxed)
    }

    /// Number of coordinates seen so far
    pub fn records(&self) -> u64 {
        self.records.load(Ordering::Relaxed)
    }
}

#[async_trait::async_trait]
impl ImportSink for DryRunSink {
    async fn ensure_schema(&self) -> Result<(), SinkError> {
        debug!("Dry run: skipping schema sync");
        Ok(())
    }

    async fn import_batch(&self, batch: &[Coordinate]) -> Result<usize, SinkError> {
        debug!("Dry run: would import batch of {} records", batch.len());
        self.batches.fetch_add(1, Ordering::Relaxed);
        self.records.fetch_add(batch.len() as u64, Ordering::Relaxed);
        Ok(batch.len())
    }
}
