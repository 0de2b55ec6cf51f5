//! ImportSink trait definition.

use crate::error::SinkError;
use sync_core::Coordinate;

/// Trait for writing coordinates to the import service.
///
/// # Usage Pattern
///
/// The CLI picks the implementation once (HTTP client or dry run) and hands
/// it to the import pipeline as an `Arc<dyn ImportSink>`:
///
/// ```ignore
/// let sink: Arc<dyn ImportSink> = Arc::new(DryRunSink::new());
/// // sync_records ensures the schema once, then the importer task
/// // calls import_batch for every batch
/// sink.ensure_schema().await?;
/// let acknowledged = sink.import_batch(&batch).await?;
/// ```
#[async_trait::async_trait]
pub trait ImportSink: Send + Sync {
    /// Make sure the import target exists.
    ///
    /// Idempotent: creates what is missing, then verifies the result.
    async fn ensure_schema(&self) -> Result<(), SinkError>;

    /// Import one batch of coordinates.
    ///
    /// Returns the number of coordinates the service acknowledged. Returns
    /// only after the service has finished with the whole batch.
    async fn import_batch(&self, batch: &[Coordinate]) -> Result<usize, SinkError>;
}
