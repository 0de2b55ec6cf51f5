//! Bit import pipeline for Pilosa
//!
//! This crate streams `row,col` records from a reader, groups them into
//! bounded batches, submits each batch through an [`pilosa_sink::ImportSink`],
//! and renders live throughput from a concurrently running progress monitor.
//!
//! ```text
//!  reader ──▶ CoordinateReader ──▶ import_records ──▶ ImportSink
//!                                        │
//!                          mpsc (bounded, ImportStatusUpdate)
//!                                        ▼
//!                                 ProgressMonitor ──▶ one-line display
//! ```

mod error;
mod metrics;
mod progress;
mod sync;

pub use error::ImportError;
pub use metrics::{MetricsCollector, MetricsEntry};
pub use progress::{progress_line, MonitorReport, ProgressMonitor};
pub use sync::{
    import_records, sync, sync_records, Config, ImportReport, ImportSummary,
    DEFAULT_BATCH_SIZE, DEFAULT_REFRESH_INTERVAL, DEFAULT_STATUS_CAPACITY,
};

// Re-export file source types for convenience
pub use pilosa_sync_file::{FileSink, FileSource, OutputWriter, DEFAULT_BUFFER_SIZE};
