//! Error taxonomy for an import run.

use csv_types::{MalformedReason, RecordError};
use pilosa_sink::SinkError;
use sync_core::ConfigError;

/// Errors that abort an import run.
///
/// None of these are retried; batches acknowledged before the failure
/// remain reported but the run as a whole fails.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// Bad batch size, channel capacity or target names
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// A source line failed to decode
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: MalformedReason },

    /// The import service failed or could not be reached
    #[error("Transport failure: {0}")]
    TransportFailure(#[from] SinkError),

    /// Reading the source failed
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The progress monitor stopped listening before the import finished
    #[error("Progress monitor closed the status channel")]
    MonitorClosed,

    /// The importer and the monitor disagree on the number of imported bits
    #[error("Importer submitted {submitted} bits but the monitor counted {reported}")]
    AccountingMismatch { submitted: u64, reported: u64 },

    /// The import task panicked or was cancelled
    #[error("Import task failed: {0}")]
    TaskFailed(String),
}

impl From<RecordError> for ImportError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Malformed { line, reason } => ImportError::MalformedRecord { line, reason },
            RecordError::Io(e) => ImportError::Io(e),
        }
    }
}
