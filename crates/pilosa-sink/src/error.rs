//! Errors reported by import sinks.

/// Failure talking to the import service.
///
/// Every variant is fatal for an import run.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The service could not be reached
    #[error("Failed to reach import service at {addr}: {message}")]
    Connect { addr: String, message: String },

    /// The service answered with a non-success status
    #[error("Import service returned {status} for {operation}: {body}")]
    Status {
        operation: String,
        status: u16,
        body: String,
    },

    /// The import target is missing after schema sync
    #[error("Schema mismatch: {0}")]
    Schema(String),

    /// The service answered with something that could not be understood
    #[error("Unexpected response for {operation}: {message}")]
    Protocol { operation: String, message: String },

    /// The service acknowledged a different number of records than submitted
    #[error("Import service acknowledged {acknowledged} of {submitted} records")]
    ShortAcknowledgement { submitted: usize, acknowledged: usize },
}
