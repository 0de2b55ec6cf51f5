//! `ImportSink` implementation for [`PilosaClient`].

use crate::connect::PilosaClient;
use crate::query::{set_bit_query, QueryResponse};
use pilosa_sink::{ImportSink, SinkError};
use sync_core::Coordinate;

#[async_trait::async_trait]
impl ImportSink for PilosaClient {
    async fn ensure_schema(&self) -> Result<(), SinkError> {
        if self.create_index().await? {
            tracing::info!("Created index '{}'", self.target.index);
        }
        if self.create_frame().await? {
            tracing::info!(
                "Created frame '{}' in index '{}'",
                self.target.frame,
                self.target.index
            );
        }

        let schema = self.schema().await?;
        if !schema.has_frame(&self.target.index, &self.target.frame) {
            return Err(SinkError::Schema(format!(
                "frame '{}' not found in index '{}' after schema sync",
                self.target.frame, self.target.index
            )));
        }
        Ok(())
    }

    async fn import_batch(&self, batch: &[Coordinate]) -> Result<usize, SinkError> {
        if batch.is_empty() {
            return Ok(0);
        }

        let operation = "import batch";
        let path = format!("/index/{}/query", self.target.index);
        let request = self
            .http
            .post(self.endpoint(&path))
            .body(set_bit_query(&self.target.frame, batch));
        let (status, body) = self.send(request, operation).await?;

        if !status.is_success() {
            return Err(SinkError::Status {
                operation: operation.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let response: QueryResponse =
            serde_json::from_str(&body).map_err(|e| SinkError::Protocol {
                operation: operation.to_string(),
                message: e.to_string(),
            })?;
        if let Some(error) = response.error {
            return Err(SinkError::Protocol {
                operation: operation.to_string(),
                message: error,
            });
        }

        tracing::debug!("Imported batch of {} bits", response.results.len());
        Ok(response.results.len())
    }
}
