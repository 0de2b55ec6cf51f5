//! Address parsing and HTTP plumbing for one Pilosa server.

use crate::query::SchemaInfo;
use pilosa_sink::{SchemaTarget, SinkError};
use reqwest::{StatusCode, Url};
use std::time::Duration;
use sync_core::ConfigError;

/// Port Pilosa listens on when the address does not name one
pub const DEFAULT_PORT: u16 = 10101;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while constructing a [`PilosaClient`]
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// `PILOSA_ADDR` is not a usable host, host:port or URL
    #[error(transparent)]
    InvalidAddress(#[from] ConfigError),

    /// The underlying HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Turn `host`, `host:port` or a full `http(s)://` URL into a base URL.
///
/// The scheme defaults to `http` and the port to [`DEFAULT_PORT`].
pub fn parse_pilosa_addr(addr: &str) -> Result<Url, ConfigError> {
    let invalid = || ConfigError::OutOfRange {
        name: "PILOSA_ADDR".to_string(),
        constraint: "a host[:port] or http(s) URL".to_string(),
        value: addr.to_string(),
    };

    let trimmed = addr.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(invalid());
    }
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    // Url::port() hides an explicit default port, so look at the authority.
    let authority = with_scheme
        .split_once("://")
        .map(|(_, rest)| rest.split('/').next().unwrap_or(rest))
        .unwrap_or_default();
    let has_port = authority
        .rsplit_once(':')
        .map(|(_, port)| !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false);

    let mut url = Url::parse(&with_scheme).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    if !has_port {
        url.set_port(Some(DEFAULT_PORT)).map_err(|_| invalid())?;
    }
    Ok(url)
}

/// HTTP client for one Pilosa server and one import target
#[derive(Debug, Clone)]
pub struct PilosaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) target: SchemaTarget,
}

impl PilosaClient {
    /// Create a client; no request is made until the first operation
    pub fn new(addr: &str, target: SchemaTarget) -> Result<Self, ClientError> {
        let base_url = parse_pilosa_addr(addr)?;
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        tracing::debug!(
            "Pilosa client for {} (index: {}, frame: {})",
            base_url,
            target.index,
            target.frame
        );

        Ok(Self {
            http,
            base_url,
            target,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn target(&self) -> &SchemaTarget {
        &self.target
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    fn connect_error(&self, err: reqwest::Error) -> SinkError {
        SinkError::Connect {
            addr: self.base_url.to_string(),
            message: err.to_string(),
        }
    }

    /// Send a request and return the status and body text
    pub(crate) async fn send(
        &self,
        request: reqwest::RequestBuilder,
        operation: &str,
    ) -> Result<(StatusCode, String), SinkError> {
        let response = request.send().await.map_err(|e| self.connect_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.connect_error(e))?;
        tracing::trace!("{operation} -> {status}: {body}");
        Ok((status, body))
    }

    /// POST that treats 409 Conflict (already exists) as success
    async fn create_if_absent(&self, path: &str, operation: &str) -> Result<bool, SinkError> {
        let request = self
            .http
            .post(self.endpoint(path))
            .body(r#"{"options":{}}"#);
        let (status, body) = self.send(request, operation).await?;

        if status.is_success() {
            Ok(true)
        } else if status == StatusCode::CONFLICT {
            Ok(false)
        } else {
            Err(SinkError::Status {
                operation: operation.to_string(),
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Create the index if it does not exist; returns whether it was created
    pub async fn create_index(&self) -> Result<bool, SinkError> {
        let path = format!("/index/{}", self.target.index);
        self.create_if_absent(&path, "create index").await
    }

    /// Create the frame if it does not exist; returns whether it was created
    pub async fn create_frame(&self) -> Result<bool, SinkError> {
        let path = format!("/index/{}/frame/{}", self.target.index, self.target.frame);
        self.create_if_absent(&path, "create frame").await
    }

    /// Fetch the server schema
    pub async fn schema(&self) -> Result<SchemaInfo, SinkError> {
        let operation = "fetch schema";
        let (status, body) = self
            .send(self.http.get(self.endpoint("/schema")), operation)
            .await?;
        if !status.is_success() {
            return Err(SinkError::Status {
                operation: operation.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|e| SinkError::Protocol {
            operation: operation.to_string(),
            message: e.to_string(),
        })
    }
}
