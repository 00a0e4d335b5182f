/*
[INPUT]:  Client configuration (domain, token, timeouts, queue capacity)
[OUTPUT]: Configured request executor shared by every endpoint
[POS]:    HTTP layer - core request/response pipeline
[UPDATE]: When the pipeline steps or configuration surface change
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::http::codec::{Codec, JsonCodec};
use crate::http::error::{MonoError, Result};
use crate::http::transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
use crate::types::models::ErrorEnvelope;

/// Domain used by default to call the bank.
pub const DEFAULT_DOMAIN: &str = "https://api.monobank.ua";

/// Default capacity of the webhook event queue.
pub const DEFAULT_WEBHOOK_CAPACITY: usize = 100;

const TOKEN_HEADER: HeaderName = HeaderName::from_static("x-token");

/// Client configuration, set once at construction and never mutated after.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base domain in `scheme://host` format.
    pub domain: String,
    /// Capacity of the queue returned by `listen_for_webhooks`.
    pub webhook_capacity: usize,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            webhook_capacity: DEFAULT_WEBHOOK_CAPACITY,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// The request executor: transport + codec + auth header + status branching,
/// one call contract used by every endpoint.
///
/// Endpoint types own a configured core each; the core holds no mutable state
/// and is safe for concurrent use.
pub struct MonoCore {
    domain: String,
    token: Option<String>,
    webhook_capacity: usize,
    transport: Arc<dyn Transport>,
    codec: Arc<dyn Codec>,
}

impl MonoCore {
    pub(crate) fn new(config: ClientConfig, token: Option<String>) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout, config.connect_timeout)
            .map_err(|err| MonoError::Config(err.to_string()))?;

        Ok(Self {
            domain: config.domain,
            token,
            webhook_capacity: config.webhook_capacity,
            transport: Arc::new(transport),
            codec: Arc::new(JsonCodec),
        })
    }

    pub(crate) fn set_transport(&mut self, transport: Arc<dyn Transport>) {
        self.transport = transport;
    }

    pub(crate) fn set_codec(&mut self, codec: Arc<dyn Codec>) {
        self.codec = codec;
    }

    pub(crate) fn codec(&self) -> Arc<dyn Codec> {
        Arc::clone(&self.codec)
    }

    pub(crate) fn webhook_capacity(&self) -> usize {
        self.webhook_capacity
    }

    /// Execute one request and decode the payload into `T`.
    ///
    /// Error order is fixed: construction, dispatch, body read, body close,
    /// status branch, decode. The body is closed on every exit path, and a
    /// read failure takes precedence over a close failure. Exactly one decode
    /// happens per call: the error envelope on a non-200 status, the success
    /// payload otherwise.
    pub(crate) async fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = Url::parse(&format!("{}{}", self.domain, path))?;

        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(token)
                .map_err(|_| MonoError::Validation("token contains invalid header characters"))?;
            headers.insert(TOKEN_HEADER, value);
        }

        let request = ApiRequest {
            method,
            url,
            headers,
            body,
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(MonoError::Transport)?;

        let ApiResponse { status, mut body } = response;

        let read = body.read_to_end().await;
        let closed = body.close().await;

        let bytes = read.map_err(MonoError::BodyRead)?;
        closed.map_err(MonoError::BodyClose)?;

        if status != StatusCode::OK {
            let envelope: ErrorEnvelope = self.decode(&bytes)?;
            return Err(MonoError::Remote(envelope.description));
        }

        self.decode(&bytes)
    }

    pub(crate) fn decode<T>(&self, bytes: &[u8]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let value = self.codec.decode(bytes).map_err(MonoError::Decode)?;
        serde_json::from_value(value).map_err(MonoError::Decode)
    }
}
