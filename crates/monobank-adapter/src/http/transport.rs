/*
[INPUT]:  Request descriptors built by the executor
[OUTPUT]: Raw responses (status + drainable body stream)
[POS]:    HTTP layer - transport seam, swappable for testing
[UPDATE]: When the request/response shapes or the default reqwest wiring change
*/

use std::io;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode, Url};

/// Boxed error type carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Request descriptor handed to the transport. Constructed per call,
/// consumed immediately.
#[derive(Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Transport-level response envelope. The executor owns it transiently and
/// must drain and close the body on every exit path.
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Box<dyn BodyStream>,
}

/// A response (or inbound webhook) body that can be drained once and closed.
///
/// Read and close failures are surfaced separately; the executor reports the
/// read failure when both fire.
#[async_trait]
pub trait BodyStream: Send {
    async fn read_to_end(&mut self) -> io::Result<Vec<u8>>;
    async fn close(&mut self) -> io::Result<()>;
}

/// Transport capability: send one request, get one raw response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, BoxError>;
}

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self, BoxError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, BoxError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        Ok(ApiResponse {
            status,
            body: Box::new(ReqwestBody {
                response: Some(response),
            }),
        })
    }
}

/// Adapts a `reqwest::Response` to the `BodyStream` contract. reqwest closes
/// the connection on drop, so `close` has nothing left to fail on.
struct ReqwestBody {
    response: Option<reqwest::Response>,
}

#[async_trait]
impl BodyStream for ReqwestBody {
    async fn read_to_end(&mut self) -> io::Result<Vec<u8>> {
        match self.response.take() {
            Some(response) => response
                .bytes()
                .await
                .map(|bytes| bytes.to_vec())
                .map_err(io::Error::other),
            None => Ok(Vec::new()),
        }
    }

    async fn close(&mut self) -> io::Result<()> {
        self.response.take();
        Ok(())
    }
}

/// In-memory body, used for inbound webhook payloads already held as bytes.
pub struct BufferedBody {
    bytes: Option<Vec<u8>>,
}

impl BufferedBody {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Some(bytes.into()),
        }
    }
}

impl From<Vec<u8>> for BufferedBody {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&str> for BufferedBody {
    fn from(body: &str) -> Self {
        Self::new(body.as_bytes().to_vec())
    }
}

#[async_trait]
impl BodyStream for BufferedBody {
    async fn read_to_end(&mut self) -> io::Result<Vec<u8>> {
        Ok(self.bytes.take().unwrap_or_default())
    }

    async fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}
