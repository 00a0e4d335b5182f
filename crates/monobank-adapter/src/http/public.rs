/*
[INPUT]:  No parameters (public endpoints take no auth)
[OUTPUT]: Currency rates published by the bank
[POS]:    HTTP layer - public endpoints (no token required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use std::sync::Arc;

use reqwest::Method;

use crate::http::client::{ClientConfig, MonoCore};
use crate::http::codec::Codec;
use crate::http::error::Result;
use crate::http::transport::Transport;
use crate::types::CurrencyInfo;

/// Client for the public Monobank API. No token is attached to its requests.
pub struct Public {
    core: MonoCore,
}

impl Public {
    /// Create a public client with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a public client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            core: MonoCore::new(config, None)?,
        })
    }

    /// Replace the default transport, e.g. with a fake for testing.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.core.set_transport(transport);
        self
    }

    /// Replace the default JSON codec.
    pub fn with_codec(mut self, codec: Arc<dyn Codec>) -> Self {
        self.core.set_codec(codec);
        self
    }

    /// Currency rates.
    ///
    /// GET /bank/currency
    pub async fn currency(&self) -> Result<Vec<CurrencyInfo>> {
        self.core.request(Method::GET, "/bank/currency", None).await
    }
}
