/*
[INPUT]:  API token and query parameters (account, time window, webhook URL)
[OUTPUT]: Customer data (client info, statements) and webhook registration
[POS]:    HTTP layer - personal endpoints (require X-Token auth)
[UPDATE]: When adding new personal endpoints or changing query parameters
*/

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::de::IgnoredAny;

use crate::http::client::{ClientConfig, MonoCore};
use crate::http::codec::Codec;
use crate::http::error::{MonoError, Result};
use crate::http::transport::Transport;
use crate::types::{StatementItem, UserInfo};

/// Longest statement window the bank accepts: 31 days and 1 hour, in seconds.
/// Mirrors the remote service's own limit, not configurable.
pub const MAX_ALLOWED_DURATION: i64 = 2_682_000;

/// Client for the personal Monobank API. Every request carries the configured
/// token in the `X-Token` header.
pub struct Personal {
    core: MonoCore,
}

impl Personal {
    /// Create a personal client with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if `token` is empty. A missing token is programmer misuse, not
    /// a recoverable runtime condition.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a personal client with custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if `token` is empty.
    pub fn with_config(token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let token = token.into();
        assert!(!token.is_empty(), "api token is required");

        Ok(Self {
            core: MonoCore::new(config, Some(token))?,
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

    pub(crate) fn core(&self) -> &MonoCore {
        &self.core
    }

    /// Customer information and accounts.
    ///
    /// GET /personal/client-info
    pub async fn client_info(&self) -> Result<UserInfo> {
        self.core
            .request(Method::GET, "/personal/client-info", None)
            .await
    }

    /// Statements for the account within the `[from, to]` window.
    ///
    /// GET /personal/statement/{account}/{fromUnix}/{toUnix}
    ///
    /// The window is validated before any request is made: the account must
    /// be set, `from` must not be after `to`, and the window must not exceed
    /// [`MAX_ALLOWED_DURATION`] (boundary inclusive).
    pub async fn statements(
        &self,
        account: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<StatementItem>> {
        if account.is_empty() {
            return Err(MonoError::Validation("account must be set"));
        }

        if from > to {
            return Err(MonoError::Validation("from must be before to"));
        }

        if to.timestamp() - from.timestamp() > MAX_ALLOWED_DURATION {
            return Err(MonoError::Validation("max allowed duration exceeded"));
        }

        let path = format!(
            "/personal/statement/{}/{}/{}",
            account,
            from.timestamp(),
            to.timestamp()
        );

        self.core.request(Method::GET, &path, None).await
    }

    /// Statements from `from` until now.
    pub async fn latest_statements(
        &self,
        account: &str,
        from: DateTime<Utc>,
    ) -> Result<Vec<StatementItem>> {
        self.statements(account, from, Utc::now()).await
    }

    /// Register the URL the bank should call with new transactions.
    ///
    /// POST /personal/webhook
    ///
    /// The body is hand-assembled, so embedded double quotes and newlines in
    /// the URL are escaped before insertion. The response payload is ignored.
    pub async fn set_webhook(&self, webhook: &str) -> Result<()> {
        let escaped = webhook.replace('"', "\\\"").replace('\n', "\\n");
        let body = format!(r#"{{"webHookUrl":"{escaped}"}}"#).into_bytes();

        let _: IgnoredAny = self
            .core
            .request(Method::POST, "/personal/webhook", Some(body))
            .await?;

        Ok(())
    }
}
