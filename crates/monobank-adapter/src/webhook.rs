/*
[INPUT]:  Inbound webhook bodies from the bank
[OUTPUT]: Typed webhook events fanned out over a bounded channel
[POS]:    Webhook layer - inverted flow (bank calls us)
[UPDATE]: When the inbound shape or the fan-out semantics change
*/

use std::sync::Arc;

use reqwest::StatusCode;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::http::codec::Codec;
use crate::http::error::{MonoError, Result};
use crate::http::personal::Personal;
use crate::http::transport::BodyStream;
use crate::types::WebhookEvent;

impl Personal {
    /// Decode one inbound webhook body into a typed event.
    ///
    /// The body is drained and closed before decoding; read, close, and
    /// decode failures carry distinct prefixes so callers can tell them
    /// apart.
    pub async fn parse_webhook(&self, body: impl BodyStream) -> Result<WebhookEvent> {
        parse_event(self.core().codec().as_ref(), body).await
    }

    /// Create the bounded event queue and the handler that feeds it.
    ///
    /// The handler responds 500 and drops the event when the body cannot be
    /// parsed, and responds 200 immediately on success while the enqueue runs
    /// on a separate task. The acknowledgment therefore does not guarantee
    /// the event reached a consumer; a full queue makes the background send
    /// wait, and a dropped receiver loses the event.
    pub fn listen_for_webhooks(&self) -> (mpsc::Receiver<WebhookEvent>, WebhookHandler) {
        let (events_tx, events_rx) = mpsc::channel(self.core().webhook_capacity());

        (
            events_rx,
            WebhookHandler {
                codec: self.core().codec(),
                events: events_tx,
            },
        )
    }
}

/// Per-registration handler for inbound webhook calls. Clone freely; all
/// clones feed the same queue.
#[derive(Clone)]
pub struct WebhookHandler {
    codec: Arc<dyn Codec>,
    events: mpsc::Sender<WebhookEvent>,
}

impl WebhookHandler {
    /// Handle one inbound call: parse the body, acknowledge, enqueue.
    ///
    /// Returns the status code to respond with. The enqueue is spawned so the
    /// acknowledgment is never held back by a slow consumer.
    pub async fn handle(&self, body: impl BodyStream) -> StatusCode {
        let event = match parse_event(self.codec.as_ref(), body).await {
            Ok(event) => event,
            Err(err) => {
                debug!(error = %err, "webhook body rejected");
                return StatusCode::INTERNAL_SERVER_ERROR;
            }
        };

        let events = self.events.clone();
        if events.capacity() == 0 {
            warn!("webhook queue is full, enqueue will wait for a consumer");
        }

        tokio::spawn(async move {
            if events.send(event).await.is_err() {
                warn!("webhook event dropped, receiver is gone");
            }
        });

        StatusCode::OK
    }
}

async fn parse_event(codec: &dyn Codec, mut body: impl BodyStream) -> Result<WebhookEvent> {
    let read = body.read_to_end().await;
    let closed = body.close().await;

    let bytes = read.map_err(MonoError::BodyRead)?;
    closed.map_err(MonoError::BodyClose)?;

    let value = codec.decode(&bytes).map_err(MonoError::Decode)?;
    serde_json::from_value(value).map_err(MonoError::Decode)
}
