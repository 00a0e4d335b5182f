/*
[INPUT]:  Inbound webhook fixtures
[OUTPUT]: Test results for the webhook receiver
[POS]:    Integration tests - webhook decode/dispatch path
[UPDATE]: When the inbound shape or fan-out behavior change
*/

mod common;

use std::time::Duration;

use common::WEBHOOK_BODY;
use monobank_adapter::{BufferedBody, Personal};
use reqwest::StatusCode;
use tokio::time::timeout;
use tokio_test::assert_ok;

#[tokio::test]
async fn test_parse_webhook_yields_typed_event() {
    let client = Personal::new("api-token").expect("client init");

    let event = assert_ok!(client.parse_webhook(BufferedBody::from(WEBHOOK_BODY)).await);

    assert_eq!(event.event_type, "StatementItem");
    assert_eq!(event.data.account_id, "deadbeef");
    assert_eq!(event.data.statement_item.mcc, 7997);
    assert_eq!(event.data.statement_item.amount, -95_000);
}

#[tokio::test]
async fn test_listener_delivers_through_queue() {
    let client = Personal::new("api-token").expect("client init");
    let (mut events, handler) = client.listen_for_webhooks();

    let status = handler.handle(BufferedBody::from(WEBHOOK_BODY)).await;
    assert_eq!(status, StatusCode::OK);

    let event = timeout(Duration::from_millis(100), events.recv())
        .await
        .expect("died waiting on the event")
        .expect("queue closed");

    assert_eq!(event.data.account_id, "deadbeef");
}

#[tokio::test]
async fn test_listener_drops_malformed_bodies() {
    let client = Personal::new("api-token").expect("client init");
    let (mut events, handler) = client.listen_for_webhooks();

    let status = handler.handle(BufferedBody::from("{broken")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let nothing = timeout(Duration::from_millis(50), events.recv()).await;
    assert!(nothing.is_err(), "no event should have been queued");
}

#[tokio::test]
async fn test_handler_clones_feed_one_queue() {
    let client = Personal::new("api-token").expect("client init");
    let (mut events, handler) = client.listen_for_webhooks();
    let second = handler.clone();

    assert_eq!(
        handler.handle(BufferedBody::from(WEBHOOK_BODY)).await,
        StatusCode::OK
    );
    assert_eq!(
        second.handle(BufferedBody::from(WEBHOOK_BODY)).await,
        StatusCode::OK
    );

    for _ in 0..2 {
        timeout(Duration::from_millis(100), events.recv())
            .await
            .expect("died waiting on the event")
            .expect("queue closed");
    }
}
