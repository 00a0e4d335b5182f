/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for the endpoint clients
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use chrono::{DateTime, Utc};
use common::{personal_client, public_client, setup_mock_server, FAIL_RESPONSE_BODY};
use monobank_adapter::{ClientConfig, MonoError, Public, Timestamp, DEFAULT_DOMAIN};
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_public_client_creation() {
    let _client = assert_ok!(Public::new());
}

#[test]
fn test_default_config() {
    let config = ClientConfig::default();
    assert_eq!(config.domain, DEFAULT_DOMAIN);
    assert_eq!(config.webhook_capacity, 100);
}

#[tokio::test]
async fn test_currency_end_to_end() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/bank/currency"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"currencyCodeA":840,"currencyCodeB":980,"date":1552392228,"rateSell":27,"rateBuy":27.2,"rateCross":27.1}]"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let rates = assert_ok!(public_client(&server).currency().await);

    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0].currency_code_a, 840);
    assert_eq!(rates[0].currency_code_b, 980);
    assert_eq!(rates[0].date, Timestamp(1552392228));
    assert_eq!(rates[0].rate_sell, 27.0);
    assert_eq!(rates[0].rate_buy, 27.2);
    assert_eq!(rates[0].rate_cross, 27.1);
}

#[tokio::test]
async fn test_personal_calls_carry_token_header() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/personal/client-info"))
        .and(header("x-token", "api-token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"name":"deadbeef","webHookUrl":"","accounts":[]}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let info = assert_ok!(personal_client(&server).client_info().await);
    assert_eq!(info.name, "deadbeef");
}

#[tokio::test]
async fn test_remote_error_surfaces_description_verbatim() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(400).set_body_raw(FAIL_RESPONSE_BODY, "application/json"),
        )
        .mount(&server)
        .await;

    let err = personal_client(&server).client_info().await.unwrap_err();

    assert!(matches!(err, MonoError::Remote(_)));
    assert_eq!(err.to_string(), "mono error: go away");
}

#[tokio::test]
async fn test_transport_failure_is_wrapped() {
    // Point at a server that is not there.
    let client = Public::with_config(ClientConfig {
        domain: "http://127.0.0.1:9".to_string(),
        ..ClientConfig::default()
    })
    .expect("client init");

    let err = client.currency().await.unwrap_err();

    assert!(matches!(err, MonoError::Transport(_)));
    assert!(err.to_string().starts_with("failed to make request: "));
}

#[tokio::test]
async fn test_statements_validation_precedes_transport() {
    let server = setup_mock_server().await;
    let client = personal_client(&server);

    let from = DateTime::<Utc>::from_timestamp(1_554_000_000, 0).unwrap();
    let to = DateTime::<Utc>::from_timestamp(1_554_466_347, 0).unwrap();

    let err = client.statements("", from, to).await.unwrap_err();
    assert_eq!(err.to_string(), "account must be set");

    let err = client.statements("deadbeef", to, from).await.unwrap_err();
    assert_eq!(err.to_string(), "from must be before to");

    assert!(server.received_requests().await.unwrap().is_empty());
}
