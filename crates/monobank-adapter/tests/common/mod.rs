/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities and fixtures
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for monobank-adapter tests

use monobank_adapter::{ClientConfig, Personal, Public};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Public client pointed at the mock server
#[allow(dead_code)]
pub fn public_client(server: &MockServer) -> Public {
    Public::with_config(ClientConfig {
        domain: server.uri(),
        ..ClientConfig::default()
    })
    .expect("public client init")
}

/// Personal client pointed at the mock server
#[allow(dead_code)]
pub fn personal_client(server: &MockServer) -> Personal {
    Personal::with_config(
        "api-token",
        ClientConfig {
            domain: server.uri(),
            ..ClientConfig::default()
        },
    )
    .expect("personal client init")
}

/// The bank's error envelope used by failure fixtures
#[allow(dead_code)]
pub const FAIL_RESPONSE_BODY: &str = r#"{"errorDescription":"go away"}"#;

/// Inbound webhook fixture
#[allow(dead_code)]
pub const WEBHOOK_BODY: &str = r#"{
    "type": "StatementItem",
    "data": {
        "account": "deadbeef",
        "statementItem": {
            "id": "ZuHWzqkKGVo=",
            "time": 1554466347,
            "description": "Покупка щастя",
            "mcc": 7997,
            "hold": false,
            "amount": -95000,
            "operationAmount": -95000,
            "currencyCode": 980,
            "commissionRate": 0,
            "cashbackAmount": 19000,
            "balance": 10050000
        }
    }
}"#;
