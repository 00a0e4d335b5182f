/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::Cashback;
use super::time::Timestamp;

/// Customer and the customer's accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserInfo {
    pub name: String,
    /// URL the bank calls with new transactions.
    pub web_hook_url: String,
    pub accounts: Vec<Account>,
}

/// Customer's account. Monetary amounts are in minimal units (cents of the
/// corresponding currency).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub balance: i64,
    pub credit_limit: i64,
    /// Currency code in ISO 4217.
    pub currency_code: i32,
    pub cashback_type: Cashback,
}

/// One transaction entry. Monetary amounts are in minimal units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatementItem {
    pub id: String,
    /// When the transaction was made, Unix epoch seconds.
    pub time: Timestamp,
    pub description: String,
    /// Merchant Category Code
    pub mcc: i32,
    /// Authorization hold state.
    pub hold: bool,
    /// Amount in account currency.
    pub amount: i64,
    /// Amount in transaction currency.
    pub operation_amount: i64,
    pub currency_code: i32,
    pub commission_rate: i64,
    pub cashback_amount: i64,
    pub balance: i64,
}

/// Single currency rate at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrencyInfo {
    pub currency_code_a: i32,
    pub currency_code_b: i32,
    pub date: Timestamp,
    pub rate_sell: f64,
    pub rate_buy: f64,
    pub rate_cross: f64,
}

/// Inbound webhook payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: WebhookStatementItem,
}

/// Transaction item carried by a webhook event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookStatementItem {
    #[serde(rename = "account")]
    pub account_id: String,
    #[serde(rename = "statementItem")]
    pub statement_item: StatementItem,
}

/// Shape the bank uses to report failures.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(rename = "errorDescription", default)]
    pub description: String,
}
