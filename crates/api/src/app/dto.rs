use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use bankledger_core::{DomainError, DomainResult};

// -------------------------
// Request DTOs
// -------------------------
//
// Every field is optional so that an absent field surfaces as `MissingField`
// (400 with the ledger's message) instead of an extractor rejection.

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub cpf: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub amount: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    pub date: Option<String>,
}

impl StatementDateQuery {
    /// Calendar date from `?date=YYYY-MM-DD`.
    pub fn parse_date(&self) -> DomainResult<NaiveDate> {
        let raw = self
            .date
            .as_deref()
            .filter(|d| !d.is_empty())
            .ok_or_else(|| DomainError::missing("date"))?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| DomainError::invalid("date"))
    }
}

/// Treat `None` and `""` alike, as a missing field.
pub fn required(value: Option<String>, field: &str) -> DomainResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DomainError::missing(field))
}

// -------------------------
// Responses
// -------------------------

/// `{"message": ...}` confirmation body used by every mutating route.
pub fn json_message(status: StatusCode, message: &'static str) -> axum::response::Response {
    (status, axum::Json(json!({ "message": message }))).into_response()
}

pub fn balance_to_json(balance: Decimal) -> serde_json::Value {
    json!({ "balance": balance })
}
