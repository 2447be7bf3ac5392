use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use bankledger_core::DomainError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::CustomerContext;

pub async fn get_statement(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<CustomerContext>,
) -> axum::response::Response {
    match services.store().get(ctx.customer_id()) {
        Some(customer) => (StatusCode::OK, Json(customer.statement())).into_response(),
        None => errors::domain_error_to_response(DomainError::CustomerNotFound),
    }
}

/// `GET /statement/date?date=YYYY-MM-DD`: operations recorded on that calendar day.
pub async fn get_statement_by_date(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<CustomerContext>,
    Query(query): Query<dto::StatementDateQuery>,
) -> axum::response::Response {
    let date = match query.parse_date() {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.store().get(ctx.customer_id()) {
        Some(customer) => (StatusCode::OK, Json(customer.statement_on(date))).into_response(),
        None => errors::domain_error_to_response(DomainError::CustomerNotFound),
    }
}
