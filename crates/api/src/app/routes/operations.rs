use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use bankledger_core::DomainError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::CustomerContext;

pub async fn deposit(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<CustomerContext>,
    Json(body): Json<dto::DepositRequest>,
) -> axum::response::Response {
    let Some(amount) = body.amount else {
        return errors::domain_error_to_response(DomainError::missing("amount"));
    };
    let mut description = body.description;

    let result = services.store().modify(ctx.customer_id(), &mut |customer| {
        customer
            .deposit(amount, description.take(), Utc::now())
            .map(|_| ())
    });
    if let Err(e) = result {
        tracing::warn!(customer_id = %ctx.customer_id(), %amount, "deposit rejected: {e}");
        return errors::domain_error_to_response(e);
    }

    tracing::info!(customer_id = %ctx.customer_id(), %amount, "deposit recorded");
    dto::json_message(StatusCode::CREATED, "Deposit successfully created")
}

pub async fn withdraw(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<CustomerContext>,
    Json(body): Json<dto::WithdrawRequest>,
) -> axum::response::Response {
    let Some(amount) = body.amount else {
        return errors::domain_error_to_response(DomainError::missing("amount"));
    };

    // Balance check and append happen under the same store lock.
    let result = services.store().modify(ctx.customer_id(), &mut |customer| {
        customer.withdraw(amount, Utc::now()).map(|_| ())
    });
    if let Err(e) = result {
        tracing::warn!(customer_id = %ctx.customer_id(), %amount, "withdraw rejected: {e}");
        return errors::domain_error_to_response(e);
    }

    tracing::info!(customer_id = %ctx.customer_id(), %amount, "withdraw recorded");
    dto::json_message(StatusCode::CREATED, "Withdraw successfully created")
}

pub async fn get_balance(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<CustomerContext>,
) -> axum::response::Response {
    let customer = match services.store().get(ctx.customer_id()) {
        Some(customer) => customer,
        None => return errors::domain_error_to_response(DomainError::CustomerNotFound),
    };

    match customer.balance() {
        Ok(balance) => (StatusCode::OK, Json(dto::balance_to_json(balance))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
