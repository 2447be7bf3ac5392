use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use bankledger_accounting::Customer;
use bankledger_core::{DomainError, TaxId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::CustomerContext;

pub async fn create_account(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateAccountRequest>,
) -> axum::response::Response {
    // Absent and empty fields get the same answer; `TaxId` and `Customer` own the checks.
    let opened = match (body.cpf, body.name) {
        (Some(cpf), Some(name)) => TaxId::parse(cpf).and_then(|cpf| Customer::open(cpf, name)),
        _ => Err(DomainError::missing("cpf or name")),
    };
    let customer = match opened {
        Ok(c) => c,
        Err(_) => return errors::domain_error_to_response(DomainError::missing("cpf or name")),
    };
    let customer_id = customer.id();

    if let Err(e) = services.store().insert(customer) {
        tracing::warn!("account creation rejected: {e}");
        return errors::domain_error_to_response(e);
    }

    tracing::info!(%customer_id, "customer created");
    dto::json_message(StatusCode::CREATED, "Customer successfully created")
}

pub async fn get_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<CustomerContext>,
) -> axum::response::Response {
    match services.store().get(ctx.customer_id()) {
        Some(customer) => (StatusCode::OK, Json(customer)).into_response(),
        None => errors::domain_error_to_response(DomainError::CustomerNotFound),
    }
}

pub async fn update_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<CustomerContext>,
    Json(body): Json<dto::UpdateAccountRequest>,
) -> axum::response::Response {
    let name = match dto::required(body.name, "name") {
        Ok(n) => n,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let result = services
        .store()
        .modify(ctx.customer_id(), &mut |customer| customer.rename(name.as_str()));
    if let Err(e) = result {
        return errors::domain_error_to_response(e);
    }

    tracing::info!(customer_id = %ctx.customer_id(), "customer renamed");
    dto::json_message(StatusCode::CREATED, "Customer successfully updated")
}

pub async fn delete_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<CustomerContext>,
) -> axum::response::Response {
    if let Err(e) = services.store().remove(ctx.customer_id()) {
        return errors::domain_error_to_response(e);
    }

    tracing::info!(customer_id = %ctx.customer_id(), cpf = %ctx.cpf(), "customer deleted");
    dto::json_message(StatusCode::CREATED, "Customer successfully deleted")
}
