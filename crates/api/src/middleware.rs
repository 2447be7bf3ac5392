use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use bankledger_core::{DomainError, DomainResult, TaxId};
use bankledger_infra::CustomerStore;

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::CustomerContext;

/// Header carrying the caller's tax ID.
pub const CPF_HEADER: &str = "cpf";

/// Resolve the `cpf` header to a registered customer.
///
/// Missing, non-UTF-8 and unknown values all resolve to `CustomerNotFound`.
pub fn resolve(store: &dyn CustomerStore, headers: &HeaderMap) -> DomainResult<CustomerContext> {
    let cpf = headers
        .get(CPF_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(DomainError::CustomerNotFound)?;

    let customer_id = store.id_of(cpf).ok_or(DomainError::CustomerNotFound)?;
    let cpf = TaxId::parse(cpf).map_err(|_| DomainError::CustomerNotFound)?;

    Ok(CustomerContext::new(customer_id, cpf))
}

/// Gate for identified-customer routes.
///
/// On success the resolved [`CustomerContext`] is attached to the request; otherwise
/// the request is answered with 400 and the handler never runs.
pub async fn resolve_customer(
    State(services): State<Arc<AppServices>>,
    mut req: Request,
    next: Next,
) -> Response {
    let ctx = match resolve(services.store(), req.headers()) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::warn!(path = %req.uri().path(), "customer resolution failed: {e}");
            return errors::domain_error_to_response(e);
        }
    };

    req.extensions_mut().insert(ctx);
    next.run(req).await
}
