use axum::{
    routing::{get, post},
    Router,
};

pub mod account;
pub mod operations;
pub mod statement;
pub mod system;

/// Routes that do not identify a customer.
pub fn public_router() -> Router {
    Router::new().route("/account", post(account::create_account))
}

/// Routes that require a resolved `cpf` header.
pub fn identified_router() -> Router {
    Router::new()
        .route(
            "/account",
            get(account::get_account)
                .put(account::update_account)
                .delete(account::delete_account),
        )
        .route("/statement", get(statement::get_statement))
        .route("/statement/date", get(statement::get_statement_by_date))
        .route("/deposit", post(operations::deposit))
        .route("/withdraw", post(operations::withdraw))
        .route("/balance", get(operations::get_balance))
}
