//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store wiring shared by all handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON response helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;
use services::AppServices;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: Arc<AppServices>) -> Router {
    // Identified-customer routes: the resolver runs before each handler.
    let identified = routes::identified_router().route_layer(
        axum::middleware::from_fn_with_state(services.clone(), middleware::resolve_customer),
    );

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::public_router())
        .merge(identified)
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
