//! Customer storage abstractions.
//!
//! Handlers only see the [`CustomerStore`] trait, so the in-memory backend can
//! be swapped for a persistent one without touching the HTTP layer.

pub mod customer_store;

pub use customer_store::{CustomerStore, InMemoryCustomerStore};
