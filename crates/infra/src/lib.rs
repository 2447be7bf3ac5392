//! Infrastructure layer: customer storage.

pub mod store;

pub use store::{CustomerStore, InMemoryCustomerStore};
