use std::sync::Arc;

use bankledger_infra::{CustomerStore, InMemoryCustomerStore};

/// Shared application services handed to every handler.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn CustomerStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// In-memory wiring: all state is lost when the process exits.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCustomerStore::new()))
    }

    pub fn store(&self) -> &dyn CustomerStore {
        self.store.as_ref()
    }
}
