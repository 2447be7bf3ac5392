use bankledger_core::{CustomerId, TaxId};

/// Customer resolved from the `cpf` header for the current request.
///
/// Inserted by the resolver middleware; every identified-customer route requires it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerContext {
    customer_id: CustomerId,
    cpf: TaxId,
}

impl CustomerContext {
    pub fn new(customer_id: CustomerId, cpf: TaxId) -> Self {
        Self { customer_id, cpf }
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn cpf(&self) -> &TaxId {
        &self.cpf
    }
}
