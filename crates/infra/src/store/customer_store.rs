use std::sync::{Arc, RwLock};

use bankledger_accounting::Customer;
use bankledger_core::{CustomerId, DomainError, DomainResult};

/// Ordered customer collection.
///
/// Lookups are by tax ID (the API key) or by [`CustomerId`] (the identity the
/// resolver hands to handlers). Every mutation runs as one critical section, so
/// a check such as "balance covers the withdrawal" cannot interleave with a
/// concurrent append.
pub trait CustomerStore: Send + Sync {
    /// Append a new customer. Fails with `DuplicateCustomer` if the tax ID is taken.
    fn insert(&self, customer: Customer) -> DomainResult<()>;

    fn get(&self, id: CustomerId) -> Option<Customer>;

    /// Identity of the customer registered under `cpf`, if any.
    fn id_of(&self, cpf: &str) -> Option<CustomerId>;

    fn contains(&self, cpf: &str) -> bool {
        self.id_of(cpf).is_some()
    }

    /// Apply `f` to the stored customer in place.
    ///
    /// If `f` fails, its error is returned and the customer is left as `f` left it;
    /// domain methods on [`Customer`] never partially apply.
    fn modify(
        &self,
        id: CustomerId,
        f: &mut dyn FnMut(&mut Customer) -> DomainResult<()>,
    ) -> DomainResult<()>;

    /// Remove exactly the customer with this identity.
    fn remove(&self, id: CustomerId) -> DomainResult<Customer>;
}

impl<S> CustomerStore for Arc<S>
where
    S: CustomerStore + ?Sized,
{
    fn insert(&self, customer: Customer) -> DomainResult<()> {
        (**self).insert(customer)
    }

    fn get(&self, id: CustomerId) -> Option<Customer> {
        (**self).get(id)
    }

    fn id_of(&self, cpf: &str) -> Option<CustomerId> {
        (**self).id_of(cpf)
    }

    fn modify(
        &self,
        id: CustomerId,
        f: &mut dyn FnMut(&mut Customer) -> DomainResult<()>,
    ) -> DomainResult<()> {
        (**self).modify(id, f)
    }

    fn remove(&self, id: CustomerId) -> DomainResult<Customer> {
        (**self).remove(id)
    }
}

/// In-memory store for dev/tests. State is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    inner: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> DomainError {
    DomainError::internal("customer store lock poisoned")
}

impl CustomerStore for InMemoryCustomerStore {
    fn insert(&self, customer: Customer) -> DomainResult<()> {
        let mut customers = self.inner.write().map_err(|_| poisoned())?;
        if customers.iter().any(|c| c.cpf() == customer.cpf()) {
            return Err(DomainError::DuplicateCustomer);
        }
        tracing::debug!(customer_id = %customer.id(), "customer inserted");
        customers.push(customer);
        Ok(())
    }

    fn get(&self, id: CustomerId) -> Option<Customer> {
        let customers = self.inner.read().ok()?;
        customers.iter().find(|c| c.id() == id).cloned()
    }

    fn id_of(&self, cpf: &str) -> Option<CustomerId> {
        let customers = self.inner.read().ok()?;
        customers
            .iter()
            .find(|c| c.cpf() == cpf)
            .map(Customer::id)
    }

    fn modify(
        &self,
        id: CustomerId,
        f: &mut dyn FnMut(&mut Customer) -> DomainResult<()>,
    ) -> DomainResult<()> {
        let mut customers = self.inner.write().map_err(|_| poisoned())?;
        let customer = customers
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or(DomainError::CustomerNotFound)?;
        f(customer)
    }

    fn remove(&self, id: CustomerId) -> DomainResult<Customer> {
        let mut customers = self.inner.write().map_err(|_| poisoned())?;
        let pos = customers
            .iter()
            .position(|c| c.id() == id)
            .ok_or(DomainError::CustomerNotFound)?;
        Ok(customers.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankledger_core::TaxId;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn customer(cpf: &str, name: &str) -> Customer {
        Customer::open(TaxId::parse(cpf).unwrap(), name).unwrap()
    }

    #[test]
    fn insert_then_lookup_by_cpf_and_id() {
        let store = InMemoryCustomerStore::new();
        let alice = customer("111", "Alice");
        let id = alice.id();

        store.insert(alice.clone()).unwrap();

        assert!(store.contains("111"));
        assert!(!store.contains("222"));
        assert_eq!(store.id_of("111"), Some(id));
        assert_eq!(store.get(id), Some(alice));
    }

    #[test]
    fn duplicate_cpf_is_rejected_and_existing_kept() {
        let store = InMemoryCustomerStore::new();
        let alice = customer("111", "Alice");
        store.insert(alice.clone()).unwrap();

        let err = store.insert(customer("111", "Mallory")).unwrap_err();

        assert_eq!(err, DomainError::DuplicateCustomer);
        assert_eq!(store.id_of("111"), Some(alice.id()));
        assert_eq!(store.get(alice.id()), Some(alice));
    }

    #[test]
    fn modify_applies_in_place() {
        let store = InMemoryCustomerStore::new();
        let alice = customer("111", "Alice");
        let id = alice.id();
        store.insert(alice).unwrap();

        store
            .modify(id, &mut |c| c.deposit(dec!(100), None, Utc::now()).map(|_| ()))
            .unwrap();

        let err = store
            .modify(id, &mut |c| c.withdraw(dec!(150), Utc::now()).map(|_| ()))
            .unwrap_err();
        assert_eq!(err, DomainError::InsufficientFunds);

        let stored = store.get(id).unwrap();
        assert_eq!(stored.statement().len(), 1);
        assert_eq!(stored.balance(), Ok(dec!(100)));
    }

    #[test]
    fn modify_unknown_customer_is_not_found() {
        let store = InMemoryCustomerStore::new();
        let err = store.modify(CustomerId::new(), &mut |_| Ok(())).unwrap_err();
        assert_eq!(err, DomainError::CustomerNotFound);
    }

    #[test]
    fn remove_takes_out_exactly_the_given_customer() {
        let store = InMemoryCustomerStore::new();
        let a = customer("111", "Alice");
        let b = customer("222", "Bob");
        let c = customer("333", "Carol");
        store.insert(a.clone()).unwrap();
        store.insert(b.clone()).unwrap();
        store.insert(c.clone()).unwrap();

        let removed = store.remove(b.id()).unwrap();

        assert_eq!(removed, b);
        assert_eq!(store.get(a.id()), Some(a));
        assert_eq!(store.get(c.id()), Some(c));
        assert_eq!(store.get(b.id()), None);
        assert!(!store.contains("222"));
        assert_eq!(store.remove(b.id()).unwrap_err(), DomainError::CustomerNotFound);
    }

    #[test]
    fn removed_cpf_can_register_again_with_new_identity() {
        let store = InMemoryCustomerStore::new();
        let first = customer("111", "Alice");
        store.insert(first.clone()).unwrap();
        store.remove(first.id()).unwrap();

        let second = customer("111", "Alice");
        store.insert(second.clone()).unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(store.id_of("111"), Some(second.id()));
    }

    #[test]
    fn works_through_arc_dyn() {
        let store: Arc<dyn CustomerStore> = Arc::new(InMemoryCustomerStore::new());
        store.insert(customer("111", "Alice")).unwrap();
        assert!(store.contains("111"));
    }
}
