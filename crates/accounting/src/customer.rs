use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use bankledger_core::{CustomerId, DomainError, DomainResult, TaxId};

use crate::statement::{self, Operation};

/// A ledger customer: identity, display name and append-only statement.
///
/// `cpf` and `id` never change after creation. The statement only grows, and
/// existing entries are never reordered or edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    cpf: TaxId,
    name: String,
    id: CustomerId,
    statement: Vec<Operation>,
}

impl Customer {
    /// Open a new customer with a fresh identity and an empty statement.
    pub fn open(cpf: TaxId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::missing("name"));
        }

        Ok(Self {
            cpf,
            name,
            id: CustomerId::new(),
            statement: Vec::new(),
        })
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn cpf(&self) -> &TaxId {
        &self.cpf
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn statement(&self) -> &[Operation] {
        &self.statement
    }

    /// Current balance, derived from the statement on every call.
    pub fn balance(&self) -> DomainResult<Decimal> {
        statement::balance(&self.statement)
    }

    /// Operations recorded on the given calendar day.
    pub fn statement_on(&self, date: NaiveDate) -> Vec<Operation> {
        statement::operations_on(&self.statement, date)
    }

    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::missing("name"));
        }
        self.name = name;
        Ok(())
    }

    /// Append a credit. The amount is recorded as given.
    ///
    /// Fails with `AmountOutOfRange` if the resulting balance would not be
    /// representable; the statement is then left untouched.
    pub fn deposit(
        &mut self,
        amount: Decimal,
        description: Option<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<&Operation> {
        let balance = self.balance()?;
        self.append(balance, Operation::credit(amount, description, at))
    }

    /// Append a debit if the current balance covers `amount`.
    ///
    /// On error the statement is left untouched.
    pub fn withdraw(&mut self, amount: Decimal, at: DateTime<Utc>) -> DomainResult<&Operation> {
        let balance = self.balance()?;
        if balance < amount {
            return Err(DomainError::InsufficientFunds);
        }
        self.append(balance, Operation::debit(amount, at))
    }

    // Every prefix of the statement keeps a representable balance.
    fn append(&mut self, balance: Decimal, op: Operation) -> DomainResult<&Operation> {
        if op.apply_to(balance).is_none() {
            return Err(DomainError::AmountOutOfRange);
        }
        self.statement.push(op);
        Ok(&self.statement[self.statement.len() - 1])
    }
}
