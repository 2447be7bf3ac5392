use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use bankledger_core::{DomainError, DomainResult};

/// Direction of a statement operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Credit,
    Debit,
}

/// One immutable entry of a customer's statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    /// Free text supplied with deposits; withdrawals carry none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: OperationType,
}

impl Operation {
    pub fn credit(amount: Decimal, description: Option<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            description,
            amount,
            created_at,
            kind: OperationType::Credit,
        }
    }

    pub fn debit(amount: Decimal, created_at: DateTime<Utc>) -> Self {
        Self {
            description: None,
            amount,
            created_at,
            kind: OperationType::Debit,
        }
    }

    /// Apply this operation to `balance`, or `None` if the result overflows.
    pub fn apply_to(&self, balance: Decimal) -> Option<Decimal> {
        match self.kind {
            OperationType::Credit => balance.checked_add(self.amount),
            OperationType::Debit => balance.checked_sub(self.amount),
        }
    }

    /// Calendar day (UTC) the operation was recorded on.
    pub fn date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

/// Net balance of a statement: credits minus debits, folded in sequence order.
///
/// Fails with `AmountOutOfRange` instead of overflowing.
pub fn balance(statement: &[Operation]) -> DomainResult<Decimal> {
    statement.iter().try_fold(Decimal::ZERO, |acc, op| {
        op.apply_to(acc).ok_or(DomainError::AmountOutOfRange)
    })
}

/// Operations recorded on `date`, ignoring time of day. Order is preserved.
pub fn operations_on(statement: &[Operation], date: NaiveDate) -> Vec<Operation> {
    statement
        .iter()
        .filter(|op| op.date() == date)
        .cloned()
        .collect()
}
