//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant except `Internal` is a client-facing business failure. The
/// `Display` text is the exact message returned to API callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required request field was absent.
    #[error("Missing {0} parameter")]
    MissingField(String),

    /// A request field was present but could not be interpreted.
    #[error("Invalid {0} parameter")]
    InvalidField(String),

    /// A customer with the same tax ID is already registered.
    #[error("Customer already exists")]
    DuplicateCustomer,

    /// No customer matches the given tax ID (or identity).
    #[error("Customer not found")]
    CustomerNotFound,

    /// A withdrawal exceeds the current balance.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// An amount would push a balance past what `Decimal` can represent.
    #[error("Amount out of range")]
    AmountOutOfRange,

    /// Storage failed in a way unrelated to the request (e.g. poisoned lock).
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn invalid(field: impl Into<String>) -> Self {
        Self::InvalidField(field.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error is caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_contract() {
        assert_eq!(
            DomainError::missing("cpf or name").to_string(),
            "Missing cpf or name parameter"
        );
        assert_eq!(DomainError::DuplicateCustomer.to_string(), "Customer already exists");
        assert_eq!(DomainError::CustomerNotFound.to_string(), "Customer not found");
        assert_eq!(DomainError::InsufficientFunds.to_string(), "Insufficient funds");
        assert_eq!(DomainError::invalid("date").to_string(), "Invalid date parameter");
        assert_eq!(DomainError::AmountOutOfRange.to_string(), "Amount out of range");
    }

    #[test]
    fn only_internal_is_a_server_error() {
        assert!(DomainError::InsufficientFunds.is_client_error());
        assert!(DomainError::AmountOutOfRange.is_client_error());
        assert!(!DomainError::internal("lock poisoned").is_client_error());
    }
}
