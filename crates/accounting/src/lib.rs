//! Accounting module (customers and their statements).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod customer;
pub mod statement;

pub use customer::Customer;
pub use statement::{balance, operations_on, Operation, OperationType};
