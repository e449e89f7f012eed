use thiserror::Error;
use uuid::Uuid;

use crate::storage::RepositoryError;

/// Errors that can occur when constructing an owner identity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OwnerIdError {
    #[error("Owner id must not be empty")]
    Empty,
}

/// Malformed create/update input. Nothing is written when this is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid transaction type '{0}': expected 'income' or 'expense'")]
    InvalidKind(String),
    #[error("Amount must be non-negative, got {0}")]
    NegativeAmount(i64),
    #[error("Update request contains no fields to change")]
    EmptyUpdate,
}

/// Caller-visible outcome of a transaction operation.
///
/// Cache failures never appear here; they are absorbed by the service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Transaction not found: {0}")]
    NotFound(Uuid),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] RepositoryError),
}

/// Result type for transaction service operations.
pub type Result<T> = std::result::Result<T, TransactionError>;
