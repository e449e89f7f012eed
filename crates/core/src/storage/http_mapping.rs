//! Pure functions for mapping errors to HTTP status codes.

use crate::transactions::TransactionError;

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `AlreadyExists` -> 409 (Conflict)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `Serialization` -> 500 (Internal Server Error)
/// - `InvalidData` -> 500 (Internal Server Error): the store holds a row we cannot read
///
/// # Examples
///
/// ```
/// use fintrack_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::ConnectionFailed("refused".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 503);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 500,
    }
}

/// Maps a [`TransactionError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `Validation` -> 400
/// - `StoreUnavailable` -> whatever the wrapped repository error maps to
pub fn transaction_error_to_status_code(error: &TransactionError) -> u16 {
    match error {
        TransactionError::NotFound(_) => 404,
        TransactionError::Validation(_) => 400,
        TransactionError::StoreUnavailable(repo_error) => {
            repository_error_to_status_code(repo_error)
        }
    }
}
