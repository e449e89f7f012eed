//! Pure functions for serializing/deserializing cached views to/from bytes.
//!
//! Values are stored as JSON so they stay readable when inspecting the cache.

use thiserror::Error;

use crate::transactions::{Summary, Transaction};

use super::CacheError;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

impl From<SerializationError> for CacheError {
    fn from(err: SerializationError) -> Self {
        CacheError::Serialization(err.to_string())
    }
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes an owner's transaction list to JSON bytes.
pub fn serialize_transactions(transactions: &[Transaction]) -> Result<Vec<u8>> {
    serde_json::to_vec(transactions).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a transaction list.
pub fn deserialize_transactions(bytes: &[u8]) -> Result<Vec<Transaction>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a summary to JSON bytes.
pub fn serialize_summary(summary: &Summary) -> Result<Vec<u8>> {
    serde_json::to_vec(summary).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a summary.
pub fn deserialize_summary(bytes: &[u8]) -> Result<Summary> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
