use async_trait::async_trait;
use uuid::Uuid;

use super::error::Result;
use super::requests::{CreateTransactionRequest, UpdateTransactionRequest};
use super::summary::Summary;
use super::types::{OwnerId, Transaction};

/// Owner-scoped transaction operations exposed to the transport layer.
///
/// Implementations decide how reads are served and what writes invalidate.
/// Only not-found, validation and store failures are ever returned.
#[async_trait]
pub trait TransactionService: Send + Sync {
    /// Lists all of the owner's transactions, most recent first.
    async fn list_transactions(&self, owner: &OwnerId) -> Result<Vec<Transaction>>;

    /// Returns the owner's all-time income/expense totals.
    async fn get_summary(&self, owner: &OwnerId) -> Result<Summary>;

    /// Validates and stores a new transaction for the owner.
    async fn create_transaction(
        &self,
        owner: &OwnerId,
        request: CreateTransactionRequest,
    ) -> Result<Transaction>;

    /// Applies a partial update to one of the owner's transactions.
    async fn update_transaction(
        &self,
        owner: &OwnerId,
        id: Uuid,
        request: UpdateTransactionRequest,
    ) -> Result<Transaction>;

    /// Deletes one of the owner's transactions and returns it.
    async fn delete_transaction(&self, owner: &OwnerId, id: Uuid) -> Result<Transaction>;
}
