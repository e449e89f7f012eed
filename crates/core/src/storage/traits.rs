use async_trait::async_trait;
use uuid::Uuid;

use crate::transactions::{OwnerId, Transaction, TransactionPatch};

use super::Result;

/// Durable store of transactions; the source of truth.
///
/// Mutations are scoped by id **and** owner. A record owned by someone else
/// is indistinguishable from a missing one: both yield `Ok(None)`.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Gets all transactions for an owner, most recent `timestamp` first.
    ///
    /// Ties must come back in the same order on every call.
    async fn find_by_owner(&self, owner: &OwnerId) -> Result<Vec<Transaction>>;

    /// Stores a new transaction and returns the stored record.
    async fn insert(&self, transaction: &Transaction) -> Result<Transaction>;

    /// Applies `patch` to the owner's transaction `id`, returning the result.
    async fn update_by_id_and_owner(
        &self,
        id: Uuid,
        owner: &OwnerId,
        patch: &TransactionPatch,
    ) -> Result<Option<Transaction>>;

    /// Removes the owner's transaction `id`, returning what was removed.
    async fn delete_by_id_and_owner(&self, id: Uuid, owner: &OwnerId)
        -> Result<Option<Transaction>>;
}
