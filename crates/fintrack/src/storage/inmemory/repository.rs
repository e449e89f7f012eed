//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use fintrack_core::storage::{RepositoryError, Result, TransactionRepository};
use fintrack_core::transactions::{sort_by_most_recent, OwnerId, Transaction, TransactionPatch};

/// In-memory storage backend.
///
/// Records are kept in insertion order so that transactions sharing a
/// timestamp always list in the same order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    transactions: Arc<RwLock<Vec<Transaction>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryRepository {
    async fn find_by_owner(&self, owner: &OwnerId) -> Result<Vec<Transaction>> {
        let transactions = self.transactions.read().await;
        let mut owned: Vec<Transaction> = transactions
            .iter()
            .filter(|t| &t.owner_id == owner)
            .cloned()
            .collect();
        sort_by_most_recent(&mut owned);
        Ok(owned)
    }

    async fn insert(&self, transaction: &Transaction) -> Result<Transaction> {
        let mut transactions = self.transactions.write().await;
        if transactions.iter().any(|t| t.id == transaction.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Transaction",
                id: transaction.id.to_string(),
            });
        }
        transactions.push(transaction.clone());
        Ok(transaction.clone())
    }

    async fn update_by_id_and_owner(
        &self,
        id: Uuid,
        owner: &OwnerId,
        patch: &TransactionPatch,
    ) -> Result<Option<Transaction>> {
        let mut transactions = self.transactions.write().await;
        let Some(existing) = transactions
            .iter_mut()
            .find(|t| t.id == id && &t.owner_id == owner)
        else {
            return Ok(None);
        };
        patch.apply_to(existing);
        Ok(Some(existing.clone()))
    }

    async fn delete_by_id_and_owner(
        &self,
        id: Uuid,
        owner: &OwnerId,
    ) -> Result<Option<Transaction>> {
        let mut transactions = self.transactions.write().await;
        let position = transactions
            .iter()
            .position(|t| t.id == id && &t.owner_id == owner);
        Ok(position.map(|index| transactions.remove(index)))
    }
}
