//! SQLite repository implementation.
//!
//! Implements `TransactionRepository` from `fintrack_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use fintrack_core::storage::{RepositoryError, Result, TransactionRepository};
use fintrack_core::transactions::{OwnerId, Transaction, TransactionPatch};

use super::conversions::{format_datetime, row_to_transaction};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl TransactionRepository for SqliteRepository {
    async fn find_by_owner(&self, owner: &OwnerId) -> Result<Vec<Transaction>> {
        let owner_id = owner.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_TRANSACTIONS_BY_OWNER)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([&owner_id], row_to_transaction)
                    .map_err(wrap_err)?;

                let mut transactions = Vec::new();
                for row_result in rows {
                    transactions.push(row_result.map_err(wrap_err)?);
                }
                Ok(transactions)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Transaction"))
    }

    async fn insert(&self, transaction: &Transaction) -> Result<Transaction> {
        let id = transaction.id.to_string();
        let owner_id = transaction.owner_id.to_string();
        let kind = transaction.kind.as_str();
        let amount = transaction.amount;
        let category = transaction.category.clone();
        let description = transaction.description.clone();
        let timestamp = format_datetime(&transaction.timestamp);
        let created_at = format_datetime(&transaction.created_at);
        let updated_at = format_datetime(&transaction.updated_at);
        let transaction_id = transaction.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_TRANSACTION,
                    rusqlite::params![
                        id,
                        owner_id,
                        kind,
                        amount,
                        category,
                        description,
                        timestamp,
                        created_at,
                        updated_at
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Transaction", transaction_id))?;

        Ok(transaction.clone())
    }

    async fn update_by_id_and_owner(
        &self,
        id: Uuid,
        owner: &OwnerId,
        patch: &TransactionPatch,
    ) -> Result<Option<Transaction>> {
        let id_str = id.to_string();
        let owner_id = owner.to_string();
        let kind = patch.kind.map(|k| k.as_str());
        let amount = patch.amount;
        let category = patch.category.clone();
        let description = patch.description.clone();
        let timestamp = patch.timestamp.as_ref().map(format_datetime);
        let updated_at = format_datetime(&patch.updated_at);

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::UPDATE_TRANSACTION).map_err(wrap_err)?;
                let result = stmt.query_row(
                    rusqlite::params![
                        id_str,
                        owner_id,
                        kind,
                        amount,
                        category,
                        description,
                        timestamp,
                        updated_at
                    ],
                    row_to_transaction,
                );
                match result {
                    Ok(transaction) => Ok(Some(transaction)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Transaction", id.to_string()))
    }

    async fn delete_by_id_and_owner(
        &self,
        id: Uuid,
        owner: &OwnerId,
    ) -> Result<Option<Transaction>> {
        let id_str = id.to_string();
        let owner_id = owner.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::DELETE_TRANSACTION).map_err(wrap_err)?;
                match stmt.query_row([&id_str, &owner_id], row_to_transaction) {
                    Ok(transaction) => Ok(Some(transaction)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Transaction", id.to_string()))
    }
}
