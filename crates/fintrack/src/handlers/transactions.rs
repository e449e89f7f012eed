//! Transaction CRUD handlers.
//!
//! Thin translation from HTTP to the `TransactionService`. The owner always
//! comes from the bearer token, never from the request body or path.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use fintrack_core::transactions::{
    CreateTransactionRequest, Summary, Transaction, UpdateTransactionRequest,
};

use crate::{auth::AuthenticatedOwner, handlers::AppError, state::AppState};

/// Body returned after a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
    pub id: Uuid,
}

/// List the caller's transactions, most recent first (GET /api/transactions).
pub async fn list_transactions(
    AuthenticatedOwner(owner): AuthenticatedOwner,
    State(state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let transactions = state.transactions.list_transactions(&owner).await?;
    Ok(Json(transactions))
}

/// All-time totals (GET /api/transactions/summary).
pub async fn get_summary(
    AuthenticatedOwner(owner): AuthenticatedOwner,
    State(state): State<AppState>,
) -> Result<Json<Summary>, AppError> {
    let summary = state.transactions.get_summary(&owner).await?;
    Ok(Json(summary))
}

/// Create a transaction (POST /api/transactions).
pub async fn create_transaction(
    AuthenticatedOwner(owner): AuthenticatedOwner,
    State(state): State<AppState>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    let Json(request) = payload?;

    let transaction = state
        .transactions
        .create_transaction(&owner, request)
        .await?;

    tracing::info!(owner = %owner, id = %transaction.id, "Created transaction");
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Partially update a transaction (PUT /api/transactions/{id}).
pub async fn update_transaction(
    AuthenticatedOwner(owner): AuthenticatedOwner,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateTransactionRequest>, JsonRejection>,
) -> Result<Json<Transaction>, AppError> {
    let Json(request) = payload?;

    let transaction = state
        .transactions
        .update_transaction(&owner, id, request)
        .await?;

    tracing::info!(owner = %owner, id = %id, "Updated transaction");
    Ok(Json(transaction))
}

/// Delete a transaction (DELETE /api/transactions/{id}).
pub async fn delete_transaction(
    AuthenticatedOwner(owner): AuthenticatedOwner,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, AppError> {
    let deleted = state.transactions.delete_transaction(&owner, id).await?;

    tracing::info!(owner = %owner, id = %deleted.id, "Deleted transaction");
    Ok(Json(DeletedResponse {
        message: "Transaction deleted",
        id: deleted.id,
    }))
}
