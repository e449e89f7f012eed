//! API request types for transaction operations.
//!
//! Request payloads keep `type` as a raw string so that an unknown kind is
//! reported as a validation error rather than a decoding failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::error::ValidationError;
use super::types::{OwnerId, Transaction, TransactionKind, TransactionPatch};

/// Treats empty or whitespace-only strings as absent.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn parse_amount(amount: i64) -> Result<i64, ValidationError> {
    if amount < 0 {
        return Err(ValidationError::NegativeAmount(amount));
    }
    Ok(amount)
}

/// Request payload for creating a new transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(default, rename = "type", alias = "kind")]
    pub kind: Option<String>,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "date", alias = "timestamp", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl CreateTransactionRequest {
    pub fn new(kind: TransactionKind, amount: i64) -> Self {
        Self {
            kind: Some(kind.as_str().to_string()),
            amount: Some(amount),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Validates the payload and builds a new transaction for `owner`.
    ///
    /// `now` becomes the creation time and, when no timestamp was supplied,
    /// the transaction timestamp.
    pub fn into_transaction(
        self,
        owner: OwnerId,
        now: DateTime<Utc>,
    ) -> Result<Transaction, ValidationError> {
        let kind: TransactionKind = self
            .kind
            .ok_or(ValidationError::MissingField("type"))?
            .parse()?;
        let amount = parse_amount(self.amount.ok_or(ValidationError::MissingField("amount"))?)?;

        Ok(Transaction {
            id: Uuid::new_v4(),
            owner_id: owner,
            kind,
            amount,
            category: self.category,
            description: self.description,
            timestamp: self.timestamp.unwrap_or(now),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Request payload for a partial transaction update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTransactionRequest {
    #[serde(default, rename = "type", alias = "kind", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "date", alias = "timestamp", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl UpdateTransactionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind.as_str().to_string());
        self
    }

    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.timestamp.is_none()
    }

    /// Validates the supplied fields and produces a patch stamped with `now`.
    pub fn into_patch(self, now: DateTime<Utc>) -> Result<TransactionPatch, ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }

        let kind = self
            .kind
            .map(|k| k.parse::<TransactionKind>())
            .transpose()?;
        let amount = self.amount.map(parse_amount).transpose()?;

        Ok(TransactionPatch {
            kind,
            amount,
            category: self.category,
            description: self.description,
            timestamp: self.timestamp,
            updated_at: now,
        })
    }
}
