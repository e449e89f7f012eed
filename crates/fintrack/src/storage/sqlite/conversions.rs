//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::Row;
use uuid::Uuid;

use fintrack_core::transactions::{OwnerId, Transaction, TransactionKind};

/// Convert a SQLite row to a Transaction.
///
/// Expected columns: id, owner_id, kind, amount, category, description,
/// timestamp, created_at, updated_at
pub fn row_to_transaction(row: &Row) -> rusqlite::Result<Transaction> {
    let id: String = row.get(0)?;
    let owner_id: String = row.get(1)?;
    let kind: String = row.get(2)?;
    let amount: i64 = row.get(3)?;
    let category: Option<String> = row.get(4)?;
    let description: Option<String> = row.get(5)?;
    let timestamp: String = row.get(6)?;
    let created_at: String = row.get(7)?;
    let updated_at: String = row.get(8)?;

    Ok(Transaction {
        id: parse_uuid(0, &id)?,
        owner_id: parse_owner(1, &owner_id)?,
        kind: parse_kind(2, &kind)?,
        amount,
        category,
        description,
        timestamp: parse_datetime(6, &timestamp)?,
        created_at: parse_datetime(7, &created_at)?,
        updated_at: parse_datetime(8, &updated_at)?,
    })
}

fn conversion_error<E>(column: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

fn parse_uuid(column: usize, s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| conversion_error(column, e))
}

fn parse_owner(column: usize, s: &str) -> rusqlite::Result<OwnerId> {
    OwnerId::new(s).map_err(|e| conversion_error(column, e))
}

fn parse_kind(column: usize, s: &str) -> rusqlite::Result<TransactionKind> {
    TransactionKind::from_str(s).map_err(|e| conversion_error(column, e))
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(column, e))
}

/// Format a DateTime<Utc> for SQLite storage.
///
/// Always nanosecond precision with a `Z` suffix so stored values have a
/// fixed width and sort chronologically as text.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}
