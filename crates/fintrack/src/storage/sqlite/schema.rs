//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Timestamps are stored as fixed-width RFC 3339 UTC
//! strings, so text order matches chronological order.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS transactions (
    id TEXT PRIMARY KEY,
    owner_id TEXT NOT NULL,
    kind TEXT NOT NULL CHECK (kind IN ('income', 'expense')),
    amount INTEGER NOT NULL CHECK (amount >= 0),
    category TEXT,
    description TEXT,
    timestamp TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_transactions_owner_timestamp
    ON transactions(owner_id, timestamp DESC);
"#;

pub const INSERT_TRANSACTION: &str = r#"
INSERT INTO transactions (id, owner_id, kind, amount, category, description, timestamp, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#;

/// Insertion order (rowid) breaks timestamp ties.
pub const SELECT_TRANSACTIONS_BY_OWNER: &str = r#"
SELECT id, owner_id, kind, amount, category, description, timestamp, created_at, updated_at
FROM transactions
WHERE owner_id = ?1
ORDER BY timestamp DESC, rowid ASC
"#;

/// NULL parameters leave the column untouched.
pub const UPDATE_TRANSACTION: &str = r#"
UPDATE transactions
SET kind = COALESCE(?3, kind),
    amount = COALESCE(?4, amount),
    category = COALESCE(?5, category),
    description = COALESCE(?6, description),
    timestamp = COALESCE(?7, timestamp),
    updated_at = ?8
WHERE id = ?1 AND owner_id = ?2
RETURNING id, owner_id, kind, amount, category, description, timestamp, created_at, updated_at
"#;

pub const DELETE_TRANSACTION: &str = r#"
DELETE FROM transactions
WHERE id = ?1 AND owner_id = ?2
RETURNING id, owner_id, kind, amount, category, description, timestamp, created_at, updated_at
"#;
