//! Cache-aside transaction service.
//!
//! Wraps a `TransactionRepository` and a `Cache`:
//!
//! - **Reads**: Check cache first, on miss fetch from repository and populate cache
//! - **Writes**: Persist to repository, then invalidate every cached view of the owner
//!
//! Cache failures never reach the caller; they are logged and counted in
//! [`CacheStats`].
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let repo = Arc::new(SqliteRepository::new("fintrack.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//! let stats = Arc::new(CacheStats::new());
//!
//! let service = CachedTransactionService::new(
//!     repo,
//!     cache,
//!     Duration::from_secs(300),
//!     Duration::from_millis(250),
//!     stats,
//! );
//! ```

mod stats;
mod transactions;

pub use stats::{CacheStats, CacheStatsSnapshot};
pub use transactions::CachedTransactionService;
