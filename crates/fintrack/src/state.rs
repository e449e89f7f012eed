//! Application state with service-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers talk to a `TransactionService` trait object;
//! which store and cache sit behind it is chosen via feature flags.

use std::sync::Arc;

use axum::extract::FromRef;

use fintrack_core::cache::Cache;
use fintrack_core::storage::TransactionRepository;
use fintrack_core::transactions::TransactionService;

use crate::auth::AuthKeys;
use crate::config::Config;
use crate::storage::cached::{CacheStats, CachedTransactionService};

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside transaction service.
    pub transactions: Arc<dyn TransactionService>,
    /// Counters shared with the service, served by `/healthz`.
    pub cache_stats: Arc<CacheStats>,
    /// Bearer token keys.
    pub auth: AuthKeys,
}

impl FromRef<AppState> for AuthKeys {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl AppState {
    /// Wires a repository and cache into the cache-aside service.
    fn build<R, C>(repository: Arc<R>, cache: Arc<C>, config: &Config) -> Self
    where
        R: TransactionRepository + 'static,
        C: Cache + 'static,
    {
        let cache_stats = Arc::new(CacheStats::new());
        let transactions = Arc::new(CachedTransactionService::new(
            repository,
            cache,
            config.cache_ttl(),
            config.cache_timeout(),
            cache_stats.clone(),
        ));

        Self {
            transactions,
            cache_stats,
            auth: AuthKeys::from_secret(&config.jwt_secret),
        }
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            Ok(Self::build(sqlite_repo, memory_cache, config))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            Ok(Self::build(sqlite_repo, redis_cache, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for development without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            Ok(Self::build(inmemory_repo, memory_cache, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            Ok(Self::build(inmemory_repo, redis_cache, config))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
