//! Cached transaction service.
//!
//! Serves the owner's transaction list and summary from the cache when it
//! can, and keeps the cache honest by dropping both views after every
//! successful write.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use fintrack_core::cache::{
    bounded, deserialize_summary, deserialize_transactions, owner_cache_keys, serialize_summary,
    serialize_transactions, summary_key, transactions_key, Cache, CacheLookup, SerializationError,
};
use fintrack_core::storage::TransactionRepository;
use fintrack_core::transactions::{
    summarize, CreateTransactionRequest, OwnerId, Result, Summary, Transaction, TransactionError,
    TransactionService, UpdateTransactionRequest,
};

use super::CacheStats;

/// Cache-aside coordinator over a transaction repository.
///
/// Every cache call is bounded by `cache_timeout`. A cache that errors,
/// times out or holds garbage behaves like an empty cache.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedTransactionService<R, C>
where
    R: TransactionRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Duration,
    cache_timeout: Duration,
    stats: Arc<CacheStats>,
}

impl<R, C> CachedTransactionService<R, C>
where
    R: TransactionRepository,
    C: Cache,
{
    /// Creates a new cached transaction service.
    ///
    /// # Arguments
    ///
    /// * `repository` - The store of record
    /// * `cache` - The cache implementation
    /// * `ttl` - Time-to-live for cached views
    /// * `cache_timeout` - Upper bound for any single cache call
    /// * `stats` - Counters updated on every cache interaction
    pub fn new(
        repository: Arc<R>,
        cache: Arc<C>,
        ttl: Duration,
        cache_timeout: Duration,
        stats: Arc<CacheStats>,
    ) -> Self {
        Self {
            repository,
            cache,
            ttl,
            cache_timeout,
            stats,
        }
    }

    async fn lookup<T, F>(&self, key: &str, decode: F) -> CacheLookup<T>
    where
        F: FnOnce(&[u8]) -> std::result::Result<T, SerializationError>,
    {
        let read = bounded(self.cache_timeout, self.cache.get(key)).await;
        let lookup = CacheLookup::from_bytes(read, decode);

        match &lookup {
            CacheLookup::Hit(_) => {
                self.stats.record_hit();
                tracing::trace!(cache_key = key, "Cache hit");
            }
            CacheLookup::Miss => {
                self.stats.record_miss();
                tracing::trace!(cache_key = key, "Cache miss");
            }
            CacheLookup::Unavailable(err) => {
                self.stats.record_read_error();
                tracing::warn!(cache_key = key, error = %err, "Cache read failed, using store");
            }
        }

        lookup
    }

    async fn populate(&self, key: &str, encoded: std::result::Result<Vec<u8>, SerializationError>) {
        let bytes = match encoded {
            Ok(bytes) => bytes,
            Err(err) => {
                self.stats.record_write_error();
                tracing::warn!(cache_key = key, error = %err, "Failed to encode cache value");
                return;
            }
        };

        let write = bounded(self.cache_timeout, self.cache.set(key, &bytes, Some(self.ttl))).await;
        if let Err(err) = write {
            self.stats.record_write_error();
            tracing::warn!(cache_key = key, error = %err, "Failed to populate cache");
        }
    }

    /// Drops every cached view of the owner. Each key is attempted even if
    /// an earlier one fails.
    async fn invalidate(&self, owner: &OwnerId) {
        for key in owner_cache_keys(owner) {
            match bounded(self.cache_timeout, self.cache.delete(&key)).await {
                Ok(()) => self.stats.record_invalidation(),
                Err(err) => {
                    self.stats.record_write_error();
                    tracing::warn!(
                        %owner,
                        cache_key = %key,
                        error = %err,
                        "Failed to invalidate cache"
                    );
                }
            }
        }
    }
}

#[async_trait]
impl<R, C> TransactionService for CachedTransactionService<R, C>
where
    R: TransactionRepository + 'static,
    C: Cache + 'static,
{
    async fn list_transactions(&self, owner: &OwnerId) -> Result<Vec<Transaction>> {
        let cache_key = transactions_key(owner);

        if let CacheLookup::Hit(transactions) =
            self.lookup(&cache_key, deserialize_transactions).await
        {
            return Ok(transactions);
        }

        let transactions = self.repository.find_by_owner(owner).await?;
        self.populate(&cache_key, serialize_transactions(&transactions))
            .await;

        Ok(transactions)
    }

    async fn get_summary(&self, owner: &OwnerId) -> Result<Summary> {
        let cache_key = summary_key(owner);

        if let CacheLookup::Hit(summary) = self.lookup(&cache_key, deserialize_summary).await {
            return Ok(summary);
        }

        let transactions = self.repository.find_by_owner(owner).await?;
        let summary = summarize(&transactions);
        self.populate(&cache_key, serialize_summary(&summary)).await;

        Ok(summary)
    }

    async fn create_transaction(
        &self,
        owner: &OwnerId,
        request: CreateTransactionRequest,
    ) -> Result<Transaction> {
        let transaction = request.into_transaction(owner.clone(), Utc::now())?;

        let created = self.repository.insert(&transaction).await?;
        self.invalidate(owner).await;

        tracing::debug!(transaction_id = %created.id, %owner, "Transaction created");
        Ok(created)
    }

    async fn update_transaction(
        &self,
        owner: &OwnerId,
        id: Uuid,
        request: UpdateTransactionRequest,
    ) -> Result<Transaction> {
        let patch = request.into_patch(Utc::now())?;

        let updated = self
            .repository
            .update_by_id_and_owner(id, owner, &patch)
            .await?
            .ok_or(TransactionError::NotFound(id))?;
        self.invalidate(owner).await;

        tracing::debug!(transaction_id = %id, %owner, "Transaction updated");
        Ok(updated)
    }

    async fn delete_transaction(&self, owner: &OwnerId, id: Uuid) -> Result<Transaction> {
        let deleted = self
            .repository
            .delete_by_id_and_owner(id, owner)
            .await?
            .ok_or(TransactionError::NotFound(id))?;
        self.invalidate(owner).await;

        tracing::debug!(transaction_id = %id, %owner, "Transaction deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use chrono::TimeZone;
    use fintrack_core::cache::{CacheError, Result as CacheResult};
    use fintrack_core::storage::{RepositoryError, Result as RepoResult};
    use fintrack_core::transactions::{TransactionKind, TransactionPatch, ValidationError};

    use crate::cache::MemoryCache;
    use crate::storage::InMemoryRepository;

    const TTL: Duration = Duration::from_secs(300);
    const CACHE_TIMEOUT: Duration = Duration::from_millis(250);

    // Repository that counts reads and can be switched into a failing state
    #[derive(Default)]
    struct MockRepository {
        inner: InMemoryRepository,
        find_calls: AtomicUsize,
        unavailable: AtomicBool,
    }

    impl MockRepository {
        fn find_calls(&self) -> usize {
            self.find_calls.load(Ordering::SeqCst)
        }

        fn go_down(&self) {
            self.unavailable.store(true, Ordering::SeqCst);
        }

        fn check(&self) -> RepoResult<()> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(RepositoryError::ConnectionFailed("store down".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl TransactionRepository for MockRepository {
        async fn find_by_owner(&self, owner: &OwnerId) -> RepoResult<Vec<Transaction>> {
            self.find_calls.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            self.inner.find_by_owner(owner).await
        }

        async fn insert(&self, transaction: &Transaction) -> RepoResult<Transaction> {
            self.check()?;
            self.inner.insert(transaction).await
        }

        async fn update_by_id_and_owner(
            &self,
            id: Uuid,
            owner: &OwnerId,
            patch: &TransactionPatch,
        ) -> RepoResult<Option<Transaction>> {
            self.check()?;
            self.inner.update_by_id_and_owner(id, owner, patch).await
        }

        async fn delete_by_id_and_owner(
            &self,
            id: Uuid,
            owner: &OwnerId,
        ) -> RepoResult<Option<Transaction>> {
            self.check()?;
            self.inner.delete_by_id_and_owner(id, owner).await
        }
    }

    // Cache that fails every operation
    struct FailingCache;

    #[async_trait]
    impl Cache for FailingCache {
        async fn get(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
            Err(CacheError::ConnectionFailed("connection refused".to_string()))
        }

        async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
            Err(CacheError::ConnectionFailed("connection refused".to_string()))
        }

        async fn delete(&self, _key: &str) -> CacheResult<()> {
            Err(CacheError::ConnectionFailed("connection refused".to_string()))
        }
    }

    // Cache that never answers
    struct HangingCache;

    #[async_trait]
    impl Cache for HangingCache {
        async fn get(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
            std::future::pending().await
        }

        async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
            std::future::pending().await
        }

        async fn delete(&self, _key: &str) -> CacheResult<()> {
            std::future::pending().await
        }
    }

    // Working cache whose deletes fail for the transaction-list key only
    struct StickyListCache {
        inner: MemoryCache,
        deletes: AtomicUsize,
    }

    #[async_trait]
    impl Cache for StickyListCache {
        async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> CacheResult<()> {
            self.inner.set(key, value, ttl).await
        }

        async fn delete(&self, key: &str) -> CacheResult<()> {
            self.deletes.fetch_add(1, Ordering::SeqCst);
            if key.ends_with(":transactions") {
                return Err(CacheError::OperationFailed("READONLY".to_string()));
            }
            self.inner.delete(key).await
        }
    }

    fn alice() -> OwnerId {
        OwnerId::new("alice").unwrap()
    }

    fn bob() -> OwnerId {
        OwnerId::new("bob").unwrap()
    }

    fn service_with<C: Cache>(
        cache: Arc<C>,
    ) -> (
        CachedTransactionService<MockRepository, C>,
        Arc<MockRepository>,
        Arc<CacheStats>,
    ) {
        let repo = Arc::new(MockRepository::default());
        let stats = Arc::new(CacheStats::new());
        let service =
            CachedTransactionService::new(repo.clone(), cache, TTL, CACHE_TIMEOUT, stats.clone());
        (service, repo, stats)
    }

    fn service() -> (
        CachedTransactionService<MockRepository, MemoryCache>,
        Arc<MockRepository>,
        Arc<MemoryCache>,
    ) {
        let cache = Arc::new(MemoryCache::new(100));
        let (service, repo, _) = service_with(cache.clone());
        (service, repo, cache)
    }

    fn income(amount: i64) -> CreateTransactionRequest {
        CreateTransactionRequest::new(TransactionKind::Income, amount)
    }

    fn expense(amount: i64) -> CreateTransactionRequest {
        CreateTransactionRequest::new(TransactionKind::Expense, amount)
    }

    #[tokio::test]
    async fn test_create_then_list_serves_second_read_from_cache() {
        let (service, repo, cache) = service();

        let created = service
            .create_transaction(&alice(), expense(1999).with_category("groceries"))
            .await
            .unwrap();

        let first = service.list_transactions(&alice()).await.unwrap();
        assert_eq!(first, vec![created.clone()]);
        assert_eq!(repo.find_calls(), 1);
        assert!(cache.get(&transactions_key(&alice())).await.unwrap().is_some());

        let second = service.list_transactions(&alice()).await.unwrap();
        assert_eq!(second, vec![created]);
        assert_eq!(repo.find_calls(), 1);
    }

    #[tokio::test]
    async fn test_repeated_summaries_are_identical() {
        let (service, repo, _) = service();
        service.create_transaction(&alice(), income(500)).await.unwrap();
        service.create_transaction(&alice(), expense(120)).await.unwrap();

        let first = service.get_summary(&alice()).await.unwrap();
        let second = service.get_summary(&alice()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first, Summary::new(500, 120));
        assert_eq!(repo.find_calls(), 1);
    }

    #[tokio::test]
    async fn test_summary_folds_all_transactions() {
        let (service, _, _) = service();
        service.create_transaction(&alice(), income(100)).await.unwrap();
        service.create_transaction(&alice(), expense(40)).await.unwrap();
        service.create_transaction(&alice(), income(25)).await.unwrap();

        let summary = service.get_summary(&alice()).await.unwrap();

        assert_eq!(summary.total_income, 125);
        assert_eq!(summary.total_expense, 40);
        assert_eq!(summary.net_balance, 85);
    }

    #[tokio::test]
    async fn test_owner_without_transactions() {
        let (service, _, cache) = service();

        assert!(service.list_transactions(&alice()).await.unwrap().is_empty());
        assert_eq!(service.get_summary(&alice()).await.unwrap(), Summary::default());

        // Empty results are cached like any other.
        assert_eq!(
            cache.get(&transactions_key(&alice())).await.unwrap(),
            Some(b"[]".to_vec())
        );
    }

    #[tokio::test]
    async fn test_list_is_most_recent_first() {
        let (service, _, _) = service();
        let day = |d| Utc.with_ymd_and_hms(2024, 5, d, 9, 0, 0).unwrap();

        service
            .create_transaction(&alice(), income(1).with_timestamp(day(2)))
            .await
            .unwrap();
        service
            .create_transaction(&alice(), income(2).with_timestamp(day(9)))
            .await
            .unwrap();
        service
            .create_transaction(&alice(), income(3).with_timestamp(day(5)))
            .await
            .unwrap();

        let amounts: Vec<i64> = service
            .list_transactions(&alice())
            .await
            .unwrap()
            .iter()
            .map(|t| t.amount)
            .collect();
        assert_eq!(amounts, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn test_writes_are_visible_to_next_read() {
        let (service, _, _) = service();

        // Warm both views.
        service.list_transactions(&alice()).await.unwrap();
        service.get_summary(&alice()).await.unwrap();

        let created = service.create_transaction(&alice(), income(100)).await.unwrap();
        assert_eq!(
            service.list_transactions(&alice()).await.unwrap(),
            vec![created.clone()]
        );
        assert_eq!(service.get_summary(&alice()).await.unwrap(), Summary::new(100, 0));

        let updated = service
            .update_transaction(
                &alice(),
                created.id,
                UpdateTransactionRequest::new()
                    .with_kind(TransactionKind::Expense)
                    .with_amount(30),
            )
            .await
            .unwrap();
        assert_eq!(
            service.list_transactions(&alice()).await.unwrap(),
            vec![updated]
        );
        assert_eq!(service.get_summary(&alice()).await.unwrap(), Summary::new(0, 30));

        service.delete_transaction(&alice(), created.id).await.unwrap();
        assert!(service.list_transactions(&alice()).await.unwrap().is_empty());
        assert_eq!(service.get_summary(&alice()).await.unwrap(), Summary::default());
    }

    #[tokio::test]
    async fn test_failing_cache_falls_back_to_store() {
        let (service, repo, stats) = service_with(Arc::new(FailingCache));

        let created = service.create_transaction(&alice(), income(100)).await.unwrap();
        assert_eq!(
            service.list_transactions(&alice()).await.unwrap(),
            vec![created.clone()]
        );
        assert_eq!(service.get_summary(&alice()).await.unwrap(), Summary::new(100, 0));

        let updated = service
            .update_transaction(
                &alice(),
                created.id,
                UpdateTransactionRequest::new().with_amount(80),
            )
            .await
            .unwrap();
        assert_eq!(updated.amount, 80);

        let deleted = service.delete_transaction(&alice(), created.id).await.unwrap();
        assert_eq!(deleted.id, created.id);

        // Every read went to the store.
        assert_eq!(repo.find_calls(), 2);
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.hits, 0);
        assert_eq!(snapshot.invalidations, 0);
        assert_eq!(snapshot.read_errors, 2);
        assert!(snapshot.write_errors >= 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_cache_times_out_and_falls_back() {
        let (service, repo, stats) = service_with(Arc::new(HangingCache));

        let created = service.create_transaction(&alice(), expense(75)).await.unwrap();
        assert_eq!(
            service.list_transactions(&alice()).await.unwrap(),
            vec![created.clone()]
        );
        assert_eq!(service.get_summary(&alice()).await.unwrap(), Summary::new(0, 75));
        service
            .update_transaction(
                &alice(),
                created.id,
                UpdateTransactionRequest::new().with_description("bus fare"),
            )
            .await
            .unwrap();
        service.delete_transaction(&alice(), created.id).await.unwrap();

        assert_eq!(repo.find_calls(), 2);
        assert!(stats.snapshot().read_errors > 0);
    }

    #[tokio::test]
    async fn test_corrupt_cache_value_is_a_miss() {
        let (service, repo, cache) = service();
        let created = service.create_transaction(&alice(), income(10)).await.unwrap();

        cache
            .set(&transactions_key(&alice()), b"{not json", None)
            .await
            .unwrap();

        assert_eq!(
            service.list_transactions(&alice()).await.unwrap(),
            vec![created]
        );
        assert_eq!(repo.find_calls(), 1);

        // The bad value was replaced by a fresh one.
        service.list_transactions(&alice()).await.unwrap();
        assert_eq!(repo.find_calls(), 1);
    }

    #[tokio::test]
    async fn test_other_owner_cannot_update_or_delete() {
        let (service, _, cache) = service();
        let created = service.create_transaction(&alice(), income(100)).await.unwrap();
        service.list_transactions(&bob()).await.unwrap();

        let update = service
            .update_transaction(&bob(), created.id, UpdateTransactionRequest::new().with_amount(1))
            .await;
        assert_eq!(update, Err(TransactionError::NotFound(created.id)));

        let delete = service.delete_transaction(&bob(), created.id).await;
        assert_eq!(delete, Err(TransactionError::NotFound(created.id)));

        assert_eq!(
            service.list_transactions(&alice()).await.unwrap(),
            vec![created]
        );
        // A failed write invalidates nothing.
        assert!(cache.get(&transactions_key(&bob())).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let (service, _, _) = service();
        let id = Uuid::new_v4();

        let update = service
            .update_transaction(&alice(), id, UpdateTransactionRequest::new().with_amount(1))
            .await;
        assert_eq!(update, Err(TransactionError::NotFound(id)));

        let delete = service.delete_transaction(&alice(), id).await;
        assert_eq!(delete, Err(TransactionError::NotFound(id)));
    }

    #[tokio::test]
    async fn test_invalid_create_touches_nothing() {
        let (service, repo, cache) = service();
        service.list_transactions(&alice()).await.unwrap();

        let negative = service.create_transaction(&alice(), income(-5)).await;
        assert_eq!(
            negative,
            Err(TransactionError::Validation(ValidationError::NegativeAmount(-5)))
        );

        let bad_kind = CreateTransactionRequest {
            kind: Some("transfer".to_string()),
            amount: Some(10),
            ..Default::default()
        };
        let result = service.create_transaction(&alice(), bad_kind).await;
        assert_eq!(
            result,
            Err(TransactionError::Validation(ValidationError::InvalidKind(
                "transfer".to_string()
            )))
        );

        let missing_amount = CreateTransactionRequest {
            kind: Some("income".to_string()),
            ..Default::default()
        };
        let result = service.create_transaction(&alice(), missing_amount).await;
        assert_eq!(
            result,
            Err(TransactionError::Validation(ValidationError::MissingField("amount")))
        );

        assert!(cache.get(&transactions_key(&alice())).await.unwrap().is_some());
        assert!(repo.inner.find_by_owner(&alice()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_update_is_rejected() {
        let (service, _, _) = service();
        let created = service.create_transaction(&alice(), income(10)).await.unwrap();

        let result = service
            .update_transaction(&alice(), created.id, UpdateTransactionRequest::new())
            .await;

        assert_eq!(
            result,
            Err(TransactionError::Validation(ValidationError::EmptyUpdate))
        );
    }

    #[tokio::test]
    async fn test_store_failure_reaches_caller_without_cache_side_effects() {
        let (service, repo, cache) = service();
        repo.go_down();

        let list = service.list_transactions(&alice()).await;
        assert!(matches!(list, Err(TransactionError::StoreUnavailable(_))));
        assert!(cache.get(&transactions_key(&alice())).await.unwrap().is_none());

        let summary = service.get_summary(&alice()).await;
        assert!(matches!(summary, Err(TransactionError::StoreUnavailable(_))));
        assert!(cache.get(&summary_key(&alice())).await.unwrap().is_none());

        let create = service.create_transaction(&alice(), income(1)).await;
        assert_eq!(
            create,
            Err(TransactionError::StoreUnavailable(
                RepositoryError::ConnectionFailed("store down".to_string())
            ))
        );
    }

    #[tokio::test]
    async fn test_cached_view_survives_store_outage() {
        let (service, repo, _) = service();
        let created = service.create_transaction(&alice(), income(10)).await.unwrap();
        service.list_transactions(&alice()).await.unwrap();

        repo.go_down();

        assert_eq!(
            service.list_transactions(&alice()).await.unwrap(),
            vec![created]
        );
    }

    #[tokio::test]
    async fn test_invalidation_attempts_every_key() {
        let cache = Arc::new(StickyListCache {
            inner: MemoryCache::new(100),
            deletes: AtomicUsize::new(0),
        });
        let (service, _, stats) = service_with(cache.clone());

        service.get_summary(&alice()).await.unwrap();
        service.create_transaction(&alice(), income(40)).await.unwrap();

        assert_eq!(cache.deletes.load(Ordering::SeqCst), 2);
        assert_eq!(service.get_summary(&alice()).await.unwrap(), Summary::new(40, 0));

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.invalidations, 1);
        assert_eq!(snapshot.write_errors, 1);
        assert_eq!(snapshot.read_errors, 0);
    }

    #[tokio::test]
    async fn test_huge_ttl_still_serves_reads() {
        let repo = Arc::new(MockRepository::default());
        let service = CachedTransactionService::new(
            repo.clone(),
            Arc::new(MemoryCache::new(10)),
            Duration::from_secs(u64::MAX),
            CACHE_TIMEOUT,
            Arc::new(CacheStats::new()),
        );

        let created = service.create_transaction(&alice(), income(7)).await.unwrap();
        assert_eq!(
            service.list_transactions(&alice()).await.unwrap(),
            vec![created.clone()]
        );
        assert_eq!(
            service.list_transactions(&alice()).await.unwrap(),
            vec![created]
        );
        assert_eq!(service.get_summary(&alice()).await.unwrap(), Summary::new(7, 0));
        assert_eq!(repo.find_calls(), 2);
    }

    #[tokio::test]
    async fn test_cached_list_expires_after_ttl() {
        let repo = Arc::new(MockRepository::default());
        let service = CachedTransactionService::new(
            repo.clone(),
            Arc::new(MemoryCache::new(10)),
            Duration::from_millis(50),
            CACHE_TIMEOUT,
            Arc::new(CacheStats::new()),
        );

        service.list_transactions(&alice()).await.unwrap();
        service.list_transactions(&alice()).await.unwrap();
        assert_eq!(repo.find_calls(), 1);

        tokio::time::sleep(Duration::from_millis(100)).await;

        service.list_transactions(&alice()).await.unwrap();
        assert_eq!(repo.find_calls(), 2);
    }

    #[tokio::test]
    async fn test_failed_invalidation_leaves_hit_rate_alone() {
        let cache = Arc::new(StickyListCache {
            inner: MemoryCache::new(100),
            deletes: AtomicUsize::new(0),
        });
        let (service, _, stats) = service_with(cache);

        service.get_summary(&alice()).await.unwrap();
        service.get_summary(&alice()).await.unwrap();
        service.create_transaction(&alice(), income(5)).await.unwrap();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.write_errors, 1);
        assert_eq!(snapshot.read_errors, 0);
        assert!((snapshot.hit_rate - 0.5).abs() < 0.001);
    }

    #[tokio::test]
    async fn test_stats_count_hits_and_misses() {
        let (service, _, stats) = service_with(Arc::new(MemoryCache::new(100)));

        service.list_transactions(&alice()).await.unwrap();
        service.list_transactions(&alice()).await.unwrap();
        service.get_summary(&alice()).await.unwrap();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.hits, 1);
        assert_eq!(snapshot.misses, 2);
        assert_eq!(snapshot.read_errors, 0);
        assert_eq!(snapshot.write_errors, 0);
    }
}
