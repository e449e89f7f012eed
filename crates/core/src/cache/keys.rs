use std::fmt;

use crate::transactions::OwnerId;

/// The derived views cached per owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheView {
    Transactions,
    Summary,
}

impl CacheView {
    /// Every view kept for an owner. A write invalidates all of them.
    pub const ALL: [CacheView; 2] = [CacheView::Transactions, CacheView::Summary];

    pub fn as_str(&self) -> &'static str {
        match self {
            CacheView::Transactions => "transactions",
            CacheView::Summary => "summary",
        }
    }
}

impl fmt::Display for CacheView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the cache key for one of an owner's views.
pub fn owner_cache_key(owner: &OwnerId, view: CacheView) -> String {
    format!("owner:{}:{}", owner, view)
}

/// Returns the cache key for an owner's transaction list.
pub fn transactions_key(owner: &OwnerId) -> String {
    owner_cache_key(owner, CacheView::Transactions)
}

/// Returns the cache key for an owner's summary.
pub fn summary_key(owner: &OwnerId) -> String {
    owner_cache_key(owner, CacheView::Summary)
}

/// Returns every cache key held for an owner.
pub fn owner_cache_keys(owner: &OwnerId) -> Vec<String> {
    CacheView::ALL
        .iter()
        .map(|view| owner_cache_key(owner, *view))
        .collect()
}
