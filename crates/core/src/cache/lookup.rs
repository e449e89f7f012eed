//! Tagged outcomes for cache reads plus a timeout guard for cache calls.

use std::future::Future;
use std::time::Duration;

use super::{CacheError, Result};

/// The result of looking up a derived view in the cache.
///
/// `Unavailable` covers connection errors, timeouts and undecodable
/// payloads. Callers treat it exactly like `Miss` but may log or count it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup<T> {
    Hit(T),
    Miss,
    Unavailable(CacheError),
}

impl<T> CacheLookup<T> {
    /// Builds a lookup from a raw cache read and a decoder for the payload.
    pub fn from_bytes<E, F>(read: Result<Option<Vec<u8>>>, decode: F) -> Self
    where
        E: Into<CacheError>,
        F: FnOnce(&[u8]) -> std::result::Result<T, E>,
    {
        match read {
            Ok(Some(bytes)) => match decode(&bytes) {
                Ok(value) => CacheLookup::Hit(value),
                Err(e) => CacheLookup::Unavailable(e.into()),
            },
            Ok(None) => CacheLookup::Miss,
            Err(e) => CacheLookup::Unavailable(e),
        }
    }
}

/// Runs a cache operation, failing with [`CacheError::Timeout`] if it does
/// not complete within `limit`.
pub async fn bounded<T, F>(limit: Duration, operation: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result,
        Err(_) => Err(CacheError::Timeout(limit)),
    }
}
