mod error;
mod keys;
mod lookup;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{owner_cache_key, owner_cache_keys, summary_key, transactions_key, CacheView};
pub use lookup::{bounded, CacheLookup};
pub use serialization::{
    deserialize_summary, deserialize_transactions, serialize_summary, serialize_transactions,
    SerializationError,
};
pub use traits::Cache;
