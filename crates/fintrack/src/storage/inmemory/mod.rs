//! In-memory storage backend.
//!
//! Stores transactions in a `Vec` behind `Arc<RwLock<_>>`. Useful for
//! development and tests where persistence is not required.

mod repository;

pub use repository::InMemoryRepository;
