//! Functional core for fintrack.
//!
//! Pure types and functions shared by the server: the transaction model and
//! its validation, the summary fold, cache keys and serialization, and the
//! collaborator traits implemented by the storage and cache backends.

pub mod cache;
pub mod storage;
pub mod transactions;
