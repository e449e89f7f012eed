mod error;
mod requests;
mod service;
mod sorting;
mod summary;
mod types;

pub use error::{OwnerIdError, Result, TransactionError, ValidationError};
pub use requests::{CreateTransactionRequest, UpdateTransactionRequest};
pub use service::TransactionService;
pub use sorting::sort_by_most_recent;
pub use summary::{summarize, Summary};
pub use types::{OwnerId, Transaction, TransactionKind, TransactionPatch};
