pub mod error;
pub mod health;
pub mod transactions;

pub use error::AppError;
