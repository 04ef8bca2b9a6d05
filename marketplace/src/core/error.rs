use crate::listings::ListingError;
use crate::storage::StorageError;
use crate::transactions::TransactionError;
use shared::{ErrorCode, ValidationError};
use thiserror::Error;

/// 应用层错误 - 汇总各存储层的错误
#[derive(Debug, Error)]
pub enum MarketError {
    #[error("Invalid {}: {}", .0.field(), .0)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Nothing to undo for transaction {0}")]
    NothingToUndo(String),
}

impl MarketError {
    pub fn code(&self) -> ErrorCode {
        match self {
            MarketError::Validation(e) => e.code(),
            MarketError::Listing(e) => e.code(),
            MarketError::Transaction(e) => e.code(),
            MarketError::Storage(e) => e.code(),
            MarketError::NothingToUndo(_) => ErrorCode::NothingToUndo,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MarketError>;
