use crate::listings::ListingError;
use rust_decimal::Decimal;
use shared::{ErrorCode, MAX_QUANTITY, TransactionStatus};
use thiserror::Error;

/// Transaction store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error("Quantity must be between 1 and {max}, got {0}", max = MAX_QUANTITY)]
    InvalidQuantity(u32),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { available: u32, requested: u32 },

    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    #[error("Cannot change status from {from} to {to}")]
    IllegalTransition {
        from: TransactionStatus,
        to: TransactionStatus,
    },

    #[error("Order is already {0}")]
    TerminalStatus(TransactionStatus),

    #[error("Order total out of range: {price} x {quantity}")]
    TotalOutOfRange { price: Decimal, quantity: u32 },
}

impl TransactionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TransactionError::InvalidQuantity(_) => ErrorCode::InvalidQuantity,
            TransactionError::TotalOutOfRange { .. } => ErrorCode::ValueOutOfRange,
            TransactionError::ProductNotFound(_) => ErrorCode::ProductNotFound,
            TransactionError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            TransactionError::TransactionNotFound(_) => ErrorCode::OrderNotFound,
            TransactionError::IllegalTransition { .. } | TransactionError::TerminalStatus(_) => {
                ErrorCode::InvalidStatusTransition
            }
        }
    }
}

impl From<ListingError> for TransactionError {
    fn from(err: ListingError) -> Self {
        match err {
            ListingError::NotFound(id) => TransactionError::ProductNotFound(id),
            ListingError::InsufficientStock {
                available,
                requested,
            } => TransactionError::InsufficientStock {
                available,
                requested,
            },
        }
    }
}

pub type TransactionResult<T> = Result<T, TransactionError>;
