use shared::ErrorCode;
use thiserror::Error;

/// Listing store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("Listing not found: {0}")]
    NotFound(String),

    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { available: u32, requested: u32 },
}

impl ListingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ListingError::NotFound(_) => ErrorCode::ProductNotFound,
            ListingError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
        }
    }
}

pub type ListingResult<T> = Result<T, ListingError>;

/// Outcome of a successful stock decrement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockUpdate {
    /// Stock is not tracked for this listing; nothing changed
    Unlimited,
    Decremented { remaining: u32 },
}
