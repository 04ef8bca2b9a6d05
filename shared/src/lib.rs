//! Shared types for the marketplace
//!
//! Domain records persisted by the stores, the typed listing input that
//! re-validates the sell form contract, and the unified error codes.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ErrorCode, InvalidErrorCode, ValidationError};
pub use models::{
    Category, Condition, Listing, ListingDraft, MAX_PRICE, MAX_QUANTITY, NewListing,
    ShippingOption, StockLevel, Transaction, TransactionStatus,
};
pub use serde::{Deserialize, Serialize};
