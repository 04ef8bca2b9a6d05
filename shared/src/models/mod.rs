//! Data models
//!
//! Records persisted by the marketplace stores, serialized as camelCase JSON.

pub mod catalog;
pub mod listing;
pub mod transaction;

pub use catalog::{Category, Condition, ShippingOption};
pub use listing::{
    DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, LOW_STOCK_THRESHOLD, Listing, ListingDraft,
    MAX_PRICE, MAX_QUANTITY, NewListing, PLACEHOLDER_IMAGE, PRICE_DECIMAL_PLACES, StockLevel,
    TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
pub use transaction::{Transaction, TransactionStatus};
