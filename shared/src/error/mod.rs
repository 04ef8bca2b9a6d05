//! Unified error system for the marketplace
//!
//! - [`ErrorCode`]: standardized numeric codes shared by every layer
//! - [`ValidationError`]: listing input rejected at the store boundary
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order (transaction) errors
//! - 6xxx: Product (listing) errors
//! - 9xxx: System errors

mod codes;
mod validation;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use validation::ValidationError;
