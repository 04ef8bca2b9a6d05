//! Listing input validation errors

use super::ErrorCode;
use thiserror::Error;

/// Why a listing draft was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title must be between {min} and {max} characters, got {actual}")]
    TitleLength { min: usize, max: usize, actual: usize },

    #[error("Description must be between {min} and {max} characters, got {actual}")]
    DescriptionLength { min: usize, max: usize, actual: usize },

    #[error("Price must be a positive number, got {0}")]
    NonPositivePrice(String),

    #[error("Price must be at most {max}, got {actual}")]
    PriceTooHigh { max: String, actual: String },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown condition: {0}")]
    UnknownCondition(String),

    #[error("Unknown shipping option: {0}")]
    UnknownShippingOption(String),

    #[error("Please select a condition")]
    MissingCondition,

    #[error("Quantity must be a positive integer")]
    MissingQuantity,

    #[error("Quantity must be at most {max}, got {actual}")]
    QuantityTooHigh { max: u32, actual: u32 },
}

impl ValidationError {
    /// Error code for this validation failure
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingCondition | ValidationError::MissingQuantity => {
                ErrorCode::RequiredField
            }
            ValidationError::TitleLength { .. }
            | ValidationError::DescriptionLength { .. }
            | ValidationError::NonPositivePrice(_)
            | ValidationError::PriceTooHigh { .. }
            | ValidationError::QuantityTooHigh { .. } => ErrorCode::ValueOutOfRange,
            ValidationError::UnknownCategory(_)
            | ValidationError::UnknownCondition(_)
            | ValidationError::UnknownShippingOption(_) => ErrorCode::ValidationFailed,
        }
    }

    /// Form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::TitleLength { .. } => "title",
            ValidationError::DescriptionLength { .. } => "description",
            ValidationError::NonPositivePrice(_) | ValidationError::PriceTooHigh { .. } => "price",
            ValidationError::UnknownCategory(_) => "category",
            ValidationError::UnknownCondition(_) | ValidationError::MissingCondition => {
                "condition"
            }
            ValidationError::UnknownShippingOption(_) => "shippingOption",
            ValidationError::MissingQuantity | ValidationError::QuantityTooHigh { .. } => {
                "quantity"
            }
        }
    }
}
