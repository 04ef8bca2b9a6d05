//! Listing Model

use super::catalog::{Category, Condition, ShippingOption};
use crate::error::ValidationError;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Image assigned to listings created without an upload
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=300";

/// Stock strictly below this is reported as low
pub const LOW_STOCK_THRESHOLD: u32 = 5;

pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MIN_CHARS: usize = 20;
pub const DESCRIPTION_MAX_CHARS: usize = 2000;

/// Prices are kept to cents (half-up)
pub const PRICE_DECIMAL_PLACES: u32 = 2;
/// Highest accepted listing price (1,000,000)
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
/// Most units a listing can stock, and the most one order can buy
pub const MAX_QUANTITY: u32 = 9999;

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    pub description: String,
    /// Units in stock; absent for services
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_option: Option<ShippingOption>,
    /// 0 = unrated
    pub rating: f64,
    pub date: NaiveDate,
    pub views: u32,
    pub likes: u32,
    pub seller: String,
    pub image: String,
}

impl Listing {
    #[inline]
    pub fn is_service(&self) -> bool {
        self.category.is_service()
    }

    /// Availability as shown on the product page
    pub fn stock_level(&self) -> StockLevel {
        if self.is_service() {
            return StockLevel::Unlimited;
        }
        match self.quantity {
            None => StockLevel::Unlimited,
            Some(0) => StockLevel::OutOfStock,
            Some(n) if n < LOW_STOCK_THRESHOLD => StockLevel::Low(n),
            Some(n) => StockLevel::InStock(n),
        }
    }

    /// Largest quantity a buyer may select (`None` = no limit)
    pub fn max_purchase_quantity(&self) -> Option<u32> {
        if self.is_service() {
            Some(1)
        } else {
            self.quantity
        }
    }
}

/// Stock availability of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// Services and listings without a tracked quantity
    Unlimited,
    OutOfStock,
    /// Fewer than [`LOW_STOCK_THRESHOLD`] units left
    Low(u32),
    InStock(u32),
}

impl StockLevel {
    pub fn is_available(&self) -> bool {
        !matches!(self, StockLevel::OutOfStock)
    }
}

/// Raw sell-form input, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub title: String,
    pub price: Decimal,
    pub category: String,
    pub condition: Option<String>,
    pub description: String,
    pub quantity: Option<u32>,
    pub shipping_option: Option<String>,
}

/// Validated listing input
///
/// Only obtainable through `NewListing::try_from(ListingDraft)`, so a value of
/// this type always satisfies the sell form contract: services carry no
/// condition, quantity or shipping option, physical goods carry a condition
/// and a positive quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    title: String,
    price: Decimal,
    category: Category,
    condition: Option<Condition>,
    description: String,
    quantity: Option<u32>,
    shipping_option: Option<ShippingOption>,
}

impl NewListing {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn quantity(&self) -> Option<u32> {
        self.quantity
    }

    /// Turn the input into a catalog entry with fresh counters
    pub fn into_listing(self, id: String, seller: String, date: NaiveDate) -> Listing {
        Listing {
            id,
            title: self.title,
            price: self.price,
            category: self.category,
            condition: self.condition,
            description: self.description,
            quantity: self.quantity,
            shipping_option: self.shipping_option,
            rating: 0.0,
            date,
            views: 0,
            likes: 0,
            seller,
            image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<ListingDraft> for NewListing {
    type Error = ValidationError;

    fn try_from(draft: ListingDraft) -> Result<Self, Self::Error> {
        let title_len = draft.title.chars().count();
        if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&title_len) {
            return Err(ValidationError::TitleLength {
                min: TITLE_MIN_CHARS,
                max: TITLE_MAX_CHARS,
                actual: title_len,
            });
        }

        let description_len = draft.description.chars().count();
        if !(DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&description_len) {
            return Err(ValidationError::DescriptionLength {
                min: DESCRIPTION_MIN_CHARS,
                max: DESCRIPTION_MAX_CHARS,
                actual: description_len,
            });
        }

        // 价格保留两位小数，落盘为 JSON 数字时不丢精度
        let price = draft
            .price
            .round_dp_with_strategy(PRICE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        if price <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice(draft.price.to_string()));
        }
        if price > MAX_PRICE {
            return Err(ValidationError::PriceTooHigh {
                max: MAX_PRICE.to_string(),
                actual: draft.price.to_string(),
            });
        }

        let category: Category = draft.category.parse()?;

        if category.is_service() {
            return Ok(NewListing {
                title: draft.title,
                price,
                category,
                condition: None,
                description: draft.description,
                quantity: None,
                shipping_option: None,
            });
        }

        let condition: Condition = non_blank(draft.condition)
            .ok_or(ValidationError::MissingCondition)?
            .parse()?;

        let quantity = match draft.quantity {
            Some(n) if n > MAX_QUANTITY => {
                return Err(ValidationError::QuantityTooHigh {
                    max: MAX_QUANTITY,
                    actual: n,
                });
            }
            Some(n) if n >= 1 => n,
            _ => return Err(ValidationError::MissingQuantity),
        };

        let shipping_option = match non_blank(draft.shipping_option) {
            Some(raw) => raw.parse()?,
            None => ShippingOption::default(),
        };

        Ok(NewListing {
            title: draft.title,
            price,
            category,
            condition: Some(condition),
            description: draft.description,
            quantity: Some(quantity),
            shipping_option: Some(shipping_option),
        })
    }
}
