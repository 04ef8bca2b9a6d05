//! Catalog vocabularies: categories, item conditions, shipping options

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Listing category (fixed catalog)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Electronics,
    Clothing,
    HomeGarden,
    Vehicles,
    Phones,
    Food,
    Sports,
    Books,
    /// Services carry no stock and no condition
    Services,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Electronics,
        Category::Clothing,
        Category::HomeGarden,
        Category::Vehicles,
        Category::Phones,
        Category::Food,
        Category::Sports,
        Category::Books,
        Category::Services,
    ];

    /// Slug used in persisted records and CLI arguments
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Clothing => "clothing",
            Category::HomeGarden => "home-garden",
            Category::Vehicles => "vehicles",
            Category::Phones => "phones",
            Category::Food => "food",
            Category::Sports => "sports",
            Category::Books => "books",
            Category::Services => "services",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::HomeGarden => "Home & Garden",
            Category::Vehicles => "Vehicles",
            Category::Phones => "Phones",
            Category::Food => "Food",
            Category::Sports => "Sports",
            Category::Books => "Books",
            Category::Services => "Services",
        }
    }

    #[inline]
    pub const fn is_service(&self) -> bool {
        matches!(self, Category::Services)
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == slug)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical condition of a listed item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like-new",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }
}

impl FromStr for Condition {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Condition::New),
            "like-new" | "like_new" => Ok(Condition::LikeNew),
            "good" => Ok(Condition::Good),
            "fair" => Ok(Condition::Fair),
            "poor" => Ok(Condition::Poor),
            _ => Err(ValidationError::UnknownCondition(s.to_string())),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a physical item reaches the buyer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ShippingOption {
    /// Fixed shipping fee
    #[default]
    Flat,
    /// Buyer collects in person
    Pickup,
}

impl ShippingOption {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ShippingOption::Flat => "flat",
            ShippingOption::Pickup => "pickup",
        }
    }
}

impl FromStr for ShippingOption {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(ShippingOption::Flat),
            "pickup" => Ok(ShippingOption::Pickup),
            _ => Err(ValidationError::UnknownShippingOption(s.to_string())),
        }
    }
}

impl fmt::Display for ShippingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
