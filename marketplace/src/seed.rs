//! Sample data used when a slot has never been written

use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::Decimal;
use shared::models::PLACEHOLDER_IMAGE;
use shared::{Category, Condition, Listing, Transaction, TransactionStatus};

/// Seed stock for physical goods is drawn from this range
pub const SEED_STOCK_RANGE: std::ops::RangeInclusive<u32> = 1..=20;

struct SeedListing {
    id: &'static str,
    title: &'static str,
    price: i64,
    seller: &'static str,
    rating: f64,
    category: Category,
    condition: Option<Condition>,
    description: &'static str,
    date: (i32, u32, u32),
    views: u32,
    likes: u32,
}

const SEED_LISTINGS: [SeedListing; 10] = [
    SeedListing {
        id: "1",
        title: "MacBook Pro 16-inch",
        price: 2399,
        seller: "TechStore",
        rating: 4.9,
        category: Category::Electronics,
        condition: Some(Condition::New),
        description: "The most powerful MacBook Pro ever is here. With the blazing-fast M2 Pro chip.",
        date: (2023, 12, 1),
        views: 245,
        likes: 18,
    },
    SeedListing {
        id: "2",
        title: "Leather Jacket",
        price: 199,
        seller: "FashionHub",
        rating: 4.7,
        category: Category::Clothing,
        condition: Some(Condition::LikeNew),
        description: "Premium leather jacket, perfect for fall and winter.",
        date: (2023, 11, 15),
        views: 187,
        likes: 12,
    },
    SeedListing {
        id: "3",
        title: "Smart Home Speaker",
        price: 129,
        seller: "HomeGadgets",
        rating: 4.5,
        category: Category::Electronics,
        condition: Some(Condition::New),
        description: "Voice-controlled smart speaker with premium sound quality.",
        date: (2023, 10, 20),
        views: 132,
        likes: 8,
    },
    SeedListing {
        id: "4",
        title: "Vintage Coffee Table",
        price: 349,
        seller: "AntiqueFurniture",
        rating: 4.8,
        category: Category::HomeGarden,
        condition: Some(Condition::Good),
        description: "Beautiful vintage coffee table with solid wood construction.",
        date: (2023, 9, 5),
        views: 98,
        likes: 15,
    },
    SeedListing {
        id: "5",
        title: "Wireless Headphones",
        price: 199,
        seller: "AudioWorld",
        rating: 4.6,
        category: Category::Electronics,
        condition: Some(Condition::New),
        description: "Noise-cancelling wireless headphones with 30-hour battery life.",
        date: (2023, 8, 12),
        views: 156,
        likes: 22,
    },
    SeedListing {
        id: "6",
        title: "Designer Sunglasses",
        price: 149,
        seller: "FashionHub",
        rating: 4.4,
        category: Category::Clothing,
        condition: Some(Condition::New),
        description: "Stylish designer sunglasses with UV protection.",
        date: (2023, 7, 28),
        views: 112,
        likes: 9,
    },
    SeedListing {
        id: "7",
        title: "Smartphone 13 Pro",
        price: 999,
        seller: "TechStore",
        rating: 4.9,
        category: Category::Phones,
        condition: Some(Condition::New),
        description: "Latest smartphone with advanced camera system and all-day battery life.",
        date: (2023, 6, 15),
        views: 278,
        likes: 31,
    },
    SeedListing {
        id: "8",
        title: "Indoor Plant Collection",
        price: 89,
        seller: "GreenThumb",
        rating: 4.7,
        category: Category::HomeGarden,
        condition: Some(Condition::New),
        description: "Set of 5 easy-care indoor plants perfect for any home.",
        date: (2023, 5, 22),
        views: 143,
        likes: 17,
    },
    SeedListing {
        id: "9",
        title: "Web Development Services",
        price: 500,
        seller: "CodeMasters",
        rating: 4.9,
        category: Category::Services,
        condition: None,
        description: "Professional web development services. Custom websites built with the latest technologies.",
        date: (2023, 4, 10),
        views: 189,
        likes: 14,
    },
    SeedListing {
        id: "10",
        title: "Graphic Design Package",
        price: 299,
        seller: "DesignPro",
        rating: 4.8,
        category: Category::Services,
        condition: None,
        description: "Complete graphic design package including logo, business cards, and social media assets.",
        date: (2023, 3, 5),
        views: 167,
        likes: 21,
    },
];

struct SeedTransaction {
    id: &'static str,
    product_id: &'static str,
    product_title: &'static str,
    price: i64,
    quantity: u32,
    seller: &'static str,
    status: TransactionStatus,
    date: (i32, u32, u32),
}

const SEED_TRANSACTIONS: [SeedTransaction; 10] = [
    SeedTransaction {
        id: "t1",
        product_id: "1",
        product_title: "MacBook Pro 16-inch",
        price: 2399,
        quantity: 1,
        seller: "TechStore",
        status: TransactionStatus::Delivered,
        date: (2023, 12, 15),
    },
    SeedTransaction {
        id: "t2",
        product_id: "5",
        product_title: "Wireless Headphones",
        price: 199,
        quantity: 1,
        seller: "AudioWorld",
        status: TransactionStatus::Shipped,
        date: (2024, 1, 10),
    },
    SeedTransaction {
        id: "t3",
        product_id: "2",
        product_title: "Leather Jacket",
        price: 199,
        quantity: 1,
        seller: "FashionHub",
        status: TransactionStatus::Pending,
        date: (2024, 2, 1),
    },
    SeedTransaction {
        id: "t4",
        product_id: "3",
        product_title: "Smart Home Speaker",
        price: 129,
        quantity: 2,
        seller: "HomeGadgets",
        status: TransactionStatus::Processing,
        date: (2024, 1, 25),
    },
    SeedTransaction {
        id: "t5",
        product_id: "4",
        product_title: "Vintage Coffee Table",
        price: 349,
        quantity: 1,
        seller: "AntiqueFurniture",
        status: TransactionStatus::Cancelled,
        date: (2023, 11, 5),
    },
    SeedTransaction {
        id: "t6",
        product_id: "7",
        product_title: "Smartphone 13 Pro",
        price: 999,
        quantity: 1,
        seller: "TechStore",
        status: TransactionStatus::Delivered,
        date: (2023, 10, 20),
    },
    SeedTransaction {
        id: "t7",
        product_id: "8",
        product_title: "Indoor Plant Collection",
        price: 89,
        quantity: 3,
        seller: "GreenThumb",
        status: TransactionStatus::Shipped,
        date: (2024, 1, 15),
    },
    SeedTransaction {
        id: "t8",
        product_id: "9",
        product_title: "Web Development Services",
        price: 500,
        quantity: 1,
        seller: "CodeMasters",
        status: TransactionStatus::Processing,
        date: (2024, 1, 28),
    },
    SeedTransaction {
        id: "t9",
        product_id: "6",
        product_title: "Designer Sunglasses",
        price: 149,
        quantity: 1,
        seller: "FashionHub",
        status: TransactionStatus::Pending,
        date: (2024, 2, 2),
    },
    SeedTransaction {
        id: "t10",
        product_id: "10",
        product_title: "Graphic Design Package",
        price: 299,
        quantity: 1,
        seller: "DesignPro",
        status: TransactionStatus::Cancelled,
        date: (2023, 12, 10),
    },
];

fn seed_date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Sample catalog; physical goods get a random stock in [`SEED_STOCK_RANGE`]
pub fn seed_listings() -> Vec<Listing> {
    let mut rng = rand::thread_rng();
    SEED_LISTINGS
        .iter()
        .map(|seed| Listing {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            price: Decimal::from(seed.price),
            category: seed.category,
            condition: seed.condition,
            description: seed.description.to_string(),
            quantity: (!seed.category.is_service()).then(|| rng.gen_range(SEED_STOCK_RANGE)),
            shipping_option: None,
            rating: seed.rating,
            date: seed_date(seed.date),
            views: seed.views,
            likes: seed.likes,
            seller: seed.seller.to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
        })
        .collect()
}

/// Sample order history in mixed states, bought by `buyer`
pub fn seed_transactions(buyer: &str) -> Vec<Transaction> {
    SEED_TRANSACTIONS
        .iter()
        .map(|seed| {
            let price = Decimal::from(seed.price);
            Transaction {
                id: seed.id.to_string(),
                product_id: seed.product_id.to_string(),
                product_title: seed.product_title.to_string(),
                product_image: PLACEHOLDER_IMAGE.to_string(),
                price,
                quantity: seed.quantity,
                total: price * Decimal::from(seed.quantity),
                seller: seed.seller.to_string(),
                buyer: buyer.to_string(),
                status: seed.status,
                previous_status: None,
                date: seed_date(seed.date),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_listings_shape() {
        let listings = seed_listings();
        assert_eq!(listings.len(), 10);

        for listing in &listings {
            if listing.is_service() {
                assert_eq!(listing.quantity, None);
                assert_eq!(listing.condition, None);
            } else {
                let stock = listing.quantity.unwrap();
                assert!(SEED_STOCK_RANGE.contains(&stock));
            }
        }

        let services: Vec<_> = listings
            .iter()
            .filter(|l| l.is_service())
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(services, vec!["9", "10"]);
    }

    #[test]
    fn test_seed_transactions_totals() {
        let transactions = seed_transactions("You");
        assert_eq!(transactions.len(), 10);
        assert!(transactions.iter().all(|t| t.buyer == "You"));

        let t4 = transactions.iter().find(|t| t.id == "t4").unwrap();
        assert_eq!(t4.total, Decimal::from(258));
        let t7 = transactions.iter().find(|t| t.id == "t7").unwrap();
        assert_eq!(t7.total, Decimal::from(267));
    }

    #[test]
    fn test_seed_dates_are_valid() {
        let default_date = NaiveDate::default();
        assert!(seed_listings().iter().all(|l| l.date != default_date));
        assert!(seed_transactions("You").iter().all(|t| t.date != default_date));
    }
}
