//! Derived views over a listing slice: search, sort, paginate
//!
//! Pure functions; the input slice is never modified.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use shared::{Category, Listing};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Grid page size
pub const DEFAULT_ITEMS_PER_PAGE: usize = 8;

/// Search criteria besides the free-text query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    /// Empty = every category
    pub categories: Vec<Category>,
    /// Inclusive lower bound
    pub min_price: Option<Decimal>,
    /// Inclusive upper bound
    pub max_price: Option<Decimal>,
}

impl SearchFilters {
    fn matches_category(&self, category: Category) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }

    fn matches_price(&self, price: Decimal) -> bool {
        self.min_price.is_none_or(|min| price >= min) && self.max_price.is_none_or(|max| price <= max)
    }
}

/// Listings whose title or description contains `query` (case-insensitive)
/// and that pass `filters`, in input order
pub fn search(listings: &[Listing], query: &str, filters: &SearchFilters) -> Vec<Listing> {
    let needle = query.to_lowercase();
    listings
        .iter()
        .filter(|listing| {
            needle.is_empty()
                || listing.title.to_lowercase().contains(&needle)
                || listing.description.to_lowercase().contains(&needle)
        })
        .filter(|listing| filters.matches_category(listing.category))
        .filter(|listing| filters.matches_price(listing.price))
        .cloned()
        .collect()
}

/// Grid sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// rating × 10 + date_millis / 1e9, descending
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Newest,
    Rating,
}

impl SortOption {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Newest => "newest",
            SortOption::Rating => "rating",
        }
    }
}

/// Unknown names fall back to [`SortOption::Featured`]
impl FromStr for SortOption {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "price-low" => SortOption::PriceLow,
            "price-high" => SortOption::PriceHigh,
            "newest" => SortOption::Newest,
            "rating" => SortOption::Rating,
            _ => SortOption::Featured,
        })
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn featured_score(listing: &Listing) -> f64 {
    let millis = listing.date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
    listing.rating * 10.0 + millis as f64 / 1e9
}

/// Sorted copy of `listings`; ties keep their input order
pub fn sort(listings: &[Listing], option: SortOption) -> Vec<Listing> {
    let mut sorted = listings.to_vec();
    let compare: fn(&Listing, &Listing) -> Ordering = match option {
        SortOption::PriceLow => |a, b| a.price.cmp(&b.price),
        SortOption::PriceHigh => |a, b| b.price.cmp(&a.price),
        SortOption::Newest => |a, b| b.date.cmp(&a.date),
        SortOption::Rating => |a, b| b.rating.total_cmp(&a.rating),
        SortOption::Featured => |a, b| featured_score(b).total_cmp(&featured_score(a)),
    };
    sorted.sort_by(compare);
    sorted
}

/// One page of results
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
}

/// Slice out page `page` (1-based; 0 is treated as 1)
///
/// A `per_page` of 0 uses [`DEFAULT_ITEMS_PER_PAGE`]. Pages past the end are
/// empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let page = page.max(1);
    let per_page = if per_page == 0 {
        DEFAULT_ITEMS_PER_PAGE
    } else {
        per_page
    };
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let start = (page - 1).saturating_mul(per_page).min(total_items);
    let end = start.saturating_add(per_page).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        page,
        per_page,
        total_items,
        total_pages,
        has_next: end < total_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::PLACEHOLDER_IMAGE;

    fn listing(id: &str, price: i64, rating: f64, date: (i32, u32, u32), category: Category) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("Item {id}"),
            price: Decimal::from(price),
            category,
            condition: None,
            description: format!("Description of item {id}"),
            quantity: Some(3),
            shipping_option: None,
            rating,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            views: 0,
            likes: 0,
            seller: "Seller".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    fn ids(listings: &[Listing]) -> Vec<&str> {
        listings.iter().map(|l| l.id.as_str()).collect()
    }

    fn sample() -> Vec<Listing> {
        vec![
            listing("a", 300, 4.5, (2023, 5, 1), Category::Electronics),
            listing("b", 100, 4.9, (2023, 1, 1), Category::Books),
            listing("c", 200, 4.9, (2023, 9, 1), Category::Electronics),
            listing("d", 100, 0.0, (2024, 2, 1), Category::Services),
        ]
    }

    #[test]
    fn test_search_matches_title_or_description() {
        let mut items = sample();
        items[0].title = "MacBook Pro".to_string();
        items[1].description = "A novel about a macbook".to_string();

        let found = search(&items, "MACBOOK", &SearchFilters::default());
        assert_eq!(ids(&found), vec!["a", "b"]);

        let all = search(&items, "", &SearchFilters::default());
        assert_eq!(all.len(), items.len());
    }

    #[test]
    fn test_search_category_and_price_filters() {
        let filters = SearchFilters {
            categories: vec![Category::Electronics],
            min_price: Some(Decimal::from(200)),
            max_price: Some(Decimal::from(300)),
        };
        assert_eq!(ids(&search(&sample(), "", &filters)), vec!["a", "c"]);

        let cheap = SearchFilters {
            max_price: Some(Decimal::from(100)),
            ..Default::default()
        };
        assert_eq!(ids(&search(&sample(), "", &cheap)), vec!["b", "d"]);
    }

    #[test]
    fn test_open_search_returns_catalog_in_order() {
        let filters = SearchFilters {
            categories: Vec::new(),
            min_price: Some(Decimal::ZERO),
            max_price: Some(Decimal::MAX),
        };
        assert_eq!(search(&sample(), "", &filters), sample());
    }

    #[test]
    fn test_price_high_reverses_price_low() {
        let mut items = sample();
        items[3].price = Decimal::from(50);
        let low = sort(&items, SortOption::PriceLow);
        let mut high = sort(&low, SortOption::PriceHigh);
        high.reverse();
        assert_eq!(ids(&high), ids(&low));
    }

    #[test]
    fn test_sort_price_is_stable() {
        assert_eq!(ids(&sort(&sample(), SortOption::PriceLow)), vec!["b", "d", "c", "a"]);
        assert_eq!(ids(&sort(&sample(), SortOption::PriceHigh)), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_sort_newest_and_rating() {
        assert_eq!(ids(&sort(&sample(), SortOption::Newest)), vec!["d", "c", "a", "b"]);
        assert_eq!(ids(&sort(&sample(), SortOption::Rating)), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_featured_prefers_rating_then_recency() {
        // each day adds 0.0864, so a's four months outweigh b's 0.4 rating edge
        assert_eq!(ids(&sort(&sample(), SortOption::Featured)), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_sort_does_not_touch_input() {
        let items = sample();
        let _ = sort(&items, SortOption::PriceLow);
        assert_eq!(ids(&items), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_unknown_sort_falls_back_to_featured() {
        assert_eq!("bogus".parse::<SortOption>(), Ok(SortOption::Featured));
        assert_eq!("price-high".parse::<SortOption>(), Ok(SortOption::PriceHigh));
    }

    #[test]
    fn test_paginate_boundaries() {
        let items: Vec<u32> = (1..=17).collect();

        let first = paginate(&items, 1, 8);
        assert_eq!(first.items, (1..=8).collect::<Vec<_>>());
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next);

        let last = paginate(&items, 3, 8);
        assert_eq!(last.items, vec![17]);
        assert!(!last.has_next);

        let beyond = paginate(&items, 9, 8);
        assert!(beyond.items.is_empty());
        assert!(!beyond.has_next);

        let defaulted = paginate(&items, 0, 0);
        assert_eq!(defaulted.page, 1);
        assert_eq!(defaulted.per_page, DEFAULT_ITEMS_PER_PAGE);
    }

    #[test]
    fn test_paginate_exact_fit_has_no_next() {
        let items: Vec<u32> = (1..=8).collect();
        let page = paginate(&items, 1, 8);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
    }
}
