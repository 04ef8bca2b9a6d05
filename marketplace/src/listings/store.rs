//! ListingStore - the catalog
//!
//! Owns every listing, newest first. Mutations persist the whole catalog to
//! the `listings` slot; a failed save is logged and the in-memory change kept.

use super::error::{ListingError, ListingResult, StockUpdate};
use super::view::{self, SearchFilters, SortOption};
use crate::seed;
use crate::storage::Repository;
use crate::utils::IdGenerator;
use chrono::Utc;
use parking_lot::RwLock;
use shared::{Listing, NewListing};

pub struct ListingStore {
    listings: RwLock<Vec<Listing>>,
    repository: Repository,
    ids: IdGenerator,
    seller_name: String,
}

impl std::fmt::Debug for ListingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingStore")
            .field("listings", &self.listings.read().len())
            .field("seller_name", &self.seller_name)
            .finish()
    }
}

impl ListingStore {
    /// Load the catalog from the repository, seeding it on first run
    pub fn load(repository: Repository, seller_name: impl Into<String>) -> Self {
        let listings = match repository.load_listings() {
            Ok(Some(listings)) => {
                tracing::info!(count = listings.len(), "Listings loaded");
                listings
            }
            Ok(None) => {
                let listings = seed::seed_listings();
                tracing::info!(count = listings.len(), "No saved listings, using sample catalog");
                if let Err(e) = repository.save_listings(&listings) {
                    tracing::error!(error = %e, "Failed to persist sample catalog");
                }
                listings
            }
            Err(e) => {
                tracing::error!(error = %e, error_code = %e.code(), "Saved listings unreadable, using sample catalog");
                seed::seed_listings()
            }
        };
        Self::with_listings(repository, seller_name, listings)
    }

    /// Start from a given catalog without touching the repository
    pub fn with_listings(
        repository: Repository,
        seller_name: impl Into<String>,
        listings: Vec<Listing>,
    ) -> Self {
        let ids = IdGenerator::listings().resume_after(listings.iter().map(|l| l.id.as_str()));
        Self {
            listings: RwLock::new(listings),
            repository,
            ids,
            seller_name: seller_name.into(),
        }
    }

    // ========== Mutations ==========

    /// Publish a validated listing at the front of the catalog
    pub fn add_listing(&self, new_listing: NewListing) -> Listing {
        let listing = new_listing.into_listing(
            self.ids.next_id(),
            self.seller_name.clone(),
            Utc::now().date_naive(),
        );

        let mut listings = self.listings.write();
        listings.insert(0, listing.clone());
        self.persist(&listings);
        drop(listings);

        tracing::info!(
            listing_id = %listing.id,
            category = %listing.category,
            quantity = ?listing.quantity,
            "Listing created"
        );
        listing
    }

    /// Take `quantity` units out of stock
    ///
    /// Services and listings without a tracked quantity always succeed
    /// without changing anything.
    pub fn update_listing_stock(&self, id: &str, quantity: u32) -> ListingResult<StockUpdate> {
        let mut listings = self.listings.write();
        let listing = listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| ListingError::NotFound(id.to_string()))?;

        if listing.is_service() {
            return Ok(StockUpdate::Unlimited);
        }
        let Some(available) = listing.quantity else {
            return Ok(StockUpdate::Unlimited);
        };

        if available < quantity {
            tracing::warn!(listing_id = %id, available, requested = quantity, "Insufficient stock");
            return Err(ListingError::InsufficientStock {
                available,
                requested: quantity,
            });
        }

        let remaining = available - quantity;
        listing.quantity = Some(remaining);
        self.persist(&listings);
        drop(listings);

        tracing::info!(listing_id = %id, quantity, remaining, "Stock decremented");
        Ok(StockUpdate::Decremented { remaining })
    }

    // ========== Queries ==========

    /// Snapshot of the catalog, newest first
    pub fn listings(&self) -> Vec<Listing> {
        self.listings.read().clone()
    }

    pub fn get_listing(&self, id: &str) -> Option<Listing> {
        self.listings.read().iter().find(|l| l.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.listings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.read().is_empty()
    }

    pub fn search_listings(&self, query: &str, filters: &SearchFilters) -> Vec<Listing> {
        view::search(&self.listings.read(), query, filters)
    }

    pub fn sort_listings(&self, listings: &[Listing], option: SortOption) -> Vec<Listing> {
        view::sort(listings, option)
    }

    fn persist(&self, listings: &[Listing]) {
        if let Err(e) = self.repository.save_listings(listings) {
            tracing::error!(error = %e, error_code = %e.code(), "Failed to persist listings");
        }
    }
}
