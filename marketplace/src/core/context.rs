//! Marketplace - application context
//!
//! Wires config → repository → ListingStore → TransactionStore and hands the
//! stores to callers. Holds no global state: every instance is independent.

use super::config::Config;
use super::error::{MarketError, Result};
use crate::listings::{ListingStore, Page, SearchFilters, SortOption, paginate};
use crate::notify::{Notification, Notifier};
use crate::storage::Repository;
use crate::transactions::{TransactionStore, TransactionSummary};
use shared::{Listing, ListingDraft, NewListing, Transaction, TransactionStatus};
use std::sync::Arc;

pub struct Marketplace {
    config: Config,
    listings: Arc<ListingStore>,
    transactions: TransactionStore,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for Marketplace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Marketplace")
            .field("config", &self.config)
            .field("listings", &self.listings)
            .field("transactions", &self.transactions)
            .finish()
    }
}

impl Marketplace {
    /// Open the configured storage backend and load both stores
    pub fn open(config: Config, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let repository = Repository::open(config.storage, &config.data_dir)?;
        tracing::info!(
            storage = %config.storage,
            data_dir = %config.data_dir,
            policy = %config.status_policy,
            "Marketplace opened"
        );
        Ok(Self::with_repository(config, repository, notifier))
    }

    /// Load both stores from an existing repository
    pub fn with_repository(
        config: Config,
        repository: Repository,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let listings = Arc::new(ListingStore::load(
            repository.clone(),
            config.seller_name.clone(),
        ));
        let transactions = TransactionStore::load(
            repository,
            listings.clone(),
            notifier.clone(),
            config.transaction_settings(),
        );
        Self {
            config,
            listings,
            transactions,
            notifier,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn listings(&self) -> &ListingStore {
        &self.listings
    }

    pub fn transactions(&self) -> &TransactionStore {
        &self.transactions
    }

    // ========== Selling ==========

    /// Validate and publish a listing
    ///
    /// The listing is stored immediately; the "listed" notification follows
    /// after the configured acknowledgement delay.
    pub async fn publish_listing(&self, draft: ListingDraft) -> Result<Listing> {
        let new_listing = NewListing::try_from(draft).inspect_err(|e| {
            tracing::debug!(field = e.field(), error = %e, "Listing draft rejected");
        })?;
        let listing = self.listings.add_listing(new_listing);

        let delay = self.config.listing_ack_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.notifier.notify(Notification::ListingCreated {
            listing_id: listing.id.clone(),
            title: listing.title.clone(),
            is_service: listing.is_service(),
        });
        Ok(listing)
    }

    // ========== Browsing ==========

    /// Search, sort and page the catalog the way the product grid does
    pub fn browse(
        &self,
        query: &str,
        filters: &SearchFilters,
        sort: SortOption,
        page: usize,
    ) -> Page<Listing> {
        let found = self.listings.search_listings(query, filters);
        let sorted = self.listings.sort_listings(&found, sort);
        paginate(&sorted, page, self.config.items_per_page)
    }

    // ========== Buying ==========

    pub fn buy(&self, product_id: &str, quantity: u32) -> Result<Transaction> {
        Ok(self.transactions.add_transaction(product_id, quantity)?)
    }

    pub fn advance_order(&self, id: &str) -> Result<TransactionStatus> {
        Ok(self.transactions.advance_status(id)?)
    }

    pub fn cancel_order(&self, id: &str) -> Result<TransactionStatus> {
        Ok(self.transactions.cancel_transaction(id)?)
    }

    pub fn set_order_status(&self, id: &str, status: TransactionStatus) -> Result<TransactionStatus> {
        Ok(self.transactions.update_transaction_status(id, status)?)
    }

    /// Undo the last status change, failing when there is none
    pub fn undo_order(&self, id: &str) -> Result<TransactionStatus> {
        self.transactions
            .undo_status_update(id)
            .ok_or_else(|| MarketError::NothingToUndo(id.to_string()))
    }

    pub fn orders(&self, status: Option<TransactionStatus>) -> Vec<Transaction> {
        match status {
            Some(status) => self.transactions.get_transactions_by_status(status),
            None => self.transactions.transactions(),
        }
    }

    pub fn summary(&self) -> TransactionSummary {
        self.transactions.summary()
    }
}
