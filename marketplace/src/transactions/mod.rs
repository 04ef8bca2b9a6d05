//! TransactionStore - purchase orders and their lifecycle
//!
//! # Purchase Flow
//!
//! ```text
//! add_transaction(product_id, quantity)
//!     ├─ 1. Reject quantity outside 1..=MAX_QUANTITY
//!     ├─ 2. Look up the listing, compute the total (checked)
//!     ├─ 3. ListingStore::update_listing_stock
//!     │      └─ insufficient → notify, return error, nothing recorded
//!     ├─ 4. Prepend the pending order
//!     ├─ 5. Persist the `transactions` slot (best-effort)
//!     └─ 6. Notify "Purchase Successful"
//! ```
//!
//! Every status change stores the prior status in `previous_status`; one undo
//! restores it and clears the field.

mod error;
pub use error::*;

use crate::listings::ListingStore;
use crate::notify::{Notification, Notifier};
use crate::seed;
use crate::storage::Repository;
use crate::utils::IdGenerator;
use chrono::Utc;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::{MAX_QUANTITY, Transaction, TransactionStatus};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which status changes `update_transaction_status` accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Only moves allowed by the state machine
    #[default]
    Strict,
    /// Any status may be set from any other
    Permissive,
}

impl FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(StatusPolicy::Strict),
            "permissive" => Ok(StatusPolicy::Permissive),
            other => Err(format!("unknown status policy: {other}")),
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusPolicy::Strict => f.write_str("strict"),
            StatusPolicy::Permissive => f.write_str("permissive"),
        }
    }
}

/// Buyer identity and transition rules
#[derive(Debug, Clone)]
pub struct TransactionSettings {
    pub buyer_name: String,
    pub policy: StatusPolicy,
}

impl Default for TransactionSettings {
    fn default() -> Self {
        Self {
            buyer_name: "You".to_string(),
            policy: StatusPolicy::Strict,
        }
    }
}

/// Order counts and spend, as shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionSummary {
    pub total_orders: usize,
    by_status: HashMap<TransactionStatus, usize>,
    /// Sum of totals over orders that were not cancelled
    pub amount_spent: Decimal,
}

impl TransactionSummary {
    pub fn count(&self, status: TransactionStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

pub struct TransactionStore {
    transactions: RwLock<Vec<Transaction>>,
    listings: Arc<ListingStore>,
    repository: Repository,
    notifier: Arc<dyn Notifier>,
    ids: IdGenerator,
    settings: TransactionSettings,
}

impl fmt::Debug for TransactionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionStore")
            .field("transactions", &self.transactions.read().len())
            .field("notifier", &"<Notifier>")
            .field("settings", &self.settings)
            .finish()
    }
}

impl TransactionStore {
    /// Load orders from the repository, seeding sample history on first run
    pub fn load(
        repository: Repository,
        listings: Arc<ListingStore>,
        notifier: Arc<dyn Notifier>,
        settings: TransactionSettings,
    ) -> Self {
        let transactions = match repository.load_transactions() {
            Ok(Some(transactions)) => {
                tracing::info!(count = transactions.len(), "Transactions loaded");
                transactions
            }
            Ok(None) => {
                let transactions = seed::seed_transactions(&settings.buyer_name);
                tracing::info!(count = transactions.len(), "No saved transactions, using sample history");
                if let Err(e) = repository.save_transactions(&transactions) {
                    tracing::error!(error = %e, "Failed to persist sample history");
                }
                transactions
            }
            Err(e) => {
                tracing::error!(error = %e, error_code = %e.code(), "Saved transactions unreadable, using sample history");
                seed::seed_transactions(&settings.buyer_name)
            }
        };
        Self::with_transactions(repository, listings, notifier, settings, transactions)
    }

    /// Start from a given order list without touching the repository
    pub fn with_transactions(
        repository: Repository,
        listings: Arc<ListingStore>,
        notifier: Arc<dyn Notifier>,
        settings: TransactionSettings,
        transactions: Vec<Transaction>,
    ) -> Self {
        let ids = IdGenerator::transactions().resume_after(transactions.iter().map(|t| t.id.as_str()));
        Self {
            transactions: RwLock::new(transactions),
            listings,
            repository,
            notifier,
            ids,
            settings,
        }
    }

    pub fn policy(&self) -> StatusPolicy {
        self.settings.policy
    }

    pub fn listings(&self) -> &Arc<ListingStore> {
        &self.listings
    }

    // ========== Purchase ==========

    /// Buy `quantity` units of a listing
    pub fn add_transaction(&self, product_id: &str, quantity: u32) -> TransactionResult<Transaction> {
        if !(1..=MAX_QUANTITY).contains(&quantity) {
            return Err(TransactionError::InvalidQuantity(quantity));
        }

        let product = self
            .listings
            .get_listing(product_id)
            .ok_or_else(|| TransactionError::ProductNotFound(product_id.to_string()))?;

        // 先算总价再扣库存，溢出时库存不变
        let total = product
            .price
            .checked_mul(Decimal::from(quantity))
            .ok_or(TransactionError::TotalOutOfRange {
                price: product.price,
                quantity,
            })?;

        if let Err(e) = self.listings.update_listing_stock(product_id, quantity) {
            let err = TransactionError::from(e);
            if let TransactionError::InsufficientStock {
                available,
                requested,
            } = err
            {
                self.notifier.notify(Notification::InsufficientStock {
                    product_id: product_id.to_string(),
                    available,
                    requested,
                });
            }
            return Err(err);
        }

        let transaction = Transaction {
            id: self.ids.next_id(),
            product_id: product.id.clone(),
            product_title: product.title.clone(),
            product_image: product.image.clone(),
            price: product.price,
            quantity,
            total,
            seller: product.seller.clone(),
            buyer: self.settings.buyer_name.clone(),
            status: TransactionStatus::Pending,
            previous_status: None,
            date: Utc::now().date_naive(),
        };

        {
            let mut transactions = self.transactions.write();
            transactions.insert(0, transaction.clone());
            self.persist(&transactions);
        }

        tracing::info!(
            transaction_id = %transaction.id,
            product_id = %product_id,
            quantity,
            total = %transaction.total,
            "Purchase recorded"
        );
        self.notifier.notify(Notification::PurchaseSucceeded {
            transaction_id: transaction.id.clone(),
            title: product.title,
            quantity,
            is_service: product.category.is_service(),
        });

        Ok(transaction)
    }

    // ========== Status ==========

    /// Set a new status and return the one it replaced
    pub fn update_transaction_status(
        &self,
        id: &str,
        status: TransactionStatus,
    ) -> TransactionResult<TransactionStatus> {
        let prior = {
            let mut transactions = self.transactions.write();
            let transaction = transactions
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| TransactionError::TransactionNotFound(id.to_string()))?;

            let prior = transaction.status;
            if self.settings.policy == StatusPolicy::Strict && !prior.can_transition_to(status) {
                tracing::warn!(transaction_id = %id, from = %prior, to = %status, "Status change rejected");
                return Err(TransactionError::IllegalTransition {
                    from: prior,
                    to: status,
                });
            }

            transaction.status = status;
            transaction.previous_status = Some(prior);
            self.persist(&transactions);
            prior
        };

        tracing::info!(
            target: "audit",
            transaction_id = %id,
            action = "status_change",
            from = %prior,
            to = %status,
            "AUDIT"
        );

        let notification = if status == TransactionStatus::Cancelled {
            Notification::OrderCancelled {
                transaction_id: id.to_string(),
                undo: true,
            }
        } else {
            Notification::StatusUpdated {
                transaction_id: id.to_string(),
                status,
                undo: true,
            }
        };
        self.notifier.notify(notification);

        Ok(prior)
    }

    /// Move to the next forward status; returns the new status
    pub fn advance_status(&self, id: &str) -> TransactionResult<TransactionStatus> {
        let current = self
            .get_transaction(id)
            .ok_or_else(|| TransactionError::TransactionNotFound(id.to_string()))?
            .status;
        let next = current
            .next()
            .ok_or(TransactionError::TerminalStatus(current))?;
        self.update_transaction_status(id, next)?;
        Ok(next)
    }

    /// Cancel the order; returns the status it had
    pub fn cancel_transaction(&self, id: &str) -> TransactionResult<TransactionStatus> {
        self.update_transaction_status(id, TransactionStatus::Cancelled)
    }

    /// Revert the last status change
    ///
    /// Returns the restored status, or `None` when the order is unknown or
    /// has nothing to undo.
    pub fn undo_status_update(&self, id: &str) -> Option<TransactionStatus> {
        let (restored, was_cancellation) = {
            let mut transactions = self.transactions.write();
            let transaction = transactions.iter_mut().find(|t| t.id == id)?;
            let restored = transaction.previous_status.take()?;
            let was_cancellation = transaction.status == TransactionStatus::Cancelled;
            let undone = transaction.status;
            transaction.status = restored;
            self.persist(&transactions);

            tracing::info!(
                target: "audit",
                transaction_id = %id,
                action = "status_undo",
                from = %undone,
                to = %restored,
                "AUDIT"
            );
            (restored, was_cancellation)
        };

        self.notifier.notify(Notification::StatusReverted {
            transaction_id: id.to_string(),
            status: restored,
            was_cancellation,
        });
        Some(restored)
    }

    // ========== Queries ==========

    /// Snapshot of all orders, newest first
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.read().clone()
    }

    pub fn get_transaction(&self, id: &str) -> Option<Transaction> {
        self.transactions.read().iter().find(|t| t.id == id).cloned()
    }

    pub fn get_transactions_by_status(&self, status: TransactionStatus) -> Vec<Transaction> {
        self.transactions
            .read()
            .iter()
            .filter(|t| t.status == status)
            .cloned()
            .collect()
    }

    pub fn summary(&self) -> TransactionSummary {
        let transactions = self.transactions.read();
        let mut summary = TransactionSummary {
            total_orders: transactions.len(),
            ..Default::default()
        };
        for transaction in transactions.iter() {
            *summary.by_status.entry(transaction.status).or_insert(0) += 1;
            if transaction.status != TransactionStatus::Cancelled {
                summary.amount_spent = summary.amount_spent.saturating_add(transaction.total);
            }
        }
        summary
    }

    fn persist(&self, transactions: &[Transaction]) {
        if let Err(e) = self.repository.save_transactions(transactions) {
            tracing::error!(error = %e, error_code = %e.code(), "Failed to persist transactions");
        }
    }
}

#[cfg(test)]
mod tests;
