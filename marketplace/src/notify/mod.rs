//! User-facing notifications
//!
//! Stores report outcomes through a [`Notifier`]. Delivery is fire-and-forget:
//! a notifier never fails the operation that produced the notification.

use parking_lot::Mutex;
use shared::TransactionStatus;

/// Something the user should be told about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    ListingCreated {
        listing_id: String,
        title: String,
        is_service: bool,
    },
    PurchaseSucceeded {
        transaction_id: String,
        title: String,
        quantity: u32,
        is_service: bool,
    },
    InsufficientStock {
        product_id: String,
        available: u32,
        requested: u32,
    },
    /// `undo` is true while the change can still be reverted
    StatusUpdated {
        transaction_id: String,
        status: TransactionStatus,
        undo: bool,
    },
    OrderCancelled {
        transaction_id: String,
        undo: bool,
    },
    StatusReverted {
        transaction_id: String,
        status: TransactionStatus,
        /// The reverted change was a cancellation
        was_cancellation: bool,
    },
}

impl Notification {
    pub fn title(&self) -> &'static str {
        match self {
            Notification::ListingCreated { .. } => "Listing Created Successfully!",
            Notification::PurchaseSucceeded { .. } => "Purchase Successful",
            Notification::InsufficientStock { .. } => "Insufficient Stock",
            Notification::StatusUpdated { .. } => "Status Updated",
            Notification::OrderCancelled { .. } => "Order Cancelled",
            Notification::StatusReverted {
                was_cancellation: true,
                ..
            } => "Cancellation Undone",
            Notification::StatusReverted { .. } => "Status Reverted",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Notification::ListingCreated {
                title, is_service, ..
            } => {
                let kind = if *is_service { "service" } else { "product" };
                format!("Your {kind} \"{title}\" has been listed.")
            }
            Notification::PurchaseSucceeded {
                title,
                quantity,
                is_service,
                ..
            } => {
                if *is_service {
                    format!("You've purchased the service of {title}")
                } else {
                    let unit = if *quantity > 1 { "units" } else { "unit" };
                    format!("You've purchased {quantity} {unit} of {title}")
                }
            }
            Notification::InsufficientStock { available, .. } => {
                format!("Sorry, there are only {available} units available.")
            }
            Notification::StatusUpdated { status, .. } => format!(
                "Transaction status has been updated to {}",
                status.display_name()
            ),
            Notification::OrderCancelled { .. } => {
                "The order has been cancelled successfully.".to_string()
            }
            Notification::StatusReverted {
                status,
                was_cancellation,
                ..
            } => {
                let subject = if *was_cancellation { "Order" } else { "Transaction" };
                format!("{subject} status has been reverted to {status}")
            }
        }
    }

    /// Whether the notification offers an undo action
    pub fn offers_undo(&self) -> bool {
        matches!(
            self,
            Notification::StatusUpdated { undo: true, .. }
                | Notification::OrderCancelled { undo: true, .. }
        )
    }
}

/// Notification sink
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the `notify` tracing target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            target: "notify",
            title = notification.title(),
            undo = notification.offers_undo(),
            "{}",
            notification.description()
        );
    }
}

/// Buffers notifications until drained
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    inbox: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything received so far
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.inbox.lock())
    }

    pub fn len(&self) -> usize {
        self.inbox.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inbox.lock().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.inbox.lock().push(notification);
    }
}
