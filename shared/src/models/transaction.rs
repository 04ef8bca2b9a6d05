//! Transaction (order) Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order lifecycle status
///
/// ```text
/// pending ──► processing ──► shipped ──► delivered
///    │
///    └──► cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 5] = [
        TransactionStatus::Pending,
        TransactionStatus::Processing,
        TransactionStatus::Shipped,
        TransactionStatus::Delivered,
        TransactionStatus::Cancelled,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Processing => "processing",
            TransactionStatus::Shipped => "shipped",
            TransactionStatus::Delivered => "delivered",
            TransactionStatus::Cancelled => "cancelled",
        }
    }

    /// Capitalized label used in notifications
    pub const fn display_name(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Processing => "Processing",
            TransactionStatus::Shipped => "Shipped",
            TransactionStatus::Delivered => "Delivered",
            TransactionStatus::Cancelled => "Cancelled",
        }
    }

    /// Forward successor, `None` once the order can no longer advance
    pub const fn next(&self) -> Option<TransactionStatus> {
        match self {
            TransactionStatus::Pending => Some(TransactionStatus::Processing),
            TransactionStatus::Processing => Some(TransactionStatus::Shipped),
            TransactionStatus::Shipped => Some(TransactionStatus::Delivered),
            TransactionStatus::Delivered | TransactionStatus::Cancelled => None,
        }
    }

    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Delivered | TransactionStatus::Cancelled
        )
    }

    pub fn can_transition_to(&self, target: TransactionStatus) -> bool {
        match (self, target) {
            (TransactionStatus::Pending, TransactionStatus::Cancelled) => true,
            (from, to) => from.next() == Some(to),
        }
    }
}

impl FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        TransactionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| format!("unknown transaction status: {s}"))
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Purchase record
///
/// Product fields are a snapshot taken at purchase time; later listing edits
/// do not flow back into existing orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Weak reference to the purchased listing
    pub product_id: String,
    pub product_title: String,
    pub product_image: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    /// price × quantity at creation
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub seller: String,
    pub buyer: String,
    pub status: TransactionStatus,
    /// Status before the last change, cleared by undo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<TransactionStatus>,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn can_undo(&self) -> bool {
        self.previous_status.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TransactionStatus::*;

    #[test]
    fn test_forward_chain() {
        assert_eq!(Pending.next(), Some(Processing));
        assert_eq!(Processing.next(), Some(Shipped));
        assert_eq!(Shipped.next(), Some(Delivered));
        assert_eq!(Delivered.next(), None);
        assert_eq!(Cancelled.next(), None);
    }

    #[test]
    fn test_transition_table() {
        let allowed = [
            (Pending, Processing),
            (Pending, Cancelled),
            (Processing, Shipped),
            (Shipped, Delivered),
        ];
        for from in TransactionStatus::ALL {
            for to in TransactionStatus::ALL {
                assert_eq!(
                    from.can_transition_to(to),
                    allowed.contains(&(from, to)),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn test_terminal_states() {
        let terminal: Vec<_> = TransactionStatus::ALL
            .into_iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(terminal, vec![Delivered, Cancelled]);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Shipped".parse::<TransactionStatus>(), Ok(Shipped));
        assert!("lost".parse::<TransactionStatus>().is_err());
        assert_eq!(Processing.to_string(), "processing");
        assert_eq!(Processing.display_name(), "Processing");
    }

    #[test]
    fn test_transaction_json_shape() {
        let json = r#"{"id":"t4","productId":"3","productTitle":"Smart Home Speaker",
            "productImage":"/placeholder.svg?height=300&width=300","price":129,
            "quantity":2,"total":258,"seller":"HomeGadgets","buyer":"You",
            "status":"processing","date":"2024-01-25"}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.status, Processing);
        assert_eq!(tx.total, Decimal::from(258));
        assert!(!tx.can_undo());

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["productId"], "3");
        assert!(value.get("previousStatus").is_none());

        let undoable = Transaction {
            previous_status: Some(Pending),
            ..tx
        };
        let value = serde_json::to_value(&undoable).unwrap();
        assert_eq!(value["previousStatus"], "pending");
    }
}
