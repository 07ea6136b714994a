//! Transaction - Account Transaction Data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether the transaction draws from or adds to the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Debit,
    Credit,
}

/// Lifecycle status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    #[default]
    Completed,
    Failed,
    Canceled,
}

impl TransactionStatus {
    /// Display label for the status
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Failed => "Failed",
            TransactionStatus::Canceled => "Canceled",
        }
    }

    /// All statuses, for filter controls
    pub fn all() -> &'static [TransactionStatus] {
        &[
            TransactionStatus::Pending,
            TransactionStatus::Completed,
            TransactionStatus::Failed,
            TransactionStatus::Canceled,
        ]
    }
}

/// A single account transaction
///
/// No invariant between `direction` and the sign of `amount` is enforced;
/// the host owns that relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique ID
    pub id: String,
    /// Posting date
    pub date: DateTime<Utc>,
    /// Human description
    pub description: String,
    /// Merchant category, when known
    pub category: Option<String>,
    /// Amount in account currency
    pub amount: f64,
    /// Debit or credit
    pub direction: Direction,
    /// Lifecycle status
    pub status: TransactionStatus,
    /// Owning account reference
    pub account_id: String,
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            id: String::new(),
            date: Utc::now(),
            description: String::new(),
            category: None,
            amount: 0.0,
            direction: Direction::Debit,
            status: TransactionStatus::Completed,
            account_id: String::new(),
        }
    }
}
