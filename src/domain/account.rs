//! Account - Bank Account Data

use serde::{Deserialize, Serialize};

/// Kind of bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    #[default]
    Checking,
    Savings,
    Credit,
    Investment,
}

impl AccountKind {
    /// Display label for the account kind
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Checking => "Checking",
            AccountKind::Savings => "Savings",
            AccountKind::Credit => "Credit",
            AccountKind::Investment => "Investment",
        }
    }
}

/// A bank account owned by the host application
///
/// `available <= balance` is assumed from the host, not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Account kind
    pub kind: AccountKind,
    /// Current balance
    pub balance: f64,
    /// ISO currency code
    pub currency: String,
    /// Masked account number
    pub number: String,
    /// Available balance, when it differs from the posted balance
    pub available: Option<f64>,
    /// Credit limit, for credit accounts
    pub limit: Option<f64>,
    /// Interest rate, for savings/investment accounts
    pub interest_rate: Option<f64>,
}

impl Account {
    /// The amount a transfer may draw on: available when present, else balance
    pub fn spendable(&self) -> f64 {
        self.available.unwrap_or(self.balance)
    }
}

impl Default for Account {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            kind: AccountKind::Checking,
            balance: 0.0,
            currency: "USD".to_string(),
            number: String::new(),
            available: None,
            limit: None,
            interest_rate: None,
        }
    }
}
