//! Contact - Transfer Recipient Data

use serde::{Deserialize, Serialize};

/// An external transfer recipient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Destination account number
    pub account_number: String,
    /// Bank name, when known
    pub bank: Option<String>,
    /// Avatar image URL, when known
    pub avatar: Option<String>,
}
