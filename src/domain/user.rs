//! UserProfile - Account Holder Profile Data

use serde::{Deserialize, Serialize};

/// The account holder's editable profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique ID
    pub id: String,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Mailing address
    pub address: String,
    /// Avatar image URL, when known
    pub avatar: Option<String>,
}
