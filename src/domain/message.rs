//! Message - Mail and Notice Data
//!
//! One message shape backs both the email client and the banking notices
//! screen. Lifecycle flags (read/starred) are mutated only through the
//! injected source; local copies are optimistic mirrors discarded on the
//! next fetch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mail folder / notice category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    #[default]
    Inbox,
    Sent,
    Drafts,
    Archive,
    Trash,
    /// Banking notices: account alerts
    Alerts,
    /// Banking notices: statements and documents
    Statements,
    /// Banking notices: offers and announcements
    Offers,
}

impl Folder {
    /// Display label for the folder
    pub fn label(&self) -> &'static str {
        match self {
            Folder::Inbox => "Inbox",
            Folder::Sent => "Sent",
            Folder::Drafts => "Drafts",
            Folder::Archive => "Archive",
            Folder::Trash => "Trash",
            Folder::Alerts => "Alerts",
            Folder::Statements => "Statements",
            Folder::Offers => "Offers",
        }
    }

    /// Folders shown by the email client
    pub fn mail_folders() -> &'static [Folder] {
        &[
            Folder::Inbox,
            Folder::Sent,
            Folder::Drafts,
            Folder::Archive,
            Folder::Trash,
        ]
    }

    /// Categories shown by the banking messages screen
    pub fn notice_folders() -> &'static [Folder] {
        &[Folder::Alerts, Folder::Statements, Folder::Offers]
    }
}

/// A mail attachment reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// File name
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type
    pub mime: String,
}

/// A message in a folder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique ID
    pub id: String,
    /// Sender display name or address
    pub sender: String,
    /// Subject line
    pub subject: String,
    /// Body text
    pub body: String,
    /// Delivery timestamp
    pub timestamp: DateTime<Utc>,
    /// Read flag
    pub read: bool,
    /// Starred flag
    pub starred: bool,
    /// Attachments
    pub attachments: Vec<Attachment>,
    /// Folder the host filed the message under
    pub folder: Folder,
}

impl Default for Message {
    fn default() -> Self {
        Self {
            id: String::new(),
            sender: String::new(),
            subject: String::new(),
            body: String::new(),
            timestamp: Utc::now(),
            read: false,
            starred: false,
            attachments: Vec::new(),
            folder: Folder::Inbox,
        }
    }
}

/// A draft message handed to the source's send operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Body text
    pub body: String,
}
