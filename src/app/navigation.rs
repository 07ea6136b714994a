//! Navigation - Active Page

use serde::{Deserialize, Serialize};

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivePage {
    /// Accounts overview with transaction history
    #[default]
    Overview,
    /// Transfer form
    Transfer,
    /// Banking notices
    Messages,
    /// Email client
    Email,
    /// Task list
    Tasks,
    /// Profile editor
    Profile,
}

impl ActivePage {
    /// Get the icon glyph for the page
    pub fn icon(&self) -> &'static str {
        match self {
            ActivePage::Overview => "◫",
            ActivePage::Transfer => "⇄",
            ActivePage::Messages => "🔔",
            ActivePage::Email => "✉",
            ActivePage::Tasks => "☑",
            ActivePage::Profile => "👤",
        }
    }

    /// Get the sidebar title for the page
    pub fn title(&self) -> &'static str {
        match self {
            ActivePage::Overview => "Overview",
            ActivePage::Transfer => "Transfer",
            ActivePage::Messages => "Messages",
            ActivePage::Email => "Email",
            ActivePage::Tasks => "Tasks",
            ActivePage::Profile => "Profile",
        }
    }

    /// Get all available pages for the sidebar
    pub fn all() -> &'static [ActivePage] {
        &[
            ActivePage::Overview,
            ActivePage::Transfer,
            ActivePage::Messages,
            ActivePage::Email,
            ActivePage::Tasks,
            ActivePage::Profile,
        ]
    }
}

/// UI preferences persisted between sessions
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UiPrefs {
    /// Page restored on startup
    pub active_page: ActivePage,
}
