//! MailboxState - Folder, Search and Selection State
//!
//! Shared by the email client and the banking messages screen. Every fetch
//! carries a generation token; a response whose token is no longer current
//! is discarded so a slow folder fetch can never overwrite a newer one.

use crate::domain::message::{Folder, Message};
use crate::error::Result;
use crate::helpers::generation::Generation;

/// State for a folder-based message screen
#[derive(Debug, Clone)]
pub struct MailboxState {
    /// Active folder
    pub folder: Folder,
    /// Raw search input; debouncing happens in the controller
    pub search: String,
    /// Messages of the last applied fetch
    pub messages: Vec<Message>,
    /// Selected message id
    pub selected_id: Option<String>,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Local banner string from the last rejected operation
    pub error: Option<String>,
    generation: Generation,
}

impl MailboxState {
    pub fn new(folder: Folder) -> Self {
        Self {
            folder,
            search: String::new(),
            messages: Vec::new(),
            selected_id: None,
            loading: false,
            error: None,
            generation: Generation::default(),
        }
    }

    /// Switch folder. Clears the selection; the caller refetches.
    /// Returns false when the folder did not change.
    pub fn set_folder(&mut self, folder: Folder) -> bool {
        if self.folder == folder {
            return false;
        }
        self.folder = folder;
        self.selected_id = None;
        true
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Start a fetch: marks loading and returns the generation token the
    /// response must present to be applied.
    pub fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.generation.begin()
    }

    /// Apply a fetch result. Returns false when the token is stale and the
    /// result was discarded.
    pub fn apply_fetch(&mut self, token: u64, result: Result<Vec<Message>>) -> bool {
        if !self.generation.is_current(token) {
            tracing::debug!(token, "Discarding stale mailbox fetch");
            return false;
        }
        self.loading = false;
        match result {
            Ok(messages) => {
                self.messages = messages;
                // drop a selection that no longer exists in this folder
                if let Some(id) = &self.selected_id {
                    if !self.messages.iter().any(|m| &m.id == id) {
                        self.selected_id = None;
                    }
                }
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    pub fn select(&mut self, id: Option<String>) {
        self.selected_id = id;
    }

    pub fn selected(&self) -> Option<&Message> {
        let id = self.selected_id.as_deref()?;
        self.messages.iter().find(|m| m.id == id)
    }

    /// Locate a message in the fetched list
    pub fn message(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Optimistically flag the local copy read before the source settles.
    /// Returns false when the message is not in the fetched list.
    pub fn mark_read_local(&mut self, id: &str) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.read = true;
                true
            }
            None => false,
        }
    }

    /// Upsert a message returned by a single-item fetch
    pub fn apply_message(&mut self, message: Message) {
        match self.messages.iter_mut().find(|m| m.id == message.id) {
            Some(existing) => *existing = message,
            None => self.messages.push(message),
        }
    }

    /// Unread count in the fetched list
    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| !m.read).count()
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }
}

impl Default for MailboxState {
    fn default() -> Self {
        Self::new(Folder::Inbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn message(id: &str) -> Message {
        Message {
            id: id.to_string(),
            subject: format!("Subject {id}"),
            ..Default::default()
        }
    }

    #[test]
    fn test_stale_fetch_discarded() {
        let mut state = MailboxState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        // newer fetch resolves first
        assert!(state.apply_fetch(second, Ok(vec![message("new")])));
        // the older one arrives late and must not overwrite
        assert!(!state.apply_fetch(first, Ok(vec![message("old")])));

        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].id, "new");
    }

    #[test]
    fn test_fetch_error_becomes_banner_string() {
        let mut state = MailboxState::default();
        let token = state.begin_fetch();
        assert!(state.apply_fetch(token, Err(Error::operation("host down"))));
        assert!(!state.loading);
        assert!(state.error.as_deref().is_some_and(|e| e.contains("host down")));
    }

    #[test]
    fn test_folder_switch_clears_selection() {
        let mut state = MailboxState::default();
        let token = state.begin_fetch();
        state.apply_fetch(token, Ok(vec![message("a")]));
        state.select(Some("a".into()));

        assert!(state.set_folder(Folder::Archive));
        assert_eq!(state.selected_id, None);
        assert!(!state.set_folder(Folder::Archive));
    }

    #[test]
    fn test_selection_dropped_when_absent_from_new_list() {
        let mut state = MailboxState::default();
        let token = state.begin_fetch();
        state.apply_fetch(token, Ok(vec![message("a"), message("b")]));
        state.select(Some("a".into()));

        let token = state.begin_fetch();
        state.apply_fetch(token, Ok(vec![message("b")]));
        assert_eq!(state.selected_id, None);
    }

    #[test]
    fn test_optimistic_mark_read() {
        let mut state = MailboxState::default();
        let token = state.begin_fetch();
        state.apply_fetch(token, Ok(vec![message("a")]));

        assert!(state.mark_read_local("a"));
        assert!(state.message("a").is_some_and(|m| m.read));
        assert_eq!(state.unread_count(), 0);
        assert!(!state.mark_read_local("missing"));
    }

    #[test]
    fn test_apply_message_upserts() {
        let mut state = MailboxState::default();
        state.apply_message(message("a"));
        assert_eq!(state.messages.len(), 1);

        let mut updated = message("a");
        updated.read = true;
        state.apply_message(updated);
        assert_eq!(state.messages.len(), 1);
        assert!(state.messages[0].read);
    }
}
