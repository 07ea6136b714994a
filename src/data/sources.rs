//! Sources - Capability Traits per Composite Screen
//!
//! One narrow interface per screen instead of loose function values. All
//! operations return `LocalBoxFuture`: GPUI runs them on the single
//! foreground thread, so the futures are not required to be `Send`.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use futures::future::LocalBoxFuture;

use crate::domain::account::Account;
use crate::domain::contact::Contact;
use crate::domain::message::{Folder, Message, OutgoingMessage};
use crate::domain::task::{Task, TaskDraft, TaskStatus};
use crate::domain::transaction::Transaction;
use crate::domain::user::UserProfile;
use crate::error::Result;

/// Query for a page of transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Restrict to one account
    pub account_id: Option<String>,
    /// Only transactions strictly older than this cursor
    pub before: Option<DateTime<Utc>>,
    /// Maximum rows to return; 0 means host default
    pub limit: usize,
}

/// A validated transfer handed to the bank source
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    /// Source account
    pub from_account_id: String,
    /// Destination account, for between-accounts transfers
    pub to_account_id: Option<String>,
    /// Destination contact, for external transfers
    pub contact_id: Option<String>,
    /// Transfer amount
    pub amount: f64,
    /// Description line
    pub description: String,
}

/// Query for a folder listing
#[derive(Debug, Clone, Default)]
pub struct MailQuery {
    /// Free-text search, already debounced by the caller
    pub search: Option<String>,
}

/// Banking data operations
pub trait BankSource: 'static {
    fn accounts(&self) -> LocalBoxFuture<'static, Result<Vec<Account>>>;
    fn contacts(&self) -> LocalBoxFuture<'static, Result<Vec<Contact>>>;
    fn transactions(&self, query: TransactionQuery)
        -> LocalBoxFuture<'static, Result<Vec<Transaction>>>;
    fn transfer(&self, request: TransferRequest) -> LocalBoxFuture<'static, Result<()>>;
    fn profile(&self) -> LocalBoxFuture<'static, Result<UserProfile>>;
    fn save_profile(&self, profile: UserProfile) -> LocalBoxFuture<'static, Result<()>>;
}

/// Mail and notice operations
pub trait MailSource: 'static {
    fn list(&self, folder: Folder, query: MailQuery)
        -> LocalBoxFuture<'static, Result<Vec<Message>>>;

    /// Optional single-message fetch. Sources that only support listing
    /// return `None`; the screen then falls back to its fetched list.
    fn fetch(&self, _id: &str) -> Option<LocalBoxFuture<'static, Result<Message>>> {
        None
    }

    fn mark_read(&self, id: &str) -> LocalBoxFuture<'static, Result<()>>;
    fn send(&self, outgoing: OutgoingMessage) -> LocalBoxFuture<'static, Result<()>>;
}

/// Task operations
pub trait TaskSource: 'static {
    fn tasks(&self) -> LocalBoxFuture<'static, Result<Vec<Task>>>;
    fn create(&self, draft: TaskDraft) -> LocalBoxFuture<'static, Result<Task>>;
    fn set_status(&self, id: &str, status: TaskStatus) -> LocalBoxFuture<'static, Result<()>>;
}

/// The set of sources a workspace is wired with
#[derive(Clone)]
pub struct Sources {
    pub bank: Rc<dyn BankSource>,
    pub mail: Rc<dyn MailSource>,
    pub tasks: Rc<dyn TaskSource>,
}

impl gpui::Global for Sources {}
