//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and
//! management. State is split by screen and update frequency so one
//! screen's churn never re-renders another.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::message::Folder;
use crate::state::{
    mailbox_state::MailboxState, nav_state::NavState, overview_state::OverviewState,
    profile_state::ProfileState, tasks_state::TasksState, transactions_state::TransactionsState,
    transfer_state::TransferState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Active page
    pub nav: Entity<NavState>,
    /// Accounts and selection on the overview screen
    pub overview: Entity<OverviewState>,
    /// Transaction rows, filters and paging cursor
    pub transactions: Entity<TransactionsState>,
    /// Transfer form state machine
    pub transfer: Entity<TransferState>,
    /// Email client folders and messages
    pub mail: Entity<MailboxState>,
    /// Banking notice categories, sharing the mailbox shape
    pub notices: Entity<MailboxState>,
    /// Task list and draft form
    pub tasks: Entity<TasksState>,
    /// Profile draft state
    pub profile: Entity<ProfileState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self {
            nav: cx.new(|_| NavState::default()),
            overview: cx.new(|_| OverviewState::default()),
            transactions: cx.new(|_| TransactionsState::default()),
            transfer: cx.new(|_| TransferState::default()),
            mail: cx.new(|_| MailboxState::new(Folder::Inbox)),
            notices: cx.new(|_| MailboxState::new(Folder::Alerts)),
            tasks: cx.new(|_| TasksState::default()),
            profile: cx.new(|_| ProfileState::default()),
        }
    }
}
