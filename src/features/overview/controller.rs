//! Overview Controller
//!
//! Loads accounts and pages through transaction history. Paging is
//! cursor-based: the next page asks the source for rows strictly older than
//! the oldest loaded date.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::data::sources::{Sources, TransactionQuery};

pub const PAGE_SIZE: usize = 20;

/// Overview page controller
pub struct OverviewController {
    entities: AppEntities,
}

impl OverviewController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Fetch accounts and the first page of transactions
    pub fn refresh(&self, cx: &mut App) {
        self.entities.overview.update(cx, |state, cx| {
            state.loading = true;
            cx.notify();
        });
        self.entities.transactions.update(cx, |state, cx| {
            state.loading = true;
            cx.notify();
        });

        let bank = cx.global::<Sources>().bank.clone();
        let entities = self.entities.clone();
        let account_id = self.entities.overview.read(cx).selected_account_id.clone();

        cx.spawn(async move |cx| {
            let accounts = bank.accounts().await;
            let rows = bank
                .transactions(TransactionQuery {
                    account_id,
                    before: None,
                    limit: PAGE_SIZE,
                })
                .await;

            let _ = cx.update(|cx: &mut App| {
                entities.overview.update(cx, |state, cx| {
                    match accounts {
                        Ok(accounts) => state.set_accounts(accounts),
                        Err(e) => state.set_error(e.to_string()),
                    }
                    cx.notify();
                });
                entities.transactions.update(cx, |state, cx| {
                    match rows {
                        Ok(rows) => state.set_transactions(rows, PAGE_SIZE),
                        Err(e) => state.set_error(e.to_string()),
                    }
                    cx.notify();
                });
            });
        })
        .detach();
    }

    /// Fetch the next page of older transactions
    pub fn load_more(&self, cx: &mut App) {
        let cursor = {
            let state = self.entities.transactions.read(cx);
            if state.loading_more || state.exhausted {
                return;
            }
            state.oldest_cursor()
        };

        self.entities.transactions.update(cx, |state, cx| {
            state.loading_more = true;
            cx.notify();
        });

        let bank = cx.global::<Sources>().bank.clone();
        let entities = self.entities.clone();
        let account_id = self.entities.overview.read(cx).selected_account_id.clone();

        cx.spawn(async move |cx| {
            let rows = bank
                .transactions(TransactionQuery {
                    account_id,
                    before: cursor,
                    limit: PAGE_SIZE,
                })
                .await;

            let _ = cx.update(|cx: &mut App| {
                entities.transactions.update(cx, |state, cx| {
                    match rows {
                        Ok(rows) => state.append_page(rows, PAGE_SIZE),
                        Err(e) => state.set_error(e.to_string()),
                    }
                    cx.notify();
                });
            });
        })
        .detach();
    }

    /// Select an account card and refetch its history
    pub fn select_account(&self, id: Option<String>, cx: &mut App) {
        self.entities.overview.update(cx, |state, cx| {
            state.select(id);
            cx.notify();
        });
        self.refresh(cx);
    }
}
