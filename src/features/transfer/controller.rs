//! Transfer Controller
//!
//! Loads reference data and submits validated transfers. Validation lives in
//! the state machine; nothing reaches the bank source while the form has
//! errors.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::data::sources::Sources;

/// Transfer page controller
pub struct TransferController {
    entities: AppEntities,
}

impl TransferController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Fetch accounts and contacts for the form selects
    pub fn load_reference(&self, cx: &mut App) {
        let bank = cx.global::<Sources>().bank.clone();
        let entities = self.entities.clone();

        cx.spawn(async move |cx| {
            let accounts = bank.accounts().await;
            let contacts = bank.contacts().await;

            let _ = cx.update(|cx: &mut App| {
                entities.transfer.update(cx, |state, cx| {
                    match (accounts, contacts) {
                        (Ok(accounts), Ok(contacts)) => {
                            state.set_reference_data(accounts, contacts);
                        }
                        (Err(e), _) | (_, Err(e)) => {
                            state.submit_failed(e.to_string());
                        }
                    }
                    cx.notify();
                });
            });
        })
        .detach();
    }

    /// Validate and submit the form
    pub fn submit(&self, cx: &mut App) {
        let request = self.entities.transfer.update(cx, |state, cx| {
            let request = state.begin_submit();
            cx.notify();
            request
        });
        let Some(request) = request else {
            return;
        };

        tracing::info!(
            from = %request.from_account_id,
            amount = request.amount,
            "Submitting transfer"
        );

        let bank = cx.global::<Sources>().bank.clone();
        let entities = self.entities.clone();

        cx.spawn(async move |cx| {
            let result = bank.transfer(request).await;
            // balances changed; refetch reference data after a success
            let accounts = match &result {
                Ok(()) => Some(bank.accounts().await),
                Err(_) => None,
            };

            let _ = cx.update(|cx: &mut App| {
                entities.transfer.update(cx, |state, cx| {
                    match result {
                        Ok(()) => {
                            state.submit_succeeded();
                            if let Some(Ok(accounts)) = accounts {
                                let contacts = std::mem::take(&mut state.contacts);
                                state.set_reference_data(accounts, contacts);
                            }
                        }
                        Err(e) => state.submit_failed(e.to_string()),
                    }
                    cx.notify();
                });
            });
        })
        .detach();
    }
}
