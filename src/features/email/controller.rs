//! Email Controller
//!
//! Folder fetches and message opening for the mail client. The search text
//! is debounced by the page; by the time it reaches the controller it is
//! just another query parameter. Stale responses are dropped by the mailbox
//! generation token.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::data::sources::{MailQuery, Sources};
use crate::domain::message::Folder;

/// Email page controller
pub struct EmailController {
    entities: AppEntities,
}

impl EmailController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Fetch the active folder with the current search
    pub fn refresh(&self, cx: &mut App) {
        let (token, folder, search) = self.entities.mail.update(cx, |state, cx| {
            let token = state.begin_fetch();
            cx.notify();
            let search = state.search.trim().to_string();
            (token, state.folder, search)
        });

        let query = MailQuery {
            search: if search.is_empty() { None } else { Some(search) },
        };
        let mail = cx.global::<Sources>().mail.clone();
        let entities = self.entities.clone();

        cx.spawn(async move |cx| {
            let result = mail.list(folder, query).await;
            let _ = cx.update(|cx: &mut App| {
                entities.mail.update(cx, |state, cx| {
                    if state.apply_fetch(token, result) {
                        cx.notify();
                    }
                });
            });
        })
        .detach();
    }

    /// Switch folder and refetch
    pub fn set_folder(&self, folder: Folder, cx: &mut App) {
        let changed = self.entities.mail.update(cx, |state, cx| {
            let changed = state.set_folder(folder);
            cx.notify();
            changed
        });
        if changed {
            self.refresh(cx);
        }
    }

    /// Open a message: select it, mark it read, and pull the full body when
    /// the source supports single-message fetches
    pub fn open(&self, id: String, cx: &mut App) {
        let was_unread = self.entities.mail.update(cx, |state, cx| {
            state.select(Some(id.clone()));
            let was_unread = state.message(&id).is_some_and(|m| !m.read);
            if was_unread {
                state.mark_read_local(&id);
            }
            cx.notify();
            was_unread
        });

        let mail = cx.global::<Sources>().mail.clone();
        let entities = self.entities.clone();

        if let Some(fetch) = mail.fetch(&id) {
            let entities = entities.clone();
            cx.spawn(async move |cx| {
                if let Ok(message) = fetch.await {
                    let _ = cx.update(|cx: &mut App| {
                        entities.mail.update(cx, |state, cx| {
                            state.apply_message(message);
                            cx.notify();
                        });
                    });
                }
            })
            .detach();
        }

        if !was_unread {
            return;
        }

        cx.spawn(async move |cx| {
            if let Err(e) = mail.mark_read(&id).await {
                let _ = cx.update(|cx: &mut App| {
                    entities.mail.update(cx, |state, cx| {
                        state.set_error(e.to_string());
                        cx.notify();
                    });
                });
            }
        })
        .detach();
    }
}
