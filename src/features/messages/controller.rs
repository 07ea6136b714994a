//! Messages Controller
//!
//! Fetches notice categories through the mail source. Every fetch carries
//! the mailbox generation token so a stale category response cannot
//! overwrite a newer one.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::data::sources::{MailQuery, Sources};
use crate::domain::message::Folder;

/// Messages page controller
pub struct MessagesController {
    entities: AppEntities,
}

impl MessagesController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Fetch the active category
    pub fn refresh(&self, cx: &mut App) {
        let (token, folder) = self.entities.notices.update(cx, |state, cx| {
            let token = state.begin_fetch();
            cx.notify();
            (token, state.folder)
        });

        let mail = cx.global::<Sources>().mail.clone();
        let entities = self.entities.clone();

        cx.spawn(async move |cx| {
            let result = mail.list(folder, MailQuery::default()).await;
            let _ = cx.update(|cx: &mut App| {
                entities.notices.update(cx, |state, cx| {
                    if state.apply_fetch(token, result) {
                        cx.notify();
                    }
                });
            });
        })
        .detach();
    }

    /// Switch to another notice category and refetch
    pub fn set_folder(&self, folder: Folder, cx: &mut App) {
        let changed = self.entities.notices.update(cx, |state, cx| {
            let changed = state.set_folder(folder);
            cx.notify();
            changed
        });
        if changed {
            self.refresh(cx);
        }
    }

    /// Open a notice: select it and flag it read, optimistically first
    pub fn open(&self, id: String, cx: &mut App) {
        let was_unread = self.entities.notices.update(cx, |state, cx| {
            state.select(Some(id.clone()));
            let was_unread = state.message(&id).is_some_and(|m| !m.read);
            if was_unread {
                state.mark_read_local(&id);
            }
            cx.notify();
            was_unread
        });
        if !was_unread {
            return;
        }

        let mail = cx.global::<Sources>().mail.clone();
        let entities = self.entities.clone();

        cx.spawn(async move |cx| {
            let result = mail.mark_read(&id).await;
            if let Err(e) = result {
                let _ = cx.update(|cx: &mut App| {
                    entities.notices.update(cx, |state, cx| {
                        state.set_error(e.to_string());
                        cx.notify();
                    });
                });
            }
        })
        .detach();
    }
}
