//! Profile Controller

use gpui::App;

use crate::app::entities::AppEntities;
use crate::data::sources::Sources;

/// Profile page controller
pub struct ProfileController {
    entities: AppEntities,
}

impl ProfileController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Fetch the committed profile, discarding local edits
    pub fn load(&self, cx: &mut App) {
        self.entities.profile.update(cx, |state, cx| {
            state.loading = true;
            cx.notify();
        });

        let bank = cx.global::<Sources>().bank.clone();
        let entities = self.entities.clone();

        cx.spawn(async move |cx| {
            let result = bank.profile().await;
            let _ = cx.update(|cx: &mut App| {
                entities.profile.update(cx, |state, cx| {
                    match result {
                        Ok(profile) => state.load(profile),
                        Err(e) => {
                            state.loading = false;
                            state.error = Some(e.to_string());
                        }
                    }
                    cx.notify();
                });
            });
        })
        .detach();
    }

    /// Save the dirty draft; a clean draft is a no-op
    pub fn save(&self, cx: &mut App) {
        let draft = self.entities.profile.update(cx, |state, cx| {
            let draft = state.begin_save();
            cx.notify();
            draft
        });
        let Some(draft) = draft else {
            return;
        };

        let bank = cx.global::<Sources>().bank.clone();
        let entities = self.entities.clone();

        cx.spawn(async move |cx| {
            let result = bank.save_profile(draft).await;
            let _ = cx.update(|cx: &mut App| {
                entities.profile.update(cx, |state, cx| {
                    match result {
                        Ok(()) => state.save_succeeded(),
                        Err(e) => state.save_failed(e.to_string()),
                    }
                    cx.notify();
                });
            });
        })
        .detach();
    }
}
