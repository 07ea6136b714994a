//! Tasks Controller
//!
//! Task fetching, draft submission and optimistic status flips.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::data::sources::Sources;
use crate::domain::task::TaskStatus;

/// Tasks page controller
pub struct TasksController {
    entities: AppEntities,
}

impl TasksController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Fetch all tasks
    pub fn refresh(&self, cx: &mut App) {
        self.entities.tasks.update(cx, |state, cx| {
            state.loading = true;
            cx.notify();
        });

        let tasks = cx.global::<Sources>().tasks.clone();
        let entities = self.entities.clone();

        cx.spawn(async move |cx| {
            let result = tasks.tasks().await;
            let _ = cx.update(|cx: &mut App| {
                entities.tasks.update(cx, |state, cx| {
                    match result {
                        Ok(tasks) => state.set_tasks(tasks),
                        Err(e) => state.set_error(e.to_string()),
                    }
                    cx.notify();
                });
            });
        })
        .detach();
    }

    /// Submit the open draft; a draft without a title stays open
    pub fn create(&self, cx: &mut App) {
        let draft = self.entities.tasks.update(cx, |state, cx| {
            let draft = state.take_draft();
            if draft.is_some() {
                state.submitting = true;
            }
            cx.notify();
            draft
        });
        let Some(draft) = draft else {
            return;
        };

        let source = cx.global::<Sources>().tasks.clone();
        let entities = self.entities.clone();
        let restore = draft.clone();

        cx.spawn(async move |cx| {
            let result = source.create(draft).await;
            let _ = cx.update(|cx: &mut App| {
                entities.tasks.update(cx, |state, cx| {
                    match result {
                        Ok(task) => state.apply_created(task),
                        Err(e) => {
                            // put the draft back so nothing typed is lost
                            state.draft = Some(restore);
                            state.set_error(e.to_string());
                        }
                    }
                    cx.notify();
                });
            });
        })
        .detach();
    }

    /// Flip a task's status, optimistically first; on rejection refetch to
    /// restore the source's view
    pub fn set_status(&self, id: String, status: TaskStatus, cx: &mut App) {
        let known = self.entities.tasks.update(cx, |state, cx| {
            let known = state.set_status_local(&id, status);
            cx.notify();
            known
        });
        if !known {
            return;
        }

        let source = cx.global::<Sources>().tasks.clone();
        let entities = self.entities.clone();

        cx.spawn(async move |cx| {
            if let Err(e) = source.set_status(&id, status).await {
                let _ = cx.update(|cx: &mut App| {
                    entities.tasks.update(cx, |state, cx| {
                        state.set_error(e.to_string());
                        cx.notify();
                    });
                });
            }
        })
        .detach();
    }
}
