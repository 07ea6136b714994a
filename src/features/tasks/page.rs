//! Tasks Page
//!
//! Filterable, sortable task list with a new-task draft modal. Ticking a
//! row's checkbox flips it between done and to-do; the draft form is
//! discarded on cancel and only submits once a title exists.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::banner::Banner;
use crate::components::composite::modal::Modal;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::{Button, ButtonVariant};
use crate::components::primitives::checkbox::{CheckState, Checkbox};
use crate::components::primitives::form_field::{FormField, RadioGroup};
use crate::components::primitives::select::{Select, SelectOption};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::task::{Task, TaskPriority, TaskStatus};
use crate::features::tasks::controller::TasksController;
use crate::state::tasks_state::{TaskSort, TasksState};
use crate::theme::colors::DeskColors;
use crate::theme::status::{task_priority_color, task_status_color};
use crate::utils::format::{format_date, truncate};

const ALL: &str = "all";

/// Tasks page component
pub struct TasksPage {
    entities: AppEntities,
    controller: TasksController,
    search_input: Entity<TextInput>,
    title_input: Entity<TextInput>,
    notes_input: Entity<TextInput>,
    due_input: Entity<TextInput>,
    focus_handle: FocusHandle,
}

impl TasksPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = TasksController::new(entities.clone());

        let search_input = text_input("task-search", "", "Search tasks...", cx);
        {
            let tasks = entities.tasks.clone();
            search_input.update(cx, |input, _| {
                input.on_change(move |value, cx| {
                    let value = value.to_string();
                    tasks.update(cx, |state, cx| {
                        state.search = value;
                        cx.notify();
                    });
                });
            });
        }

        let title_input = text_input("task-title", "", "What needs doing?", cx);
        {
            let tasks = entities.tasks.clone();
            title_input.update(cx, |input, _| {
                input.on_change(move |value, cx| {
                    let value = value.to_string();
                    tasks.update(cx, |state, cx| {
                        if let Some(draft) = state.draft.as_mut() {
                            draft.title = value;
                        }
                        cx.notify();
                    });
                });
            });
        }

        let notes_input = cx.new(|cx| {
            let mut input = TextInput::new("task-notes", cx);
            input.set_placeholder("Notes");
            input.set_multiline(true);
            input
        });
        {
            let tasks = entities.tasks.clone();
            notes_input.update(cx, |input, _| {
                input.on_change(move |value, cx| {
                    let value = value.to_string();
                    tasks.update(cx, |state, cx| {
                        if let Some(draft) = state.draft.as_mut() {
                            draft.notes = value;
                        }
                        cx.notify();
                    });
                });
            });
        }

        let due_input = text_input("task-due", "", "YYYY-MM-DD", cx);
        {
            let tasks = entities.tasks.clone();
            due_input.update(cx, |input, _| {
                input.on_change(move |value, cx| {
                    let due = chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .map(|dt| {
                            chrono::DateTime::<chrono::Utc>::from_naive_utc_and_offset(
                                dt,
                                chrono::Utc,
                            )
                        });
                    tasks.update(cx, |state, cx| {
                        if let Some(draft) = state.draft.as_mut() {
                            draft.due_date = due;
                        }
                        cx.notify();
                    });
                });
            });
        }

        cx.observe(&entities.tasks, Self::on_tasks_changed).detach();

        controller.refresh(cx);

        Self {
            entities,
            controller,
            search_input,
            title_input,
            notes_input,
            due_input,
            focus_handle: cx.focus_handle(),
        }
    }

    /// Clear the draft inputs when the draft closes
    fn on_tasks_changed(&mut self, tasks: Entity<TasksState>, cx: &mut Context<Self>) {
        if tasks.read(cx).draft.is_none() {
            for input in [&self.title_input, &self.notes_input, &self.due_input] {
                if !input.read(cx).value().is_empty() {
                    input.update(cx, |input, cx| {
                        input.set_value("");
                        cx.notify();
                    });
                }
            }
        }
        cx.notify();
    }

    fn cancel_draft(&mut self, cx: &mut Context<Self>) {
        self.entities.tasks.update(cx, |state, cx| {
            state.cancel_draft();
            cx.notify();
        });
    }

    fn render_toolbar(&self, cx: &Context<Self>) -> impl IntoElement {
        let state = self.entities.tasks.read(cx);
        let status = state.status_filter;
        let priority = state.priority_filter;
        let sort = state.sort;

        let mut status_options = vec![SelectOption::new(ALL, "All statuses")];
        status_options.extend(
            TaskStatus::all()
                .iter()
                .map(|s| SelectOption::new(s.label(), s.label())),
        );

        let mut priority_options = vec![SelectOption::new(ALL, "All priorities")];
        priority_options.extend(
            TaskPriority::all()
                .iter()
                .map(|p| SelectOption::new(p.label(), p.label())),
        );

        let sort_options: Vec<SelectOption> = TaskSort::all()
            .iter()
            .map(|s| SelectOption::new(s.label(), s.label()))
            .collect();

        let tasks = self.entities.tasks.clone();

        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .child(self.search_input.clone())
            .child(
                Select::new("task-status-filter")
                    .options(status_options)
                    .selected(Some(
                        status.map(|s| s.label().to_string()).unwrap_or(ALL.into()),
                    ))
                    .on_change({
                        let tasks = tasks.clone();
                        move |value, _window, cx| {
                            let status = TaskStatus::all()
                                .iter()
                                .copied()
                                .find(|s| s.label() == value);
                            tasks.update(cx, |state, cx| {
                                state.status_filter = status;
                                cx.notify();
                            });
                        }
                    }),
            )
            .child(
                Select::new("task-priority-filter")
                    .options(priority_options)
                    .selected(Some(
                        priority.map(|p| p.label().to_string()).unwrap_or(ALL.into()),
                    ))
                    .on_change({
                        let tasks = tasks.clone();
                        move |value, _window, cx| {
                            let priority = TaskPriority::all()
                                .iter()
                                .copied()
                                .find(|p| p.label() == value);
                            tasks.update(cx, |state, cx| {
                                state.priority_filter = priority;
                                cx.notify();
                            });
                        }
                    }),
            )
            .child(
                Select::new("task-sort")
                    .options(sort_options)
                    .selected(Some(sort.label().to_string()))
                    .on_change({
                        let tasks = tasks.clone();
                        move |value, _window, cx| {
                            let sort = TaskSort::all()
                                .iter()
                                .copied()
                                .find(|s| s.label() == value)
                                .unwrap_or_default();
                            tasks.update(cx, |state, cx| {
                                state.sort = sort;
                                cx.notify();
                            });
                        }
                    }),
            )
            .child(
                Button::primary("task-new", "New task").on_click(cx.listener(
                    |this, _event: &ClickEvent, _window, cx| {
                        this.entities.tasks.update(cx, |state, cx| {
                            state.open_draft();
                            cx.notify();
                        });
                    },
                )),
            )
    }

    /// Aggregate checkbox over the visible rows: checked when every row is
    /// done, indeterminate when only some are. Clicking completes the
    /// remainder, or reopens everything once all are done.
    fn render_list_header(&self, rows: &[Task], cx: &Context<Self>) -> impl IntoElement {
        let state =
            CheckState::from_iter(rows.iter().map(|t| t.status == TaskStatus::Completed));
        let visible: Vec<(String, bool)> = rows
            .iter()
            .map(|t| (t.id.clone(), t.status == TaskStatus::Completed))
            .collect();
        let page = cx.entity();

        div()
            .w_full()
            .px_3()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(DeskColors::border())
            .child(
                Checkbox::new("task-toggle-all")
                    .state(state)
                    .disabled(rows.is_empty())
                    .label(if state == CheckState::Checked {
                        "Reopen all"
                    } else {
                        "Mark all done"
                    })
                    .on_change(move |checked, _window, cx| {
                        let target = if checked {
                            TaskStatus::Completed
                        } else {
                            TaskStatus::ToDo
                        };
                        page.update(cx, |this, cx| {
                            for (id, done) in &visible {
                                if *done != checked {
                                    this.controller.set_status(id.clone(), target, cx);
                                }
                            }
                        });
                    }),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(DeskColors::text_muted())
                    .child(format!("{} shown", rows.len())),
            )
    }

    fn render_row(&self, task: &Task, cx: &Context<Self>) -> impl IntoElement {
        let id = task.id.clone();
        let page = cx.entity();
        let done = task.status == TaskStatus::Completed;
        let overdue = task
            .due_date
            .is_some_and(|due| due < chrono::Utc::now() && !done);

        div()
            .id(SharedString::from(format!("task-{}", task.id)))
            .w_full()
            .px_3()
            .py_2()
            .flex()
            .items_center()
            .gap_3()
            .border_b_1()
            .border_color(DeskColors::border())
            .hover(|s| s.bg(DeskColors::table_row_hover()))
            .child(
                Checkbox::new(SharedString::from(format!("task-done-{}", task.id)))
                    .checked(done)
                    .on_change(move |checked, _window, cx| {
                        let status = if checked {
                            TaskStatus::Completed
                        } else {
                            TaskStatus::ToDo
                        };
                        let id = id.clone();
                        page.update(cx, |this, cx| {
                            this.controller.set_status(id, status, cx);
                        });
                    }),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap_0p5()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .text_color(if done {
                                DeskColors::text_muted()
                            } else {
                                DeskColors::text_primary()
                            })
                            .when(done, |el| el.line_through())
                            .child(task.title.clone()),
                    )
                    .when(!task.notes.is_empty(), |el| {
                        el.child(
                            div()
                                .text_xs()
                                .text_color(DeskColors::text_secondary())
                                .child(truncate(&task.notes, 80)),
                        )
                    }),
            )
            .child(Badge::new(task.status.label(), task_status_color(task.status)))
            .child(Badge::new(
                task.priority.label(),
                task_priority_color(task.priority),
            ))
            .child(
                div()
                    .w(px(90.0))
                    .text_xs()
                    .text_color(if overdue {
                        DeskColors::danger()
                    } else {
                        DeskColors::text_muted()
                    })
                    .child(
                        task.due_date
                            .map(|d| format_date(&d))
                            .unwrap_or_else(|| "No due date".to_string()),
                    ),
            )
    }

    fn render_draft_modal(&self, cx: &Context<Self>) -> impl IntoElement {
        let state = self.entities.tasks.read(cx);
        let open = state.draft.is_some();
        let submitting = state.submitting;
        let priority = state
            .draft
            .as_ref()
            .map(|d| d.priority)
            .unwrap_or_default();
        let has_title = state
            .draft
            .as_ref()
            .is_some_and(|d| !d.title.trim().is_empty());

        let page = cx.entity();
        let close_page = page.clone();
        let cancel_page = page.clone();
        let create_page = page;

        let tasks = self.entities.tasks.clone();
        let priority_group = RadioGroup::new("task-priority")
            .selected(Some(priority.label().to_string()))
            .on_change(move |value, _window, cx| {
                let priority = TaskPriority::all()
                    .iter()
                    .copied()
                    .find(|p| p.label() == value)
                    .unwrap_or_default();
                tasks.update(cx, |state, cx| {
                    if let Some(draft) = state.draft.as_mut() {
                        draft.priority = priority;
                    }
                    cx.notify();
                });
            });
        let priority_group = TaskPriority::all()
            .iter()
            .fold(priority_group, |group, p| group.option(p.label(), p.label()));

        Modal::new("New task")
            .open(open)
            .on_close(move |cx| {
                close_page.update(cx, |this, cx| this.cancel_draft(cx));
            })
            .child(
                FormField::new()
                    .label("Title")
                    .required()
                    .control(self.title_input.clone()),
            )
            .child(FormField::new().label("Notes").control(self.notes_input.clone()))
            .child(FormField::new().label("Priority").control(priority_group))
            .child(
                FormField::new()
                    .label("Due date")
                    .help("Format: YYYY-MM-DD")
                    .control(self.due_input.clone()),
            )
            .footer(
                Button::new("task-cancel", "Cancel")
                    .variant(ButtonVariant::Ghost)
                    .disabled(submitting)
                    .on_click(move |_event, _window, cx| {
                        cancel_page.update(cx, |this, cx| this.cancel_draft(cx));
                    }),
            )
            .footer(
                Button::primary("task-create", "Create task")
                    .disabled(!has_title)
                    .loading(submitting)
                    .on_click(move |_event, _window, cx| {
                        create_page.update(cx, |this, cx| this.controller.create(cx));
                    }),
            )
    }
}

impl Focusable for TasksPage {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TasksPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.entities.tasks.read(cx);
        let loading = state.loading;
        let error = state.error.clone();
        let rows: Vec<Task> = state.filtered().into_iter().cloned().collect();
        let open_count = state
            .tasks
            .iter()
            .filter(|t| t.status != TaskStatus::Completed && t.status != TaskStatus::Cancelled)
            .count();

        div()
            .id("tasks-page")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                if event.keystroke.key == "escape"
                    && this.entities.tasks.read(cx).draft.is_some()
                {
                    this.cancel_draft(cx);
                }
            }))
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_3()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(DeskColors::text_primary())
                            .child("Tasks"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(DeskColors::text_secondary())
                            .child(format!("{open_count} open")),
                    ),
            )
            .when_some(error, |el, message| el.child(Banner::error(message)))
            .child(self.render_toolbar(cx))
            .child(
                div()
                    .id("task-list")
                    .flex_1()
                    .overflow_y_scroll()
                    .bg(DeskColors::content_bg())
                    .border_1()
                    .border_color(DeskColors::border())
                    .rounded_lg()
                    .when(!loading, |el| el.child(self.render_list_header(&rows, cx)))
                    .when(loading, |el| {
                        el.child(
                            div()
                                .py_8()
                                .flex()
                                .justify_center()
                                .text_color(DeskColors::text_muted())
                                .child("Loading..."),
                        )
                    })
                    .when(!loading && rows.is_empty(), |el| {
                        el.child(
                            div()
                                .py_8()
                                .flex()
                                .justify_center()
                                .text_color(DeskColors::text_muted())
                                .child("No tasks match the current filters"),
                        )
                    })
                    .children(rows.iter().map(|task| self.render_row(task, cx))),
            )
            .child(self.render_draft_modal(cx))
    }
}
