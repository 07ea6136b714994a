//! TasksState - Task Filtering, Sorting and Draft Form
//!
//! Same filter-then-sort shape as the transaction list, plus a transient
//! new-task draft that is discarded on cancel and handed to the source on
//! submit. Tasks without a due date sort after dated tasks in either
//! direction.

use std::cmp::Ordering;

use crate::domain::task::{Task, TaskDraft, TaskPriority, TaskStatus};

/// Sort key for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskSort {
    #[default]
    DueDateAsc,
    DueDateDesc,
    PriorityDesc,
    TitleAsc,
}

impl TaskSort {
    pub fn label(&self) -> &'static str {
        match self {
            TaskSort::DueDateAsc => "Due soonest",
            TaskSort::DueDateDesc => "Due latest",
            TaskSort::PriorityDesc => "Priority",
            TaskSort::TitleAsc => "Title",
        }
    }

    pub fn all() -> &'static [TaskSort] {
        &[
            TaskSort::DueDateAsc,
            TaskSort::DueDateDesc,
            TaskSort::PriorityDesc,
            TaskSort::TitleAsc,
        ]
    }
}

/// Compare optional due dates, pushing missing dates to the end for both
/// directions
fn cmp_due(a: &Task, b: &Task, ascending: bool) -> Ordering {
    match (a.due_date, b.due_date) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(da), Some(db)) => {
            if ascending {
                da.cmp(&db)
            } else {
                db.cmp(&da)
            }
        }
    }
}

/// State for the task list screen
#[derive(Debug, Clone, Default)]
pub struct TasksState {
    pub tasks: Vec<Task>,
    pub status_filter: Option<TaskStatus>,
    pub priority_filter: Option<TaskPriority>,
    /// Free-text match against title and notes
    pub search: String,
    pub sort: TaskSort,
    /// Open new-task form, when present
    pub draft: Option<TaskDraft>,
    pub loading: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl TasksState {
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.loading = false;
        self.error = None;
    }

    fn matches(&self, task: &Task) -> bool {
        if self.status_filter.is_some_and(|s| task.status != s) {
            return false;
        }
        if self.priority_filter.is_some_and(|p| task.priority != p) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty()
            && !task.title.to_lowercase().contains(&needle)
            && !task.notes.to_lowercase().contains(&needle)
        {
            return false;
        }
        true
    }

    /// Apply the filter chain, then the selected comparator.
    /// The source rows are left untouched.
    pub fn filtered(&self) -> Vec<&Task> {
        let mut rows: Vec<&Task> = self.tasks.iter().filter(|t| self.matches(t)).collect();
        match self.sort {
            TaskSort::DueDateAsc => rows.sort_by(|a, b| cmp_due(a, b, true)),
            TaskSort::DueDateDesc => rows.sort_by(|a, b| cmp_due(a, b, false)),
            TaskSort::PriorityDesc => rows.sort_by(|a, b| b.priority.cmp(&a.priority)),
            TaskSort::TitleAsc => {
                rows.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
            }
        }
        rows
    }

    /// Open an empty draft form
    pub fn open_draft(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(TaskDraft::default());
        }
    }

    /// Discard the draft without submitting
    pub fn cancel_draft(&mut self) {
        self.draft = None;
    }

    /// Take the draft for submission, when it has a title
    pub fn take_draft(&mut self) -> Option<TaskDraft> {
        let ready = self
            .draft
            .as_ref()
            .is_some_and(|d| !d.title.trim().is_empty());
        if ready { self.draft.take() } else { None }
    }

    /// A created task came back from the source
    pub fn apply_created(&mut self, task: Task) {
        self.tasks.push(task);
        self.submitting = false;
    }

    /// Optimistically update a task's status before the source settles
    pub fn set_status_local(&mut self, id: &str, status: TaskStatus) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.status = status;
                true
            }
            None => false,
        }
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.loading = false;
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn task(id: &str, status: TaskStatus, priority: TaskPriority, due_days: Option<i64>) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {id}"),
            status,
            priority,
            due_date: due_days.map(|d| Utc::now() + Duration::days(d)),
            ..Default::default()
        }
    }

    fn populated() -> TasksState {
        TasksState {
            tasks: vec![
                task("a", TaskStatus::ToDo, TaskPriority::High, Some(3)),
                task("b", TaskStatus::InProgress, TaskPriority::Low, Some(1)),
                task("c", TaskStatus::ToDo, TaskPriority::Urgent, None),
                task("d", TaskStatus::Completed, TaskPriority::High, Some(2)),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_unfiltered_keeps_every_task() {
        let state = populated();
        assert_eq!(state.filtered().len(), 4);
    }

    #[test]
    fn test_filters_yield_satisfying_subset() {
        let mut state = populated();
        for status in TaskStatus::all() {
            for priority in TaskPriority::all() {
                state.status_filter = Some(*status);
                state.priority_filter = Some(*priority);
                let out = state.filtered();
                assert!(out
                    .iter()
                    .all(|t| t.status == *status && t.priority == *priority));
                let expected = state
                    .tasks
                    .iter()
                    .filter(|t| t.status == *status && t.priority == *priority)
                    .count();
                assert_eq!(out.len(), expected);
            }
        }
    }

    #[test]
    fn test_missing_due_dates_sort_last_both_directions() {
        let mut state = populated();
        state.sort = TaskSort::DueDateAsc;
        assert_eq!(state.filtered().last().map(|t| t.id.as_str()), Some("c"));

        state.sort = TaskSort::DueDateDesc;
        assert_eq!(state.filtered().last().map(|t| t.id.as_str()), Some("c"));
    }

    #[test]
    fn test_due_date_ascending_order() {
        let mut state = populated();
        state.sort = TaskSort::DueDateAsc;
        let ids: Vec<&str> = state.filtered().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_priority_sort_descending() {
        let mut state = populated();
        state.sort = TaskSort::PriorityDesc;
        let first = state.filtered()[0].priority;
        assert_eq!(first, TaskPriority::Urgent);
    }

    #[test]
    fn test_search_matches_title() {
        let mut state = populated();
        state.search = "task b".into();
        let out = state.filtered();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "b");
    }

    #[test]
    fn test_draft_lifecycle() {
        let mut state = populated();
        state.open_draft();
        assert!(state.draft.is_some());

        // empty title is not submittable
        assert!(state.take_draft().is_none());
        assert!(state.draft.is_some());

        state.draft.as_mut().map(|d| d.title = "Ship it".into());
        let draft = state.take_draft().expect("draft");
        assert_eq!(draft.title, "Ship it");
        assert!(state.draft.is_none());

        state.open_draft();
        state.cancel_draft();
        assert!(state.draft.is_none());
    }

    #[test]
    fn test_optimistic_status_update() {
        let mut state = populated();
        assert!(state.set_status_local("a", TaskStatus::Completed));
        assert_eq!(
            state.tasks.iter().find(|t| t.id == "a").map(|t| t.status),
            Some(TaskStatus::Completed)
        );
        assert!(!state.set_status_local("zz", TaskStatus::ToDo));
    }
}
