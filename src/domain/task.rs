//! Task - Work Item Data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    ToDo,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    /// Display label for the status
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To do",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Cancelled => "Cancelled",
        }
    }

    /// All statuses, for filter controls
    pub fn all() -> &'static [TaskStatus] {
        &[
            TaskStatus::ToDo,
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::Cancelled,
        ]
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    /// Display label for the priority
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Urgent => "Urgent",
        }
    }

    /// All priorities, for filter controls
    pub fn all() -> &'static [TaskPriority] {
        &[
            TaskPriority::Low,
            TaskPriority::Medium,
            TaskPriority::High,
            TaskPriority::Urgent,
        ]
    }
}

/// Weak reference from a task to a customer or deal, resolved by linear
/// lookup in host-supplied lists, never owned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "id")]
pub enum TaskLink {
    Customer(String),
    Deal(String),
}

/// A work item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID
    pub id: String,
    /// Title
    pub title: String,
    /// Free-form notes
    pub notes: String,
    /// Lifecycle status
    pub status: TaskStatus,
    /// Priority
    pub priority: TaskPriority,
    /// Optional due date; tasks without one sort after dated tasks
    pub due_date: Option<DateTime<Utc>>,
    /// Optional weak relation to a customer or deal
    pub link: Option<TaskLink>,
}

impl Default for Task {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            notes: String::new(),
            status: TaskStatus::ToDo,
            priority: TaskPriority::Medium,
            due_date: None,
            link: None,
        }
    }
}

/// Transient new-task form contents, discarded on cancel/submit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub notes: String,
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
}
