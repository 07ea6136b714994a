//! Status - Color Lookups for Domain Statuses
//!
//! Maps presence strings and domain status enums to palette colors. Unknown
//! presence strings resolve to a neutral fallback rather than erroring.

use gpui::Rgba;

use crate::domain::task::{TaskPriority, TaskStatus};
use crate::domain::transaction::TransactionStatus;
use crate::theme::colors::DeskColors;

/// Resolve an avatar presence string to a dot color.
///
/// The table is open-ended on purpose: hosts pass arbitrary presence strings
/// and anything unrecognized falls back to the muted gray.
pub fn presence_color(presence: &str) -> Rgba {
    match presence {
        "online" | "active" => DeskColors::success(),
        "away" | "idle" => DeskColors::warning(),
        "busy" | "dnd" => DeskColors::danger(),
        "offline" => DeskColors::text_muted(),
        _ => DeskColors::text_muted(),
    }
}

/// Color for a transaction status badge
pub fn transaction_status_color(status: TransactionStatus) -> Rgba {
    match status {
        TransactionStatus::Completed => DeskColors::success(),
        TransactionStatus::Pending => DeskColors::warning(),
        TransactionStatus::Failed => DeskColors::danger(),
        TransactionStatus::Canceled => DeskColors::text_muted(),
    }
}

/// Color for a task status badge
pub fn task_status_color(status: TaskStatus) -> Rgba {
    match status {
        TaskStatus::ToDo => DeskColors::info(),
        TaskStatus::InProgress => DeskColors::warning(),
        TaskStatus::Completed => DeskColors::success(),
        TaskStatus::Cancelled => DeskColors::text_muted(),
    }
}

/// Color for a task priority badge
pub fn task_priority_color(priority: TaskPriority) -> Rgba {
    match priority {
        TaskPriority::Low => DeskColors::text_secondary(),
        TaskPriority::Medium => DeskColors::info(),
        TaskPriority::High => DeskColors::warning(),
        TaskPriority::Urgent => DeskColors::danger(),
    }
}
