//! State - Per-Screen State Modules
//!
//! Each module is a plain struct holding one screen's state, split by update
//! frequency to avoid unnecessary re-renders. The logic is pure and
//! unit-testable without GPUI; pages wrap these in `Entity` handles.

pub mod mailbox_state;
pub mod nav_state;
pub mod overview_state;
pub mod profile_state;
pub mod tasks_state;
pub mod transactions_state;
pub mod transfer_state;
