//! Utils - Formatting and Preference Storage

pub mod config_store;
pub mod format;
