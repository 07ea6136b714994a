//! LedgerDesk Library
//!
//! A desktop banking workspace: account overview, transfers, notices, mail,
//! tasks and profile editing, built on GPUI. All domain data flows through
//! narrow source traits so the UI layer never owns persistence.

pub mod app;
pub mod components;
pub mod data;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod state;
pub mod theme;
pub mod utils;
