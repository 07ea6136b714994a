//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the data shapes a host
//! application injects. The kit never owns, migrates, or deletes the
//! authoritative copies; only transient drafts live inside the UI.

pub mod account;
pub mod contact;
pub mod message;
pub mod task;
pub mod transaction;
pub mod user;
