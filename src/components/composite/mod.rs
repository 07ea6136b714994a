//! Composite Components
//!
//! Larger building blocks assembled from primitives.

pub mod banner;
pub mod chat_header;
pub mod data_table;
pub mod modal;
pub mod transaction_list;
