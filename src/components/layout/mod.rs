//! Layout Components
//!
//! Application chrome: header and navigation sidebar.

pub mod header;
pub mod sidebar;
