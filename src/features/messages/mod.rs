//! Messages Feature - Banking Notices

pub mod controller;
pub mod page;
