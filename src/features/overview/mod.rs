//! Overview Feature - Accounts and Transaction History

pub mod controller;
pub mod page;
