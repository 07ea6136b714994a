//! Profile Feature - Account Holder Profile Editor

pub mod controller;
pub mod page;
