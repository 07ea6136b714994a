//! Tasks Feature - Work Item List

pub mod controller;
pub mod page;
