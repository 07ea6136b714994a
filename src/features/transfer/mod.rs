//! Transfer Feature - Money Movement Form

pub mod controller;
pub mod page;
