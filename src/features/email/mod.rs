//! Email Feature - Folder-Based Mail Client

pub mod controller;
pub mod page;
