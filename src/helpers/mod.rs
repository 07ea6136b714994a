//! Helpers - Small Reusable Building Blocks

pub mod draft;
pub mod generation;
pub mod string;
