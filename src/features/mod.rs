//! Features - One Slice per Screen
//!
//! Each feature pairs a page (rendering, GPUI plumbing) with a controller
//! (source calls and state transitions).

pub mod email;
pub mod messages;
pub mod overview;
pub mod profile;
pub mod tasks;
pub mod transfer;
