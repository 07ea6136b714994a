//! Data - Injected Data-Source Boundary
//!
//! The kit performs no I/O of its own. Every fetch and mutation goes through
//! a narrow capability trait the host implements; the screens only decide
//! when to call them and how to render the pending/success/error result.

pub mod memory;
pub mod sources;
