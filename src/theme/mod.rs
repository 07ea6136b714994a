//! Theme - Colors, Typography and Status Palettes

pub mod colors;
pub mod status;
pub mod typography;
