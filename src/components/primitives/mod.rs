//! Primitive Components
//!
//! Basic building blocks: buttons, inputs, avatars, badges.

pub mod avatar;
pub mod badge;
pub mod button;
pub mod checkbox;
pub mod form_field;
pub mod select;
pub mod text_input;
