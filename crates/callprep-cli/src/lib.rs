//! CLI library components for call-prep identity validation.

pub mod input;
pub mod logging;
