//! View layouts.

pub mod detail;
pub mod list;
