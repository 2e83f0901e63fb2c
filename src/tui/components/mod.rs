//! Shared UI components.

pub mod status_bar;
