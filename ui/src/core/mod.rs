//! Platform-agnostic navbar logic: layout tracking, link classification,
//! menu model, popover state and configuration.

pub mod active;
pub mod config;
pub mod layout;
pub mod menu;
pub mod overlay;
