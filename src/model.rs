//! Pure UI state
//!
//! Each model owns its state and changes only through `update`, so it can be
//! exercised without a terminal.

pub mod contact_form;
pub mod navigation;
pub mod projects;
pub mod reveal;
pub mod skills;
pub mod status_bar;
