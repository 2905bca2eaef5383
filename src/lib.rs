//! # Folio - a portfolio for the terminal
//!
//! A single scrolling page of sections (hero, about, skills, projects,
//! experience, contact) rendered with Ratatui.
//!
//! ## Architecture Overview
//!
//! - [`tui`] turns terminal input into events.
//! - [`app`] maps events to [`action::Action`]s through the keymap of the
//!   current [`mode::Mode`] and broadcasts them to [`components`].
//! - [`model`] holds pure state machines driven by `update(Message)`.
//! - [`widgets`] render the models into lines of styled text.
//! - [`typewriter`] runs the rotating-headline animation on its own task.
//! - [`visibility`] and [`theme`] are the shared signals the page reacts to.
//!
//! ## Example Usage
//!
//! ```rust
//! use folio::model::contact_form::{ContactForm, Field, Message};
//!
//! let mut form = ContactForm::default();
//! form.update(Message::SubmitRequested);
//! assert_eq!(form.error(Field::Name), Some("Name is required"));
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod content;
pub mod mode;
pub mod model;
pub mod outbox;
pub mod section;
pub mod text;
pub mod theme;
pub mod tui;
pub mod typewriter;
pub mod utils;
pub mod visibility;
pub mod widgets;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
